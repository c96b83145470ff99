//! In-memory runtime for tests.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use path_clean::PathClean;
use rustc_hash::FxHashMap;

use super::{Runtime, RuntimeError, RuntimeResult};

/// Runtime serving files from memory and counting reads per path.
///
/// Paths registered with [`TestRuntime::fail`] return an I/O error, which is
/// how tests simulate unreadable files.
#[derive(Debug, Default)]
pub struct TestRuntime {
    files: FxHashMap<PathBuf, Vec<u8>>,
    failing: FxHashMap<PathBuf, String>,
    reads: Mutex<FxHashMap<PathBuf, usize>>,
}

impl TestRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.as_ref().clean(), content.into());
        self
    }

    pub fn fail(mut self, path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        self.failing.insert(path.as_ref().clean(), reason.into());
        self
    }

    /// Number of times `path` has been read.
    pub fn reads(&self, path: impl AsRef<Path>) -> usize {
        self.reads
            .lock()
            .get(&path.as_ref().clean())
            .copied()
            .unwrap_or(0)
    }
}

impl Runtime for TestRuntime {
    fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        let key = path.clean();
        *self.reads.lock().entry(key.clone()).or_default() += 1;

        if let Some(reason) = self.failing.get(&key) {
            return Err(RuntimeError::Io(reason.clone()));
        }
        self.files
            .get(&key)
            .cloned()
            .ok_or(RuntimeError::FileNotFound(key))
    }
}
