//! Source snapshot shared by extraction and assembly.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::runtime::Runtime;
use crate::{Error, ModuleId, Result};

/// One source file's identity and contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub id: ModuleId,
    pub content: Arc<str>,
}

/// The complete snapshot of a source tree, keyed by module id.
///
/// Each distinct path is read exactly once when the set is loaded; the
/// contents are then shared between symbol extraction and bundle assembly.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    files: BTreeMap<ModuleId, SourceFile>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every path through `runtime`.
    ///
    /// Paths that clean to the same id are read once. The first unreadable
    /// file aborts the load with [`Error::FileRead`]. Invalid UTF-8 is
    /// replaced rather than rejected.
    pub fn load<I, P>(paths: I, runtime: &dyn Runtime) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut files = BTreeMap::new();
        for path in paths {
            let id = ModuleId::new(path.as_ref());
            if files.contains_key(&id) {
                continue;
            }

            let bytes = runtime
                .read_file(id.as_path())
                .map_err(|source| Error::FileRead {
                    path: id.as_path().to_path_buf(),
                    source,
                })?;
            let content: Arc<str> = Arc::from(String::from_utf8_lossy(&bytes).as_ref());
            files.insert(id.clone(), SourceFile { id, content });
        }

        debug!(files = files.len(), "loaded source snapshot");
        Ok(Self { files })
    }

    /// Build a set from in-memory `(path, content)` pairs. Later duplicates win.
    pub fn from_sources<I, P, C>(sources: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<Path>,
        C: AsRef<str>,
    {
        let mut set = Self::new();
        for (path, content) in sources {
            set.insert(path, content);
        }
        set
    }

    pub fn insert(&mut self, path: impl AsRef<Path>, content: impl AsRef<str>) {
        let id = ModuleId::new(path);
        let file = SourceFile {
            id: id.clone(),
            content: Arc::from(content.as_ref()),
        };
        self.files.insert(id, file);
    }

    pub fn get(&self, id: &ModuleId) -> Option<&SourceFile> {
        self.files.get(id)
    }

    /// Iterate files in ascending path order.
    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.values()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
