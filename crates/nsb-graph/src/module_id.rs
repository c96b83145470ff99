//! Module identity.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use path_clean::PathClean;
use serde::{Deserialize, Serialize};

/// Stable identity of a module: its (cleaned) file path.
///
/// Backed by `Arc<Path>` so the graph can copy ids between snapshots without
/// reallocating. Ordering is byte-wise on the path text, which is the lexical
/// order the resolver uses to break ties inside a layer.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(Arc<Path>);

impl ModuleId {
    /// Create an id from a path, removing `.` and redundant `..` components.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let cleaned: PathBuf = path.as_ref().clean();
        Self(Arc::from(cleaned))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Path rendered as a `String` (lossy on non-UTF-8 paths).
    pub fn path_string(&self) -> String {
        self.0.to_string_lossy().into_owned()
    }

    /// File name without its final extension (`tree.node.js` → `tree.node`).
    pub fn base_name(&self) -> Option<&str> {
        self.0.file_stem().and_then(|stem| stem.to_str())
    }
}

impl PartialEq for ModuleId {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_os_str() == other.0.as_os_str()
    }
}

impl Eq for ModuleId {}

impl Hash for ModuleId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.as_os_str().hash(state);
    }
}

impl Ord for ModuleId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.as_os_str().cmp(other.0.as_os_str())
    }
}

impl PartialOrd for ModuleId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl fmt::Debug for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleId({})", self.0.display())
    }
}

impl From<&str> for ModuleId {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<PathBuf> for ModuleId {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for ModuleId {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}
