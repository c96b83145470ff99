use std::path::{Path, PathBuf};

use nsb_graph::{ModuleGraph, ResolvedOrder};

use crate::output::{BundleStats, write_bundle_to};
use crate::Result;

/// Result of a bundle operation.
///
/// Carries the bundle text with the graph and order it was built from.
#[derive(Debug, Clone)]
pub struct BundleResult {
    /// The concatenated bundle.
    pub content: String,

    /// Load order the bundle follows.
    pub order: ResolvedOrder,

    /// Dependency graph of the discovered sources.
    pub graph: ModuleGraph,

    /// Whether a single strict directive heads `content`.
    pub hoisted_strict: bool,

    pub stats: BundleStats,
}

impl BundleResult {
    /// Write the bundle to `path`, atomically.
    ///
    /// Returns the absolute path written.
    pub fn write_to(&self, path: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf> {
        write_bundle_to(&self.content, path.as_ref(), overwrite)
    }

    /// Write the bundle, replacing any existing file.
    pub fn write_to_force(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        self.write_to(path, true)
    }
}
