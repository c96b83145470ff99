//! Platform runtime abstraction.
//!
//! Resolution needs exactly one thing from the outside world: the bytes of a
//! discovered file. The `Runtime` trait keeps that interface narrow so the
//! graph can be built from disk ([`native::NativeRuntime`]) or from memory
//! in tests.

pub mod native;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use std::path::{Path, PathBuf};

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors that can occur during runtime operations
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

/// Platform runtime trait.
///
/// Reads are synchronous: resolution needs every owning symbol before any
/// reference can be resolved, so there is nothing to overlap.
pub trait Runtime: Send + Sync + std::fmt::Debug {
    /// Read a file from the filesystem
    fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>>;
}
