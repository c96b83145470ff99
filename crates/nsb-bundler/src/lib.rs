//! # nsb-bundler
//!
//! Concatenates a namespace-style source tree into one ordered bundle, on top
//! of the `nsb-graph` resolution engine.
//!
//! ## Quick Start
//!
//! ```no_run
//! use nsb_bundler::BundleOptions;
//!
//! # fn main() -> nsb_bundler::Result<()> {
//! let result = BundleOptions::new("./src")
//!     .separator("\n;\n")
//!     .build()?;
//!
//! println!("{} modules, {} bytes", result.stats.modules, result.stats.bytes);
//! result.write_to("dist/bundle.js", true)?;
//! # Ok(()) }
//! ```
//!
//! The pipeline runs to completion before anything is written: discovery,
//! loading, graph construction, resolution and validation all succeed, or no
//! bundle is produced.

// Re-export everything from the foundation crate
pub use nsb_graph::*;

pub mod assembler;
pub mod builders;
pub mod discovery;
pub mod output;

/// The resolution engine's error, named apart from this crate's [`Error`].
pub use nsb_graph::Error as GraphError;

pub use assembler::{Assembled, Assembler, STRICT_DIRECTIVE, strip_strict_directive};
pub use builders::{BundleOptions, BundleResult, build};
pub use discovery::{DEFAULT_EXTENSIONS, discover};
pub use output::{BundleStats, write_bundle_to};

use std::path::PathBuf;

/// Error types for nsb-bundler operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the resolution engine.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The source root does not exist.
    #[error("Source root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Walking the source tree failed.
    #[error("Failed to discover sources under '{}': {source}", .root.display())]
    Discovery {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Invalid options provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A module in the load order has no loaded source text.
    #[error("No source loaded for resolved module '{0}'")]
    MissingSource(ModuleId),

    /// Invalid output path.
    #[error("Invalid output path: {0}")]
    InvalidOutputPath(String),

    /// File write operation failed.
    #[error("Write failure: {0}")]
    WriteFailure(String),

    /// Output file already exists and overwrite is disabled.
    #[error("Output exists: {0}")]
    OutputExists(String),
}

/// Result type alias for nsb-bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

impl miette::Diagnostic for Error {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            Error::Graph(GraphError::FileRead { .. }) => "FILE_READ",
            Error::Graph(GraphError::CyclicDependency { .. }) => "CYCLIC_DEPENDENCY",
            Error::Graph(GraphError::OrderInvariantViolation { .. }) => "ORDER_INVARIANT",
            Error::Graph(GraphError::AmbiguousSymbol { .. }) => "AMBIGUOUS_SYMBOL",
            Error::RootNotFound(_) => "ROOT_NOT_FOUND",
            Error::Discovery { .. } => "DISCOVERY_FAILED",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::MissingSource(_) => "MISSING_SOURCE",
            Error::InvalidOutputPath(_) => "INVALID_OUTPUT_PATH",
            Error::WriteFailure(_) => "WRITE_FAILURE",
            Error::OutputExists(_) => "OUTPUT_EXISTS",
        }))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        match self {
            Error::Graph(GraphError::CyclicDependency { cycle, .. }) => {
                Some(Box::new(format!(
                    "{} module(s) reference each other in a loop.\nMove the shared part into a module that none of them references, or drop one reference.",
                    cycle.len().saturating_sub(1)
                )))
            }
            Error::Graph(GraphError::OrderInvariantViolation { .. }) => Some(Box::new(
                "This is a bug in the resolver, not in your sources. Please report it.",
            )),
            Error::Graph(GraphError::AmbiguousSymbol { symbol, .. }) => {
                Some(Box::new(format!(
                    "Every owning symbol must be defined by exactly one file.\nRename or remove one of the definitions of '{}', or use the lenient symbol policy.",
                    symbol
                )))
            }
            Error::Graph(GraphError::FileRead { path, .. }) => Some(Box::new(format!(
                "Check that '{}' exists and is readable.",
                path.display()
            ))),
            Error::RootNotFound(path) => Some(Box::new(format!(
                "The source root '{}' does not exist. Check the path or your working directory.",
                path.display()
            ))),
            Error::MissingSource(_) => Some(Box::new(
                "The load order and the source set passed to the assembler must come from the same build.",
            )),
            Error::InvalidConfig(msg) => Some(Box::new(format!(
                "Check your configuration for invalid values.\nError: {}",
                msg
            ))),
            Error::InvalidOutputPath(path) => Some(Box::new(format!(
                "The output path '{}' is invalid. It must name a file, not a directory.",
                path
            ))),
            Error::WriteFailure(msg) => Some(Box::new(format!(
                "Failed to write file. Check disk space and permissions.\nError: {}",
                msg
            ))),
            Error::OutputExists(msg) => Some(Box::new(format!(
                "Output file already exists: {}\nUse --overwrite flag to replace existing files.",
                msg
            ))),
            _ => None,
        }
    }
}
