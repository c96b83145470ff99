//! # nsb-graph
//!
//! Dependency resolution for namespace-style source trees.
//!
//! Every file in a namespace-style tree assigns to one global identifier and
//! refers to the identifiers of other files directly, without `import` or
//! `require`. This crate recovers the implicit dependency relation from the
//! source text and computes a load order in which every file comes after the
//! files it uses.
//!
//! ## Overview
//!
//! - **Symbol extraction** ([`extractor`]): which identifier a file defines
//!   and which known identifiers it references.
//! - **Module graph** ([`ModuleGraph`]): an immutable arena of modules whose
//!   operations return new graph values.
//! - **Resolution** ([`resolve`]): layered Kahn ordering with a lexical
//!   tie-break, failing on cycles.
//! - **Validation** ([`validate`]): a post-condition check on any order.
//!
//! ## Pipeline
//!
//! ```text
//!  paths ──► SourceSet ──► GraphBuilder ──► ModuleGraph ──► resolve() ──► ResolvedOrder
//!            (read once)   (extract, index,                 (layers)      │
//!                           resolve symbols)                              ▼
//!                                                                    check_order()
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use nsb_graph::{GraphBuilder, SourceSet, resolve};
//!
//! # fn main() -> nsb_graph::Result<()> {
//! let sources = SourceSet::from_sources([
//!     ("src/app.js", "App = { tree: Tree.create() };"),
//!     ("src/tree.js", "Tree = { create: function () { return {}; } };"),
//! ]);
//!
//! let graph = GraphBuilder::new().build(&sources)?;
//! let order = resolve(&graph)?;
//!
//! let paths: Vec<String> = order.ids().map(|id| id.path_string()).collect();
//! assert_eq!(paths, ["src/tree.js", "src/app.js"]);
//! # Ok(())
//! # }
//! ```
//!
//! The crate performs no printing and installs no tracing subscriber; it only
//! emits `tracing` events.

// Runtime abstraction (file reads)
pub mod runtime;

// Core types and algorithms
pub mod builder;
pub mod extractor;
pub mod module;
pub mod module_id;
pub mod resolver;
pub mod source;
pub mod symbol_index;
pub mod validator;

// ModuleGraph implementation
mod memory;

pub use builder::{GraphBuilder, SymbolPolicy};
pub use extractor::{Extraction, RegexExtractor, SymbolExtractor};
pub use memory::ModuleGraph;
pub use module::{Module, ModuleBuilder};
pub use module_id::ModuleId;
pub use resolver::{ResolvedOrder, resolve};
pub use source::{SourceFile, SourceSet};
pub use symbol_index::{Owner, SymbolIndex, resolve_symbols_to_ids};
pub use validator::{check_order, validate};

// Re-export runtime types
pub use runtime::{Runtime, RuntimeError, RuntimeResult};
pub use runtime::native::NativeRuntime;

#[cfg(any(test, feature = "test-utils"))]
pub use runtime::test_utils::TestRuntime;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils {
    pub use super::runtime::test_utils::*;
}

use std::path::PathBuf;

/// Error types for graph construction and resolution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A discovered file could not be read.
    #[error("Failed to read '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: RuntimeError,
    },

    /// A resolution pass made no progress.
    #[error(
        "Cyclic dependency detected: {} ({} module(s) left unresolved)",
        format_path(.cycle),
        .remaining.len()
    )]
    CyclicDependency {
        /// Every module still pending when resolution stalled, sorted.
        remaining: Vec<ModuleId>,
        /// One concrete cycle among `remaining`, first module repeated at the end.
        cycle: Vec<ModuleId>,
    },

    /// A checked order places a module before one of its dependencies.
    #[error(
        "Load order invariant violated: '{module}' is placed before its dependency '{dependency}'"
    )]
    OrderInvariantViolation {
        module: ModuleId,
        dependency: ModuleId,
    },

    /// Two or more modules claim the same owning symbol (strict policy only).
    #[error("Symbol '{symbol}' is owned by more than one module: {}", format_list(.owners))]
    AmbiguousSymbol {
        symbol: String,
        owners: Vec<ModuleId>,
    },
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

fn format_path(ids: &[ModuleId]) -> String {
    ids.iter()
        .map(|id| id.path_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn format_list(ids: &[ModuleId]) -> String {
    ids.iter()
        .map(|id| id.path_string())
        .collect::<Vec<_>>()
        .join(", ")
}
