//! Bundle APIs: a single entry point through [`BundleOptions`] and [`build`].
//!
//! # Examples
//!
//! ```no_run
//! use nsb_bundler::{BundleOptions, SymbolPolicy};
//!
//! # fn example() -> nsb_bundler::Result<()> {
//! // Defaults: *.js, newline separator, strict directive hoisted
//! let result = BundleOptions::new("./src").build()?;
//!
//! // Stricter build over several extensions
//! let result = BundleOptions::new("./lib")
//!     .extensions(["js", "jsx"])
//!     .symbol_policy(SymbolPolicy::Strict)
//!     .hoist_strict(false)
//!     .build()?;
//! # Ok(())
//! # }
//! ```

mod build_executor;
mod options;
mod output;

pub use build_executor::build;
pub use options::BundleOptions;
pub use output::BundleResult;
