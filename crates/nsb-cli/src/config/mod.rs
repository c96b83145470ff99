//! Configuration for the `nsb` binary.
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. `nsb.config.json` in the working directory, or the file given to `--config`
//! 3. `NSB_*` environment variables (`NSB_ROOT`, `NSB_OUT_FILE`, `NSB_SEPARATOR`,
//!    `NSB_HOIST_STRICT`, `NSB_EXTENSIONS`, `NSB_SYMBOL_POLICY`, `NSB_OVERWRITE`)
//! 4. Command-line flags
//!
//! ```json
//! {
//!   "root": "src",
//!   "outFile": "dist/app.js",
//!   "separator": "\n;\n",
//!   "extensions": ["js", "mjs"],
//!   "symbolPolicy": "strict"
//! }
//! ```

mod conversions;
mod defaults;
mod loading;
mod validation;

use std::path::PathBuf;

use nsb_bundler::SymbolPolicy;
use serde::{Deserialize, Serialize};

pub use conversions::ConfigOverrides;
pub use defaults::CONFIG_FILE_NAME;

/// Resolved configuration for one command run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NsbConfig {
    /// Source directory, relative to the working directory.
    #[serde(default = "defaults::default_root")]
    pub root: PathBuf,

    /// Bundle destination. `None` prints the bundle to stdout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_file: Option<PathBuf>,

    /// Text inserted between files.
    #[serde(default = "defaults::default_separator")]
    pub separator: String,

    /// Hoist one `'use strict';` to the top of the bundle.
    #[serde(default = "defaults::default_hoist_strict")]
    pub hoist_strict: bool,

    /// Extensions to collect, without the leading dot.
    #[serde(default = "defaults::default_extensions")]
    pub extensions: Vec<String>,

    /// Handling of owning symbols claimed by several files.
    #[serde(default)]
    pub symbol_policy: SymbolPolicy,

    /// Replace an existing output file.
    #[serde(default)]
    pub overwrite: bool,
}

impl Default for NsbConfig {
    fn default() -> Self {
        Self {
            root: defaults::default_root(),
            out_file: None,
            separator: defaults::default_separator(),
            hoist_strict: defaults::default_hoist_strict(),
            extensions: defaults::default_extensions(),
            symbol_policy: SymbolPolicy::default(),
            overwrite: false,
        }
    }
}
