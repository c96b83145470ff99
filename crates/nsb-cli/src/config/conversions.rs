use std::path::{Path, PathBuf};

use nsb_bundler::{BundleOptions, SymbolPolicy};
use serde::{Deserialize, Serialize};

use crate::cli::{BuildArgs, SourceArgs};
use crate::config::NsbConfig;

/// Values set explicitly by one configuration layer.
///
/// Unset fields are skipped when serialized, so merging an overrides layer
/// only replaces what it names. Deserialization reads the snake_case keys
/// produced by `NSB_*` environment variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoist_strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_policy: Option<SymbolPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
}

impl From<&SourceArgs> for ConfigOverrides {
    fn from(args: &SourceArgs) -> Self {
        Self {
            root: args.root.clone(),
            extensions: (!args.extensions.is_empty()).then(|| args.extensions.clone()),
            symbol_policy: args.strict_symbols.then_some(SymbolPolicy::Strict),
            ..Self::default()
        }
    }
}

impl From<&BuildArgs> for ConfigOverrides {
    fn from(args: &BuildArgs) -> Self {
        Self {
            out_file: args.out_file.clone(),
            separator: args.separator.clone(),
            hoist_strict: args.no_hoist_strict.then_some(false),
            overwrite: args.overwrite.then_some(true),
            ..Self::from(&args.source)
        }
    }
}

impl NsbConfig {
    /// Pipeline options for this configuration, with `root` resolved
    /// against `cwd`.
    pub fn to_bundle_options(&self, cwd: &Path) -> BundleOptions {
        BundleOptions::new(cwd.join(&self.root))
            .extensions(self.extensions.iter().cloned())
            .separator(self.separator.clone())
            .hoist_strict(self.hoist_strict)
            .symbol_policy(self.symbol_policy)
    }

    /// Output file resolved against `cwd`, if one is configured.
    pub fn output_path(&self, cwd: &Path) -> Option<PathBuf> {
        self.out_file.as_ref().map(|path| cwd.join(path))
    }
}
