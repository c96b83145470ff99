use std::path::PathBuf;

use nsb_bundler::DEFAULT_EXTENSIONS;

/// Config file picked up from the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "nsb.config.json";

pub(super) fn default_root() -> PathBuf {
    PathBuf::from(".")
}

pub(super) fn default_separator() -> String {
    "\n".to_string()
}

pub(super) fn default_hoist_strict() -> bool {
    true
}

pub(super) fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}
