use std::path::{Path, PathBuf};
use std::sync::Arc;

use nsb_graph::{Runtime, SymbolPolicy};

use crate::discovery::DEFAULT_EXTENSIONS;
use crate::{Error, Result};

/// Configuration for one bundle operation.
///
/// Use the builder methods for ergonomic configuration, or construct
/// directly for full control.
#[derive(Debug, Clone)]
pub struct BundleOptions {
    /// Directory to discover sources under.
    pub root: PathBuf,

    /// File extensions to collect, without the leading dot (default: `["js"]`).
    pub extensions: Vec<String>,

    /// Text placed between consecutive files (default: `"\n"`).
    pub separator: String,

    /// Move strict-mode directives to a single one at the top (default: true).
    pub hoist_strict: bool,

    /// Handling of owning symbols claimed by several files (default: lenient).
    pub symbol_policy: SymbolPolicy,

    /// Runtime for reading sources (default: `NativeRuntime`).
    pub runtime: Option<Arc<dyn Runtime>>,
}

impl BundleOptions {
    /// Create options for the tree under `root`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use nsb_bundler::BundleOptions;
    ///
    /// let options = BundleOptions::new("./src");
    /// ```
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            separator: "\n".to_string(),
            hoist_strict: true,
            symbol_policy: SymbolPolicy::default(),
            runtime: None,
        }
    }

    /// Replace the extension list. A leading dot is accepted and dropped.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_string())
            .collect();
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn hoist_strict(mut self, enabled: bool) -> Self {
        self.hoist_strict = enabled;
        self
    }

    pub fn symbol_policy(mut self, policy: SymbolPolicy) -> Self {
        self.symbol_policy = policy;
        self
    }

    /// Read sources through `runtime` instead of the filesystem.
    ///
    /// Discovery still walks the real directory tree.
    pub fn runtime(mut self, runtime: Arc<dyn Runtime>) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Validate the options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if:
    /// - the root path is empty
    /// - no extension is configured
    /// - an extension is empty or contains anything but ASCII alphanumerics
    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("root path is empty".into()));
        }

        if self.extensions.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one file extension is required".into(),
            ));
        }

        for ext in &self.extensions {
            if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(Error::InvalidConfig(format!(
                    "invalid file extension '{}': use letters and digits only, e.g. \"js\"",
                    ext
                )));
            }
        }

        Ok(())
    }

    /// Execute the bundle with these options.
    ///
    /// This is a convenience method that calls `build(self)`.
    pub fn build(self) -> Result<super::output::BundleResult> {
        super::build(self)
    }
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self::new(".")
    }
}
