//! Error handling for the `nsb` binary.
//!
//! - **Top-level errors** (`CliError`) are what commands return
//! - **Domain errors** (`ConfigError`, `BuildError`) carry the detail and a hint
//! - **Bundler errors** pass through untouched where their own diagnostic
//!   (code and help) is already the best rendering
//!
//! ```rust,no_run
//! use nsb_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_config(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//!         .with_hint("Pass --config with the path to an existing file")
//! }
//! ```

pub mod miette;

use std::path::PathBuf;

use thiserror::Error;

pub use self::miette::{build_error_to_miette, cli_error_to_miette};

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Build errors with a CLI-specific rendering
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Errors from the bundling pipeline
    #[error(transparent)]
    Bundler(nsb_bundler::Error),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file doesn't exist at the given location
    #[error("Config file not found: {}\n\nHint: Create an nsb.config.json file or pass an existing file to --config", .0.display())]
    NotFound(PathBuf),

    /// Missing required configuration field
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },

    /// I/O error while reading config
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Build errors that read better with CLI wording than as raw pipeline
/// errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Source root doesn't exist
    #[error("Source root not found: {}\n\nHint: Pass the source directory as ROOT or set 'root' in nsb.config.json", .0.display())]
    RootNotFound(PathBuf),

    /// The sources reference each other in a loop
    #[error("Circular dependency detected:\n{cycle}\n\nHint: Move the shared part into a file none of them references")]
    CircularDependency {
        /// Formatted cycle path, one module per line
        cycle: String,
    },

    /// The bundle could not be written
    #[error("Failed to write bundle: {0}\n\nHint: Check permissions and free space in the output directory")]
    WriteFailed(String),

    /// Generic build error
    #[error("{0}")]
    Custom(String),
}

impl From<nsb_bundler::Error> for CliError {
    fn from(err: nsb_bundler::Error) -> Self {
        use nsb_bundler::{Error, GraphError};

        match err {
            Error::RootNotFound(path) => BuildError::RootNotFound(path).into(),
            Error::Graph(GraphError::CyclicDependency { cycle, .. }) => {
                BuildError::CircularDependency {
                    cycle: format_cycle(&cycle),
                }
                .into()
            }
            Error::WriteFailure(msg) => BuildError::WriteFailed(msg).into(),
            other => CliError::Bundler(other),
        }
    }
}

/// Render a cycle path as an indented arrow chain.
fn format_cycle(cycle: &[nsb_bundler::ModuleId]) -> String {
    cycle
        .iter()
        .enumerate()
        .map(|(idx, id)| {
            if idx == 0 {
                format!("  {id}")
            } else {
                format!("  -> {id}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
