//! Miette rendering for CLI errors.

use miette::Report;

use crate::error::{BuildError, CliError};

/// Convert a [`CliError`] into a miette report.
///
/// Pipeline errors keep their own diagnostic code and help text.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Bundler(e) => Report::new(e),
        CliError::Build(e) => build_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a [`BuildError`] into a miette report.
pub fn build_error_to_miette(err: BuildError) -> Report {
    match err {
        BuildError::CircularDependency { cycle } => miette::miette!(
            code = "CYCLIC_DEPENDENCY",
            "Circular dependency detected:\n{}\n\nHint: Move the shared part into a file none of them references",
            cycle
        ),
        BuildError::RootNotFound(path) => miette::miette!(
            code = "ROOT_NOT_FOUND",
            "Source root not found: {}\n\nHint: Pass the source directory as ROOT or set 'root' in nsb.config.json",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}
