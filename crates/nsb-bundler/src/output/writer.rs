//! Atomic file writing for bundle output.
//!
//! The bundle is written to a temporary file next to the target and renamed
//! into place, so readers see either the previous file or the complete new
//! one. Parent directories are created as needed.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use tracing::{debug, warn};

use crate::{Error, Result};

/// Write `content` to `path`.
///
/// Returns the normalized absolute path that was written.
///
/// # Errors
///
/// - [`Error::InvalidOutputPath`] when `path` is empty, contains a null byte
///   or names an existing directory
/// - [`Error::OutputExists`] when the file exists and `overwrite` is `false`
/// - [`Error::WriteFailure`] for any I/O failure
///
/// # Examples
///
/// ```no_run
/// use nsb_bundler::output::writer::write_bundle_to;
/// use std::path::Path;
///
/// # fn example() -> nsb_bundler::Result<()> {
/// write_bundle_to("A = {};", Path::new("dist/bundle.js"), false)?;
/// # Ok(())
/// # }
/// ```
pub fn write_bundle_to(content: &str, path: &Path, overwrite: bool) -> Result<PathBuf> {
    let target = validate_output_path(path)?;

    if target.exists() && !overwrite {
        return Err(Error::OutputExists(format!(
            "File already exists: '{}'. Use overwrite=true to replace.",
            target.display()
        )));
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Error::WriteFailure(format!(
                "Failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp = temp_path_for(&target);
    fs::write(&temp, content).map_err(|e| {
        cleanup_temp_file(&temp);
        Error::WriteFailure(format!(
            "Failed to write temporary file '{}': {}",
            temp.display(),
            e
        ))
    })?;

    fs::rename(&temp, &target).map_err(|e| {
        cleanup_temp_file(&temp);
        Error::WriteFailure(format!(
            "Failed to rename '{}' to '{}': {}",
            temp.display(),
            target.display(),
            e
        ))
    })?;

    debug!(path = %target.display(), bytes = content.len(), "bundle written");
    Ok(target)
}

/// Normalize `path` to an absolute, cleaned file path.
fn validate_output_path(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidOutputPath("output path is empty".to_string()));
    }
    if path.to_string_lossy().contains('\0') {
        return Err(Error::InvalidOutputPath(
            "Filename contains null byte".to_string(),
        ));
    }

    let cleaned = path.clean();
    let absolute = if cleaned.is_absolute() {
        cleaned
    } else {
        std::env::current_dir()
            .map_err(|e| {
                Error::InvalidOutputPath(format!("Failed to get current directory: {}", e))
            })?
            .join(&cleaned)
            .clean()
    };

    if absolute.is_dir() {
        return Err(Error::InvalidOutputPath(format!(
            "'{}' is a directory",
            absolute.display()
        )));
    }
    if absolute.file_name().is_none() {
        return Err(Error::InvalidOutputPath(format!(
            "'{}' does not name a file",
            path.display()
        )));
    }

    Ok(absolute)
}

/// `dist/bundle.js` → `dist/.bundle.js.tmp`
fn temp_path_for(target: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    if let Some(file_name) = target.file_name() {
        name.push(file_name);
    }
    name.push(".tmp");
    target.with_file_name(name)
}

/// Best-effort removal; we are already on an error path.
fn cleanup_temp_file(temp: &Path) {
    if temp.exists() {
        if let Err(e) = fs::remove_file(temp) {
            warn!(
                path = %temp.display(),
                error = %e,
                "failed to clean up temporary file"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        assert_eq!(
            temp_path_for(Path::new("/tmp/out/bundle.js")),
            Path::new("/tmp/out/.bundle.js.tmp")
        );
    }

    #[test]
    fn test_validate_output_path_normalizes() {
        let result = validate_output_path(Path::new("/tmp/out/./nested/../bundle.js")).unwrap();
        assert_eq!(result, Path::new("/tmp/out/bundle.js"));
    }

    #[test]
    fn test_validate_output_path_null_byte() {
        assert!(matches!(
            validate_output_path(Path::new("bundle\0.js")),
            Err(Error::InvalidOutputPath(_))
        ));
    }

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_output_path_root() {
        assert!(validate_output_path(Path::new("/")).is_err());
    }
}
