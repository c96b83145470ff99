use std::path::Path;

use crate::config::NsbConfig;
use crate::error::{ConfigError, Result};

/// Validate one configured extension.
pub fn validate_extension(ext: &str) -> Result<()> {
    if ext.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "extensions".to_string(),
            value: "\"\"".to_string(),
            hint: "Extensions cannot be empty".to_string(),
        }
        .into());
    }

    if ext.starts_with('.') {
        return Err(ConfigError::InvalidValue {
            field: "extensions".to_string(),
            value: ext.to_string(),
            hint: format!("Write extensions without the leading dot: \"{}\"", &ext[1..]),
        }
        .into());
    }

    if let Some(c) = ext.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(ConfigError::InvalidValue {
            field: "extensions".to_string(),
            value: ext.to_string(),
            hint: format!("Invalid character '{}' in extension", c),
        }
        .into());
    }

    Ok(())
}

impl NsbConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "root".to_string(),
                hint: "Set root to the directory holding your sources, e.g. \"src\"".to_string(),
            }
            .into());
        }

        if self.extensions.is_empty() {
            return Err(ConfigError::MissingField {
                field: "extensions".to_string(),
                hint: "List at least one extension, e.g. [\"js\"]".to_string(),
            }
            .into());
        }

        for ext in &self.extensions {
            validate_extension(ext)?;
        }

        if let Some(out_file) = &self.out_file {
            if looks_like_directory(out_file) {
                return Err(ConfigError::InvalidValue {
                    field: "outFile".to_string(),
                    value: out_file.display().to_string(),
                    hint: "outFile must name a file, e.g. \"dist/bundle.js\"".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

fn looks_like_directory(path: &Path) -> bool {
    let raw = path.to_string_lossy();
    raw.is_empty() || raw.ends_with(['/', '\\']) || path.file_name().is_none()
}
