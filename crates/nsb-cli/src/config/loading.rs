use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use tracing::debug;

use crate::config::{CONFIG_FILE_NAME, ConfigOverrides, NsbConfig};
use crate::error::{ConfigError, Result};

/// Prefix of environment variables read as configuration.
pub(super) const ENV_PREFIX: &str = "NSB_";

impl NsbConfig {
    /// Load configuration from every source and validate it.
    ///
    /// Priority: CLI overrides > environment variables > config file > defaults.
    /// A relative `config_path` is resolved against `cwd`.
    pub fn load(cli: &ConfigOverrides, config_path: Option<&Path>, cwd: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = Self::config_file(config_path, cwd)? {
            debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        figment = figment
            .merge(Serialized::defaults(Self::env_overrides()?))
            .merge(Serialized::defaults(cli));

        let config: Self = figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: field_name(&e.path),
            value: e.kind.to_string(),
            hint: format!("Check {CONFIG_FILE_NAME} and NSB_* variables for field names and types"),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// The config file to read: the explicit one, which must exist, or
    /// the default one when present.
    fn config_file(config_path: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
        match config_path {
            Some(path) => {
                let path = cwd.join(path);
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path).into());
                }
                Ok(Some(path))
            }
            None => {
                let path = cwd.join(CONFIG_FILE_NAME);
                Ok(path.is_file().then_some(path))
            }
        }
    }

    /// Values from `NSB_*` environment variables.
    ///
    /// List values use figment's bracket syntax: `NSB_EXTENSIONS=[js,mjs]`.
    pub(crate) fn env_overrides() -> Result<ConfigOverrides> {
        Figment::from(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| {
                ConfigError::InvalidValue {
                    field: format!("{ENV_PREFIX}{}", field_name(&e.path).to_uppercase()),
                    value: e.kind.to_string(),
                    hint: "Lists are written as NSB_EXTENSIONS=[js,mjs]; booleans as true or false"
                        .to_string(),
                }
                .into()
            })
    }
}

fn field_name(path: &[String]) -> String {
    if path.is_empty() {
        "configuration".to_string()
    } else {
        path.join(".")
    }
}
