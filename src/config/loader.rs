//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::{AppConfig, PortError};
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the listen port or socket path.
pub const PORT_VAR: &str = "PORT";

/// Environment variable naming the deployment environment.
pub const APP_ENV_VAR: &str = "APP_ENV";

/// Dotenv file read from the working directory at startup.
pub const ENV_FILE: &str = ".env";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    EnvFile(dotenvy::Error),
    Env { key: &'static str, reason: PortError },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::EnvFile(e) => write!(f, "Env file error: {}", e),
            ConfigError::Env { key, reason } => write!(f, "Invalid {}: {}", key, reason),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AppConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Export `KEY=value` pairs from a dotenv file into the process environment.
///
/// Variables that are already set keep their value. A missing file is not an
/// error and yields `Ok(false)`.
pub fn load_env_file(path: &Path) -> Result<bool, ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(ConfigError::EnvFile(e)),
    }
}

/// Build the runtime configuration: file (if any), then environment.
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    apply_overrides(&mut config, |key| env::var(key).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup(PORT_VAR) {
        config.listener.port = port
            .parse()
            .map_err(|reason| ConfigError::Env { key: PORT_VAR, reason })?;
    }

    if lookup(APP_ENV_VAR).as_deref() == Some("production") {
        config.observability.access_log = false;
    }

    Ok(())
}
