use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::model::MonitorConfig;
use crate::error::ConfigError;
use crate::probe::ProbeSettings;

pub const CONFIG_FILE_ENV: &str = "CONFIG_FILE";
pub const TARGETS_FILE_ENV: &str = "TARGETS_FILE";
pub const LOG_FILE_ENV: &str = "LOG_FILE";
pub const POLLING_INTERVAL_ENV: &str = "POLLING_INTERVAL_SECONDS";

const DEFAULT_CONFIG_FILE: &str = "config.yml";
const DEFAULT_USER_AGENT: &str = concat!("netwatch/", env!("CARGO_PKG_VERSION"));

pub struct AppConfig {
    pub targets_file: PathBuf,
    pub log_file: PathBuf,
    pub polling_interval: Duration,
    pub probe: ProbeSettings,
}

/// Load the application configuration from `.env`, an optional YAML file and environment variables.
/// The YAML file is taken from `CONFIG_FILE`; when that is unset, `config.yml` is read
/// only if it exists.
/// `TARGETS_FILE`, `LOG_FILE` and `POLLING_INTERVAL_SECONDS` override the values from the file.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    if let Ok(path) = dotenvy::dotenv() {
        log::debug!("Loaded environment from {}", path.display());
    }

    load_config_with(|name| env::var(name).ok(), Path::new(DEFAULT_CONFIG_FILE))
}

/// Resolve the configuration using `lookup` for environment variables.
pub fn load_config_with<F>(lookup: F, default_config_file: &Path) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup(CONFIG_FILE_ENV) {
        Some(path) => read_config_file(Path::new(&path))?,
        None if default_config_file.exists() => read_config_file(default_config_file)?,
        None => MonitorConfig::default(),
    };

    if let Some(path) = lookup(TARGETS_FILE_ENV) {
        config.targets_file = PathBuf::from(path);
    }
    if let Some(path) = lookup(LOG_FILE_ENV) {
        config.log_file = PathBuf::from(path);
    }
    if let Some(value) = lookup(POLLING_INTERVAL_ENV) {
        config.polling_interval_seconds =
            value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: POLLING_INTERVAL_ENV,
                value,
            })?;
    }

    AppConfig::try_from(config)
}

fn read_config_file(path: &Path) -> Result<MonitorConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Using config file: {}", path.display());

    if contents.trim().is_empty() {
        return Ok(MonitorConfig::default());
    }

    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl TryFrom<MonitorConfig> for AppConfig {
    type Error = ConfigError;

    fn try_from(config: MonitorConfig) -> Result<Self, Self::Error> {
        if config.polling_interval_seconds == 0 {
            return Err(ConfigError::Zero("polling_interval_seconds"));
        }
        if config.connect_timeout_seconds == 0 {
            return Err(ConfigError::Zero("connect_timeout_seconds"));
        }

        Ok(AppConfig {
            targets_file: config.targets_file,
            log_file: config.log_file,
            polling_interval: Duration::from_secs(config.polling_interval_seconds),
            probe: ProbeSettings {
                connect_timeout: Duration::from_secs(config.connect_timeout_seconds),
                default_port: config.default_port,
                user_agent: config
                    .user_agent
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            },
        })
    }
}
