use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving the application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid value for {name}: '{value}'")]
    InvalidEnv { name: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Errors raised while loading the target list for a round.
#[derive(Debug, Error)]
#[error("failed to read targets file '{path}': {source}")]
pub struct TargetsError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Errors raised by the CSV result log.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to open log file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode log record: {0}")]
    Encode(#[from] csv::Error),

    #[error("failed to write log file: {0}")]
    Io(#[from] std::io::Error),
}

/// Conditions that stop the process before the first round.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Log(#[from] LogError),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("result logger stopped unexpectedly: {0}")]
    Logger(#[from] tokio::task::JoinError),
}
