use std::result::Result as StdResult;

use finbti_config::ConfigError;
use finbti_core::CoreError;
use thiserror::Error;

/// Unified error type for the core, configuration and input layers.
#[derive(Error, Debug)]
pub enum FinbtiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Read error: {0}")]
    StorageError(String),
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type Result<T> = StdResult<T, FinbtiError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] FinbtiError),
    #[error("Usage: {0}")]
    Usage(String),
    #[error("Unknown command `{0}`. Run `help` for the list of commands.")]
    UnknownCommand(String),
}

impl From<std::io::Error> for FinbtiError {
    fn from(err: std::io::Error) -> Self {
        FinbtiError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for FinbtiError {
    fn from(err: serde_json::Error) -> Self {
        FinbtiError::InvalidInput(err.to_string())
    }
}

impl From<ConfigError> for FinbtiError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => FinbtiError::StorageError(io.to_string()),
            ConfigError::Serde(message) => FinbtiError::ConfigError(message),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(FinbtiError::from(err))
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::from(FinbtiError::from(err))
    }
}
