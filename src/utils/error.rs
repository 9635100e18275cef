use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BokslZipError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("An archive operation is already in progress")]
    Busy,

    #[error("Failed to scan '{path}': {source}")]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create archive '{path}': {reason}")]
    ArchiveCreateFailed { path: PathBuf, reason: String },

    #[error("Failed to save archive '{path}': {source}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 작업 시작 전에 걸러지는 사용자 입력 오류
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No files selected for archive.")]
    EmptySelection,

    #[error("Archive name cannot be empty.")]
    EmptyArchiveName,

    #[error("Invalid archive name: {0}")]
    InvalidArchiveName(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, BokslZipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_user_facing() {
        let err: BokslZipError = ValidationError::EmptySelection.into();
        assert_eq!(err.to_string(), "No files selected for archive.");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: BokslZipError = ConfigError::Invalid("level".into()).into();
        assert!(matches!(err, BokslZipError::Config(_)));
        assert!(err.to_string().contains("level"));
    }
}
