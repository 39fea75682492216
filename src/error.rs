//! Stable error codes for the operator-facing layer.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Storage(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{0}")]
    Selection(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Selection(_) => "SELECTION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }

    /// Heading used when the error is shown to the operator as a notice.
    pub fn notice_title(&self) -> &'static str {
        match self {
            Self::Storage(_) => "Database Error",
            Self::Validation(_) => "Validation Error",
            Self::Selection(_) | Self::Config(_) | Self::Io(_) => "Error",
        }
    }

    /// The message without the variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::Storage(m)
            | Self::Validation(m)
            | Self::Selection(m)
            | Self::Config(m)
            | Self::Io(m) => m,
        }
    }

    pub fn to_serde(&self) -> AppErrorDto {
        AppErrorDto {
            code: self.code().to_string(),
            message: self.to_string(),
            details: None,
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(e: config::ConfigError) -> Self {
        AppError::Config(e.to_string())
    }
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_serde().serialize(serializer)
    }
}

#[derive(Debug, Serialize)]
pub struct AppErrorDto {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
