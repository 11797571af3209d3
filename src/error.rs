//! Error types for the node administration shell.

use thiserror::Error;

/// Rendering errors raised while formatting presenters.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Render I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to render table of type {0}")]
    UnsupportedType(&'static str),

    #[error("Unable to format field: {0}")]
    Field(String),

    #[error("Row has {actual} fields but table declares {expected} headers")]
    RowWidth { expected: usize, actual: usize },
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Field(err.to_string())
    }
}

/// Errors surfaced by commands talking to the node API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Request failed with status {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Http(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            ApiError::Http(format!("Connection error: {}", err))
        } else {
            ApiError::Http(err.to_string())
        }
    }
}

impl From<dialoguer::Error> for ApiError {
    fn from(err: dialoguer::Error) -> Self {
        ApiError::Prompt(err.to_string())
    }
}
