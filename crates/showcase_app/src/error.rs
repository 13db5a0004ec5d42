//! Error types for showcase_app

use thiserror::Error;

/// Errors surfaced by the application shell
#[derive(Error, Debug)]
pub enum AppError {
    /// A session command could not be parsed
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    /// A command was recognized but its arguments were not
    #[error("invalid arguments for `{command}`: {message}")]
    InvalidArgument {
        command: &'static str,
        message: String,
    },

    /// An event targeted a widget that is not on the current page
    #[error("`{event}` is not available on {route}")]
    NotOnPage { event: &'static str, route: String },

    /// A session script line failed
    #[error("line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: Box<AppError>,
    },

    /// Application config could not be parsed
    #[error("config parse failed: {0}")]
    Config(#[from] toml::de::Error),

    /// Serialization failed
    #[error("serialization failed: {0}")]
    Serialize(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Other(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialize(err.to_string())
    }
}

/// Result type for showcase_app operations
pub type Result<T> = std::result::Result<T, AppError>;
