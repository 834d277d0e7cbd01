//! Error types shared by the content loader and the application shell.

use thiserror::Error;

/// Errors raised while reading or validating the learning datasets.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read dataset '{dataset}': {source}")]
    Io {
        dataset: String,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset '{dataset}' is not valid JSON: {source}")]
    Json {
        dataset: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset '{dataset}' is invalid: {reason}")]
    Invalid { dataset: String, reason: String },

    #[error("{what} must contain at least one entry")]
    Empty { what: &'static str },
}

impl ContentError {
    pub(crate) fn invalid(dataset: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            dataset: dataset.to_string(),
            reason: reason.into(),
        }
    }
}

/// Top-level error for application start-up.
#[derive(Error, Debug)]
pub enum TrainerError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
