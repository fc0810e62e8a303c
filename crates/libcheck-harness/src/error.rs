//! Harness and tooling errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported fixture function '{0}'")]
    UnknownFunction(String),
    #[error("invalid inputs for {function}: {message}")]
    InvalidInput { function: String, message: String },
    #[error("no fixture JSON files found in {}", .0.display())]
    NoFixtures(PathBuf),
}

impl HarnessError {
    pub(crate) fn invalid_input(function: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            function: function.to_string(),
            message: message.into(),
        }
    }
}
