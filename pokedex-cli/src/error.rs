use thiserror::Error;

use pokedex_db::StoreError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The record store could not read or write its data
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// JSON encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Process exit status: storage failures are server-side (2), the rest are 1.
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            CliError::Store(_) => 2,
            _ => 1,
        }
    }
}
