use thiserror::Error;

/// Startup and runtime failures of the server process.
///
/// Request-level failures use [`shared::error::AppError`] instead.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed file {path}: {source}")]
    Seed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
