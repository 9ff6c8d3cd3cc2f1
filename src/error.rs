use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Zammad is not configured. Please set the Zammad URL and API token.")]
    NotConfigured,
    #[error("failed to call Zammad: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Zammad responded with {status}: {body}")]
    Remote {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to parse Zammad response: {0}")]
    MalformedResponse(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("version control error: {0}")]
    VersionControl(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
