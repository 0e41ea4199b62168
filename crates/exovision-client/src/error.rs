use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend returned {status}: {message}")]
    Backend { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;
