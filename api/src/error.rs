#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not decode auth state (status {status}): {message}")]
    Decode { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;
