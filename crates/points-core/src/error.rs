use thiserror::Error;

/// Errors raised while fetching raw issues from a remote tracker
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Authentication failed")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, SourceError>;
