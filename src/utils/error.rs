use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl FetchError {
    /// Transport, URL and body-parse failures all render the same way on the page.
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            FetchError::Request(_) | FetchError::Decode(_) | FetchError::InvalidUrl(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
