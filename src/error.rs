use thiserror::Error;

pub type Result<T> = std::result::Result<T, HttpUtilsError>;

#[derive(Error, Debug)]
pub enum HttpUtilsError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Unexpected status code {status} from {url}")]
    StatusError { status: u16, url: String },

    #[error("Failed to read response body: {0}")]
    ReadError(#[source] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[source] serde_json::Error),

    #[error("Deserialization error: {0}")]
    DeserializationError(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl HttpUtilsError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        HttpUtilsError::ConfigError(msg.into())
    }

    pub fn status_error(status: u16, url: impl Into<String>) -> Self {
        HttpUtilsError::StatusError {
            status,
            url: url.into(),
        }
    }
}
