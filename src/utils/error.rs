use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("Failed to parse product catalog: {0}")]
    ParseError(#[source] serde_json::Error),

    #[error("No products found in API response.")]
    EmptyResultError,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl EtlError {
    /// Whether another fetch attempt may succeed where this one failed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            EtlError::NetworkError(_)
                | EtlError::HttpStatusError { .. }
                | EtlError::ParseError(_)
                | EtlError::EmptyResultError
        )
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
