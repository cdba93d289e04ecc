//! SDK Error Types

use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, LbryError>;

/// SDK Error
#[derive(Debug, Error)]
pub enum LbryError {
    /// The daemon answered with an `error` object.
    #[error("RPC error ({code}): {message}")]
    Rpc { code: i32, message: String },

    /// Rejected locally, before anything was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP status {status} without an RPC error body")]
    HttpStatus { status: u16 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl LbryError {
    /// Remote error code, if this is an RPC error
    pub fn rpc_code(&self) -> Option<i32> {
        match self {
            LbryError::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// True if the request never left the client
    pub fn is_local(&self) -> bool {
        matches!(self, LbryError::Validation(_) | LbryError::InvalidUrl(_))
    }
}

impl From<reqwest::Error> for LbryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            LbryError::InvalidUrl(e.to_string())
        } else {
            LbryError::Transport(e.to_string())
        }
    }
}
