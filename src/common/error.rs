use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {reason}")]
    Retryable { reason: String },

    #[error("failed to join arena at {server} after {attempts} attempts")]
    JoinFailed { server: String, attempts: u32 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub fn retryable(reason: impl Into<String>) -> Self {
        ClientError::Retryable {
            reason: reason.into(),
        }
    }

    /// Join failure is the only condition the agent cannot play through.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ClientError::JoinFailed { .. })
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
