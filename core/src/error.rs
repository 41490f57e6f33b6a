use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything that can go wrong between submission and a stored result.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Trimmed input was empty. Checked before the engine is ever invoked.
    #[error("input is empty")]
    EmptyInput,

    /// A mode id outside the fixed catalog. Unreachable through the wire
    /// layer (serde rejects unknown ids first); fatal to the call if it
    /// happens programmatically.
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    /// The external explanation service failed. Recoverable by resubmitting.
    #[error("upstream explanation service failed: {0}")]
    Upstream(String),

    /// The external explanation service did not answer in time.
    #[error("explanation timed out")]
    Timeout,
}

/// Serializable projection of `EngineError` stored on a failed request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyInput,
    UnknownMode,
    Upstream,
    Timeout,
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::EmptyInput => ErrorKind::EmptyInput,
            EngineError::UnknownMode(_) => ErrorKind::UnknownMode,
            EngineError::Upstream(_) => ErrorKind::Upstream,
            EngineError::Timeout => ErrorKind::Timeout,
        }
    }
}
