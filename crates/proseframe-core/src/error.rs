//! Error types for payload handling
//!
//! The pipeline stages themselves are total; only decoding a backend
//! response can fail.

use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while turning a backend response into a document
#[derive(Error, Debug)]
pub enum CoreError {
    /// The payload is not valid JSON or lacks required fields
    #[error("Invalid response payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The backend reported a failure instead of content
    #[error("Generation backend error: {0}")]
    Upstream(String),
}
