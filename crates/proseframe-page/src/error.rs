//! Error types for page layout and PDF output

use thiserror::Error;

/// Result type for page operations
pub type Result<T> = std::result::Result<T, PageError>;

/// Errors that can occur while laying out or writing pages
#[derive(Error, Debug)]
pub enum PageError {
    /// Page geometry cannot hold a single line of text
    #[error("Invalid page geometry: {0}")]
    Geometry(String),

    /// PDF serialisation error
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
