//! Error types for the extrator-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the extrator library.
#[derive(Error, Debug)]
pub enum ExtratorError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The input path is missing or is not a directory.
    #[error("invalid input folder: {}", .0.display())]
    InvalidInput(PathBuf),

    /// The document listing pattern could not be built.
    #[error("invalid document pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be opened with an empty password.
    #[error("PDF is encrypted")]
    Encrypted,
}

/// Errors related to field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A label could not be turned into a search pattern.
    #[error("invalid label {label:?}: {source}")]
    InvalidLabel {
        label: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for the extrator library.
pub type Result<T> = std::result::Result<T, ExtratorError>;
