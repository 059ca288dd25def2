//! Core library for case-file field extraction.
//!
//! This crate provides:
//! - PDF text extraction (pages concatenated in order)
//! - Heuristic field extraction: claimant, registration number ("matrícula"),
//!   process number and the last date mentioned in a document
//! - A folder processor producing one fixed-shape result row per document

pub mod error;
pub mod fields;
pub mod folder;
pub mod models;
pub mod pdf;

pub use error::{ExtractionError, ExtratorError, PdfError, Result};
pub use fields::{FieldParser, ParsedFields, RuleBasedParser};
pub use folder::FolderProcessor;
pub use models::config::ExtratorConfig;
pub use models::record::{COLUMNS, ExtractionResult, ResultTable};
pub use pdf::{PdfTextSource, TextSource};
