//! Case-file field extraction module.

mod parser;
pub mod rules;

pub use parser::{FieldParser, ParsedFields, RuleBasedParser};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
