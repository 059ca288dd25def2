//! Rule-based field extractors for Brazilian case files.

pub mod dates;
pub mod label;
pub mod patterns;
pub mod process;
pub mod registration;

pub use dates::{LastDateExtractor, extract_last_date, parse_date};
pub use label::{DEFAULT_WINDOW, LabelExtractor, find_label_value};
pub use patterns::*;
pub use process::{ProcessNumberExtractor, extract_process_number};
pub use registration::{RegistrationExtractor, extract_registration_number};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A matched value together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte span in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }

    /// Start offset, or 0 when the match carries no position.
    pub fn start(&self) -> usize {
        self.position.map_or(0, |(start, _)| start)
    }
}
