//! Rule-based parser running every field extractor over a document's text.

use tracing::{debug, trace};

use crate::models::config::ExtractionConfig;

use super::Result;
use super::rules::{
    FieldExtractor, LabelExtractor, LastDateExtractor, ProcessNumberExtractor,
    RegistrationExtractor, parse_date,
};

/// Fields extracted from a single document. Missing fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFields {
    pub claimant: Option<String>,
    pub registration_number: Option<String>,
    pub process_number: Option<String>,
    pub filing_date: Option<String>,
}

/// Trait for turning document text into fields.
pub trait FieldParser {
    /// Parse fields from text. Deterministic for identical input.
    fn parse(&self, text: &str) -> ParsedFields;
}

/// Parser built from the four rule-based extractors.
pub struct RuleBasedParser {
    claimant: LabelExtractor,
    registration: RegistrationExtractor,
    process: ProcessNumberExtractor,
    dates: LastDateExtractor,
    normalize_dates: bool,
}

impl RuleBasedParser {
    /// Create a parser with default settings.
    pub fn new() -> Result<Self> {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            claimant: LabelExtractor::new(&config.claimant_label)?
                .with_window(config.label_window),
            registration: RegistrationExtractor::new(),
            process: ProcessNumberExtractor::new(),
            dates: LastDateExtractor::new(),
            normalize_dates: config.normalize_dates,
        })
    }

    /// Set filing date normalization to `YYYY-MM-DD`.
    pub fn with_normalized_dates(mut self, normalize: bool) -> Self {
        self.normalize_dates = normalize;
        self
    }

    fn filing_date(&self, text: &str) -> Option<String> {
        let last = self.dates.extract(text)?;
        trace!("Last date {:?} at {:?}", last.value, last.position);

        if !self.normalize_dates {
            return Some(last.value);
        }

        match parse_date(&last.value) {
            Some(date) => Some(date.format("%Y-%m-%d").to_string()),
            None => {
                debug!("Keeping unparseable date {:?} verbatim", last.value);
                Some(last.value)
            }
        }
    }
}

impl FieldParser for RuleBasedParser {
    fn parse(&self, text: &str) -> ParsedFields {
        if tracing::enabled!(tracing::Level::DEBUG) {
            let occurrences = self.claimant.extract_all(text).len();
            if occurrences > 1 {
                debug!(
                    "Label {:?} appears {} times, using the first",
                    self.claimant.label(),
                    occurrences
                );
            }
        }

        let fields = ParsedFields {
            claimant: self.claimant.extract(text).map(|m| m.value),
            registration_number: self.registration.extract(text).map(|m| m.value),
            process_number: self.process.extract(text).map(|m| m.value),
            filing_date: self.filing_date(text),
        };

        debug!(
            "Parsed fields: processo={:?} data={:?} requerente={:?} matricula={:?}",
            fields.process_number, fields.filing_date, fields.claimant, fields.registration_number
        );

        fields
    }
}
