//! Result records produced by the folder processor.

use serde::{Deserialize, Serialize};

use crate::fields::ParsedFields;

/// Output column names, in order.
pub const COLUMNS: [&str; 5] = ["processo", "data_autuacao", "requerente", "matricula", "error"];

/// One row of output, one per processed document.
///
/// Every record has the same five columns. A failed document has `error` set
/// and all data fields empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Process (case) number.
    #[serde(rename = "processo")]
    pub process_number: Option<String>,

    /// Filing date, approximated as the last date mentioned in the document.
    #[serde(rename = "data_autuacao")]
    pub filing_date: Option<String>,

    /// Claimant name.
    #[serde(rename = "requerente")]
    pub claimant: Option<String>,

    /// Registration number ("matrícula").
    #[serde(rename = "matricula")]
    pub registration_number: Option<String>,

    /// Failure description when the document could not be processed.
    pub error: Option<String>,
}

impl ExtractionResult {
    /// Build a successful record from parsed fields.
    pub fn from_fields(fields: ParsedFields) -> Self {
        Self {
            process_number: fields.process_number,
            filing_date: fields.filing_date,
            claimant: fields.claimant,
            registration_number: fields.registration_number,
            error: None,
        }
    }

    /// Build a failed record. All data fields are left unset.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Whether processing of the source document failed.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Cell values in [`COLUMNS`] order.
    pub fn cells(&self) -> [Option<&str>; 5] {
        [
            self.process_number.as_deref(),
            self.filing_date.as_deref(),
            self.claimant.as_deref(),
            self.registration_number.as_deref(),
            self.error.as_deref(),
        ]
    }
}

/// Ordered rows of a single run, one per document in file name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    rows: Vec<ExtractionResult>,
}

impl ResultTable {
    pub fn rows(&self) -> &[ExtractionResult] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExtractionResult> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows whose document failed.
    pub fn failed_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_error()).count()
    }

    /// Number of rows whose document was processed.
    pub fn successful_count(&self) -> usize {
        self.len() - self.failed_count()
    }

    pub fn into_rows(self) -> Vec<ExtractionResult> {
        self.rows
    }
}

impl FromIterator<ExtractionResult> for ResultTable {
    fn from_iter<I: IntoIterator<Item = ExtractionResult>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a ExtractionResult;
    type IntoIter = std::slice::Iter<'a, ExtractionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
