//! Last-date extraction.
//!
//! The filing date ("data de autuação") is approximated as the date-like
//! substring that appears last in the document. This is a heuristic: it
//! assumes the authoring or filing date is the final date mentioned.

use chrono::NaiveDate;

use super::patterns::{DATE_LONG_PT, DATE_NUMERIC};
use super::{ExtractionMatch, FieldExtractor};

/// Extractor for the last date-like substring in a document.
pub struct LastDateExtractor;

impl LastDateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LastDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LastDateExtractor {
    type Output = ExtractionMatch<String>;

    /// The candidate with the greatest start offset.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text)
            .into_iter()
            .max_by_key(ExtractionMatch::start)
    }

    /// All candidates from both formats, ordered by start offset.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = DATE_LONG_PT
            .find_iter(text)
            .chain(DATE_NUMERIC.find_iter(text))
            .map(|m| {
                ExtractionMatch::new(m.as_str().trim().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect();

        results.sort_by_key(ExtractionMatch::start);
        results
    }
}

/// Return the date-like substring that appears last in the text.
pub fn extract_last_date(text: &str) -> Option<String> {
    LastDateExtractor::new().extract(text).map(|m| m.value)
}

/// Parse a matched date (`08 de janeiro de 2016` or `08/01/2016`).
///
/// Returns `None` for unknown month names or impossible calendar dates.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Some(caps) = DATE_NUMERIC.captures(text) {
        if caps.get(0)?.as_str() == text {
            let day: u32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            let year: i32 = caps[3].parse().ok()?;
            return NaiveDate::from_ymd_opt(year, month, day);
        }
    }

    let caps = DATE_LONG_PT.captures(text)?;
    if caps.get(0)?.as_str() != text {
        return None;
    }
    let day: u32 = caps[1].parse().ok()?;
    let month = portuguese_month_to_number(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn portuguese_month_to_number(month: &str) -> Option<u32> {
    let month = match month.to_lowercase().as_str() {
        "janeiro" => 1,
        "fevereiro" => 2,
        "março" | "marco" => 3,
        "abril" => 4,
        "maio" => 5,
        "junho" => 6,
        "julho" => 7,
        "agosto" => 8,
        "setembro" => 9,
        "outubro" => 10,
        "novembro" => 11,
        "dezembro" => 12,
        _ => return None,
    };
    Some(month)
}
