//! "Label: value" lookup.

use regex::{Regex, RegexBuilder};

use super::{ExtractionMatch, FieldExtractor};
use crate::error::ExtractionError;
use crate::fields::Result;

/// Characters examined after a label when no window is configured.
pub const DEFAULT_WINDOW: usize = 300;

/// Extracts the value that follows `<label>:`.
///
/// The label is matched case-insensitively. The value is the first non-blank
/// line inside a window of characters after the colon, trimmed.
pub struct LabelExtractor {
    label: String,
    pattern: Regex,
    window: usize,
}

impl LabelExtractor {
    /// Create a label extractor with the default window.
    pub fn new(label: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(&format!("{}:", regex::escape(label)))
            .case_insensitive(true)
            .build()
            .map_err(|source| ExtractionError::InvalidLabel {
                label: label.to_string(),
                source,
            })?;

        Ok(Self {
            label: label.to_string(),
            pattern,
            window: DEFAULT_WINDOW,
        })
    }

    /// Set how many characters after the label are examined.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn value_after(&self, text: &str, offset: usize) -> Option<String> {
        let rest = &text[offset..];
        let end = rest
            .char_indices()
            .nth(self.window)
            .map_or(rest.len(), |(i, _)| i);
        let snippet = &rest[..end];

        if let Some(line) = snippet
            .split(is_line_break)
            .map(str::trim)
            .find(|line| !line.is_empty())
        {
            return Some(line.to_string());
        }

        let collapsed = snippet.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            None
        } else {
            Some(collapsed)
        }
    }
}

impl FieldExtractor for LabelExtractor {
    type Output = ExtractionMatch<String>;

    /// Only the first occurrence of the label is considered.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        let m = self.pattern.find(text)?;
        let value = self.value_after(text, m.end())?;
        Some(ExtractionMatch::new(value, m.as_str()).with_position(m.start(), m.end()))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.pattern
            .find_iter(text)
            .filter_map(|m| {
                let value = self.value_after(text, m.end())?;
                Some(ExtractionMatch::new(value, m.as_str()).with_position(m.start(), m.end()))
            })
            .collect()
    }
}

/// Return the first non-empty value following `<label>:` (case-insensitive).
pub fn find_label_value(text: &str, label: &str) -> Option<String> {
    LabelExtractor::new(label).ok()?.extract(text).map(|m| m.value)
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
