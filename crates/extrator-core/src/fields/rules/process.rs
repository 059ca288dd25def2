//! Process (case) number extraction.

use super::patterns::{PROCESS_LABELED, PROCESS_TOKEN};
use super::{ExtractionMatch, FieldExtractor};

/// Process number extractor.
///
/// Strategies, first success wins:
/// 1. "Processo" label, optionally followed by `Nº`, `N.º` or `:`, then 4 to 25
///    characters of digits and `/`, `.`, `-`.
/// 2. Any 3 to 8 digit token, optionally followed by `/` and a 2 to 4 digit
///    year. The first token with a `/` wins; otherwise the longest token,
///    earliest on ties.
pub struct ProcessNumberExtractor;

impl ProcessNumberExtractor {
    pub fn new() -> Self {
        Self
    }

    fn labeled(&self, text: &str) -> Vec<ExtractionMatch<String>> {
        PROCESS_LABELED
            .captures_iter(text)
            .filter_map(|caps| {
                let full_match = caps.get(0)?;
                Some(
                    ExtractionMatch::new(caps[1].trim().to_string(), full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }

    fn tokens(&self, text: &str) -> Vec<ExtractionMatch<String>> {
        PROCESS_TOKEN
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

impl Default for ProcessNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ProcessNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        if let Some(caps) = PROCESS_LABELED.captures(text) {
            let full_match = caps.get(0)?;
            return Some(
                ExtractionMatch::new(caps[1].trim().to_string(), full_match.as_str())
                    .with_position(full_match.start(), full_match.end()),
            );
        }

        select_token(self.tokens(text))
    }

    /// Labeled matches first, then every fallback token, each in text order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = self.labeled(text);
        results.extend(self.tokens(text));
        results
    }
}

/// Pick the first token containing `/`, else the first of the longest tokens.
fn select_token(tokens: Vec<ExtractionMatch<String>>) -> Option<ExtractionMatch<String>> {
    if let Some(idx) = tokens.iter().position(|t| t.value.contains('/')) {
        return tokens.into_iter().nth(idx);
    }

    tokens.into_iter().fold(None, |best, token| match best {
        Some(b) if b.value.chars().count() >= token.value.chars().count() => Some(b),
        _ => Some(token),
    })
}

/// Extract the process number from document text.
pub fn extract_process_number(text: &str) -> Option<String> {
    ProcessNumberExtractor::new().extract(text).map(|m| m.value)
}
