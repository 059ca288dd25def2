//! Registration number ("matrícula") extraction.

use super::patterns::{REGISTRATION_BARE, REGISTRATION_LABELED};
use super::{ExtractionMatch, FieldExtractor};

/// Registration number extractor.
///
/// Looks for the word "matrícula" followed by a run of digits and `.`, `-`,
/// `/` separators. No format validation is performed.
pub struct RegistrationExtractor;

impl RegistrationExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RegistrationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for RegistrationExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = REGISTRATION_LABELED
            .captures(text)
            .or_else(|| REGISTRATION_BARE.captures(text))?;

        let full_match = caps.get(0)?;
        Some(
            ExtractionMatch::new(caps[1].trim().to_string(), full_match.as_str())
                .with_position(full_match.start(), full_match.end()),
        )
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        REGISTRATION_LABELED
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
}

/// Extract the registration number near the "matrícula" label.
pub fn extract_registration_number(text: &str) -> Option<String> {
    RegistrationExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_with_colon() {
        let text = "Servidor: João Silva\nMatrícula: 197.942-6\nLotação: 3ª Vara";
        assert_eq!(extract_registration_number(text).as_deref(), Some("197.942-6"));
    }

    #[test]
    fn test_extract_without_colon() {
        assert_eq!(
            extract_registration_number("matricula 197999-9 ativa").as_deref(),
            Some("197999-9")
        );
    }

    #[test]
    fn test_uppercase_and_accent() {
        assert_eq!(
            extract_registration_number("MATRÍCULA:12/345").as_deref(),
            Some("12/345")
        );
    }

    #[test]
    fn test_no_value() {
        assert_eq!(extract_registration_number("Matrícula: não informada"), None);
        assert_eq!(extract_registration_number("sem identificação"), None);
    }

    #[test]
    fn test_extract_all() {
        let text = "Matrícula: 111.111-1\nMatrícula anterior\nMatrícula: 222.222-2";
        let values: Vec<String> = RegistrationExtractor::new()
            .extract_all(text)
            .into_iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(values, vec!["111.111-1", "222.222-2"]);
    }

    #[test]
    fn test_idempotent() {
        let text = "Matrícula: 197.942-6";
        assert_eq!(extract_registration_number(text), extract_registration_number(text));
    }
}
