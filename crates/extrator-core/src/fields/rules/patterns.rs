//! Common regex patterns for case-file extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Registration number ("matrícula"): 197.942-6, 197999-9, 12/345
    pub static ref REGISTRATION_LABELED: Regex = Regex::new(
        r"(?i)Matr[ií]cula[:\s]*([\d./\-]+)"
    ).unwrap();

    pub static ref REGISTRATION_BARE: Regex = Regex::new(
        r"(?i)Matr[ií]cula\s+([\d./\-]+)"
    ).unwrap();

    // Process number: "Processo Nº 213/2016", "Processo: 2132016"
    pub static ref PROCESS_LABELED: Regex = Regex::new(
        r"(?i)Processo(?:\s*N[ºo]|\s*N\.º|:)?\s*([0-9/.\-]{4,25})"
    ).unwrap();

    // Bare numeric tokens, optionally with a year: 213, 213/2016
    pub static ref PROCESS_TOKEN: Regex = Regex::new(
        r"\b\d{3,8}(?:/\d{2,4})?\b"
    ).unwrap();

    // Portuguese long form: "08 de janeiro de 2016"
    pub static ref DATE_LONG_PT: Regex = Regex::new(
        r"(?i)\b(\d{1,2})\s+de\s+([a-zçõéêáíúâó]+)\s+de\s+(\d{4})\b"
    ).unwrap();

    // Numeric: "08/01/2016"
    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"\b(\d{2})/(\d{2})/(\d{4})\b"
    ).unwrap();
}
