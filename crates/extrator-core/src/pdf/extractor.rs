//! PDF text extraction using lopdf, with pdf-extract as a fallback decoder.

use std::panic;
use std::path::Path;

use lopdf::Document;
use tracing::{debug, trace};

use super::TextSource;
use crate::error::{PdfError, Result};
use crate::models::config::PdfConfig;

/// Text source for searchable PDFs. Scanned pages yield no text (no OCR).
pub struct PdfTextSource {
    config: PdfConfig,
}

/// A parsed document plus the bytes it was parsed from (decrypted if needed).
struct LoadedPdf {
    document: Document,
    raw_data: Vec<u8>,
}

impl PdfTextSource {
    /// Create a text source with default settings.
    pub fn new() -> Self {
        Self::with_config(PdfConfig::default())
    }

    /// Create a text source from PDF settings.
    pub fn with_config(config: PdfConfig) -> Self {
        Self { config }
    }

    /// Extract the text of a PDF held in memory.
    pub fn extract_text_from_mem(&self, data: &[u8]) -> Result<String> {
        let loaded = self.load(data)?;

        let pages = page_texts(&loaded.document);
        let text = pages.join(&self.config.page_separator);

        if text.trim().is_empty() && self.config.fallback_extractor && !pages.is_empty() {
            debug!("No text from {} page(s), trying fallback decoder", pages.len());
            if let Some(fallback) = fallback_text(&loaded.raw_data) {
                return Ok(fallback);
            }
        }

        Ok(text)
    }

    fn load(&self, data: &[u8]) -> Result<LoadedPdf> {
        let mut document =
            Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        let raw_data = if document.is_encrypted() {
            if document.decrypt("").is_err() {
                return Err(PdfError::Encrypted.into());
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            document
                .save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        debug!("Loaded PDF with {} pages", document.get_pages().len());
        Ok(LoadedPdf { document, raw_data })
    }
}

impl Default for PdfTextSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSource for PdfTextSource {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let data = std::fs::read(path)?;
        self.extract_text_from_mem(&data)
    }
}

/// Text of every page in page order; undecodable pages become empty strings.
fn page_texts(document: &Document) -> Vec<String> {
    document
        .get_pages()
        .keys()
        .map(|&page| match document.extract_text(&[page]) {
            Ok(text) => text.trim_end_matches(['\r', '\n']).to_string(),
            Err(e) => {
                trace!("No text on page {}: {}", page, e);
                String::new()
            }
        })
        .collect()
}

/// Whole-document decode with pdf-extract, which panics on some malformed input.
fn fallback_text(data: &[u8]) -> Option<String> {
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(data)) {
        Ok(Ok(text)) if !text.trim().is_empty() => Some(text),
        Ok(Ok(_)) => None,
        Ok(Err(e)) => {
            debug!("Fallback decoder failed: {}", e);
            None
        }
        Err(_) => {
            debug!("Fallback decoder panicked");
            None
        }
    }
}
