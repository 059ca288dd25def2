//! PDF text extraction module.

mod extractor;

pub use extractor::PdfTextSource;

use std::path::Path;

use crate::error::Result;

/// Source of a document's full text.
pub trait TextSource {
    /// Return the text of every page, in order, joined by newlines.
    ///
    /// Pages without extractable text contribute an empty string. Failing to
    /// open or decode the document is an error.
    fn extract_text(&self, path: &Path) -> Result<String>;
}
