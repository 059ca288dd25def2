//! Folder processing: one result row per document, failures isolated per document.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern, glob_with};
use tracing::{Span, error, info, info_span, warn};

use crate::error::{ExtratorError, Result};
use crate::fields::FieldParser;
use crate::models::config::PdfConfig;
use crate::models::record::{ExtractionResult, ResultTable};
use crate::pdf::TextSource;

/// Sequentially extracts fields from every document in a folder.
pub struct FolderProcessor<S, P> {
    source: S,
    parser: P,
    config: PdfConfig,
    span: Option<Span>,
}

impl<S: TextSource, P: FieldParser> FolderProcessor<S, P> {
    /// Create a processor with default PDF discovery settings.
    pub fn new(source: S, parser: P) -> Self {
        Self {
            source,
            parser,
            config: PdfConfig::default(),
            span: None,
        }
    }

    /// Set which documents are discovered.
    pub fn with_config(mut self, config: PdfConfig) -> Self {
        self.config = config;
        self
    }

    /// Log through the given span instead of a per-folder one.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Documents in `dir` matching the configured extension, sorted by file name.
    pub fn list_documents(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(ExtratorError::InvalidInput(dir.to_path_buf()));
        }

        let pattern = format!(
            "{}/*.{}",
            Pattern::escape(&dir.to_string_lossy()),
            Pattern::escape(&self.config.extension)
        );

        let options = MatchOptions {
            case_sensitive: self.config.case_sensitive,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };

        let mut documents: Vec<PathBuf> = glob_with(&pattern, options)?
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .collect();
        documents.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        Ok(documents)
    }

    /// Process every document in `dir`.
    ///
    /// Fails only when the folder itself is unusable; a failing document
    /// becomes a row with `error` set.
    pub fn process(&self, dir: &Path) -> Result<ResultTable> {
        let span = self
            .span
            .clone()
            .unwrap_or_else(|| info_span!("folder", path = %dir.display()));
        let _guard = span.enter();

        let documents = self.list_documents(dir)?;
        info!("{} PDFs found in {}", documents.len(), dir.display());

        Ok(documents
            .iter()
            .map(|path| self.process_document(path))
            .collect())
    }

    /// Process a single document, converting any failure into an error row.
    pub fn process_document(&self, path: &Path) -> ExtractionResult {
        let name = display_name(path);
        info!("Processing: {}", name);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.source.extract_text(path).map(|text| {
                if text.trim().is_empty() {
                    warn!("{} returned no text; it may be a scan (OCR needed)", name);
                }
                self.parser.parse(&text)
            })
        }));

        match outcome {
            Ok(Ok(fields)) => ExtractionResult::from_fields(fields),
            Ok(Err(e)) => {
                error!("Error in {}: {:?}", name, e);
                ExtractionResult::failed(e.to_string())
            }
            Err(payload) => {
                let message = format!("panicked while processing: {}", panic_message(&*payload));
                error!("Error in {}: {}", name, message);
                ExtractionResult::failed(message)
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfError;
    use crate::fields::RuleBasedParser;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::fs;

    /// Text source serving canned text by file name; names without an entry fail.
    struct StubSource {
        texts: HashMap<&'static str, &'static str>,
    }

    impl TextSource for StubSource {
        fn extract_text(&self, path: &Path) -> Result<String> {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            self.texts
                .get(name)
                .map(|t| t.to_string())
                .ok_or_else(|| PdfError::Parse(format!("corrupted: {}", name)).into())
        }
    }

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), b"").unwrap();
        }
    }

    fn processor(texts: &[(&'static str, &'static str)]) -> FolderProcessor<StubSource, RuleBasedParser> {
        FolderProcessor::new(
            StubSource {
                texts: texts.iter().copied().collect(),
            },
            RuleBasedParser::new().unwrap(),
        )
    }

    #[test]
    fn test_three_valid_one_corrupted() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["a.pdf", "b.pdf", "c.pdf", "d.pdf"]);

        let processor = processor(&[
            ("a.pdf", "Processo Nº 1/2016\nRequerente: Ana\nMatrícula: 1.111-1\n01/02/2016"),
            ("b.pdf", "Processo Nº 2/2016\nRequerente: Bia\nMatrícula: 2.222-2\n02/02/2016"),
            ("d.pdf", "Processo Nº 4/2016\nRequerente: Duda\nMatrícula: 4.444-4\n04/02/2016"),
        ]);

        let table = processor.process(dir.path()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.failed_count(), 1);

        let rows = table.rows();
        for idx in [0, 1, 3] {
            assert!(!rows[idx].is_error());
            assert!(rows[idx].process_number.is_some());
            assert!(rows[idx].filing_date.is_some());
            assert!(rows[idx].claimant.is_some());
            assert!(rows[idx].registration_number.is_some());
        }

        assert_eq!(rows[2], ExtractionResult::failed("PDF error: failed to parse PDF: corrupted: c.pdf"));
        assert_eq!(rows[3].claimant.as_deref(), Some("Duda"));
    }

    /// Text source whose decoder panics on one file name.
    struct PanickingSource {
        panics_on: &'static str,
    }

    impl TextSource for PanickingSource {
        fn extract_text(&self, path: &Path) -> Result<String> {
            let name = display_name(path);
            if name == self.panics_on {
                panic!("decoder blew up on {}", name);
            }
            Ok(format!("Requerente: {}", name))
        }
    }

    #[test]
    fn test_panicking_document_becomes_error_row() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["a.pdf", "b.pdf", "c.pdf"]);

        let processor = FolderProcessor::new(
            PanickingSource { panics_on: "b.pdf" },
            RuleBasedParser::new().unwrap(),
        );

        let table = processor.process(dir.path()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.failed_count(), 1);

        let rows = table.rows();
        assert_eq!(rows[0].claimant.as_deref(), Some("a.pdf"));
        assert_eq!(rows[2].claimant.as_deref(), Some("c.pdf"));
        assert_eq!(
            rows[1],
            ExtractionResult::failed("panicked while processing: decoder blew up on b.pdf")
        );
    }

    #[test]
    fn test_rows_follow_file_name_order() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["b.pdf", "c.pdf", "a.pdf"]);

        let processor = processor(&[
            ("a.pdf", "Requerente: A"),
            ("b.pdf", "Requerente: B"),
            ("c.pdf", "Requerente: C"),
        ]);

        let claimants: Vec<Option<String>> = processor
            .process(dir.path())
            .unwrap()
            .into_rows()
            .into_iter()
            .map(|r| r.claimant)
            .collect();
        assert_eq!(
            claimants,
            vec![Some("A".to_string()), Some("B".to_string()), Some("C".to_string())]
        );
    }

    #[test]
    fn test_only_matching_files_listed() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["a.pdf", "notes.txt", "B.PDF", ".hidden.pdf"]);
        fs::create_dir(dir.path().join("sub.pdf")).unwrap();

        let processor = processor(&[]);
        let names: Vec<String> = processor
            .list_documents(dir.path())
            .unwrap()
            .iter()
            .map(|p| display_name(p))
            .collect();
        assert_eq!(names, vec![".hidden.pdf", "a.pdf"]);

        let mut config = PdfConfig::default();
        config.case_sensitive = false;
        let processor = processor.with_config(config);
        let names: Vec<String> = processor
            .list_documents(dir.path())
            .unwrap()
            .iter()
            .map(|p| display_name(p))
            .collect();
        assert_eq!(names, vec![".hidden.pdf", "B.PDF", "a.pdf"]);
    }

    #[test]
    fn test_blank_text_gives_empty_row() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["scan.pdf"]);

        let table = processor(&[("scan.pdf", "  \n ")]).process(dir.path()).unwrap();
        assert_eq!(table.rows(), &[ExtractionResult::default()]);
    }

    #[test]
    fn test_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        let table = processor(&[]).process(dir.path()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.pdf");
        fs::write(&file, b"").unwrap();

        let processor = processor(&[]);
        assert!(matches!(
            processor.process(&dir.path().join("missing")),
            Err(ExtratorError::InvalidInput(_))
        ));
        assert!(matches!(
            processor.process(&file),
            Err(ExtratorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_folder_name_with_glob_metacharacters() {
        let dir = tempfile::tempdir().unwrap();
        let odd = dir.path().join("lote [2016]");
        fs::create_dir(&odd).unwrap();
        touch(&odd, &["x.pdf"]);

        let table = processor(&[("x.pdf", "Requerente: X")]).process(&odd).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].claimant.as_deref(), Some("X"));
    }
}
