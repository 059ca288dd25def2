//! Output writers: CSV, XLSX and JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use extrator_core::models::config::OutputConfig;
use extrator_core::{COLUMNS, ResultTable};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Output file format, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma-separated values (UTF-8)
    Csv,
    /// Excel workbook
    Xlsx,
    /// JSON array of records
    Json,
}

impl OutputFormat {
    /// `.xlsx`/`.xls` select a workbook, `.json` JSON, anything else CSV.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "xlsx" | "xls" => Self::Xlsx,
            "json" => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// Write the table to `path` in the format its extension selects.
pub fn write_table(table: &ResultTable, path: &Path, config: &OutputConfig) -> anyhow::Result<()> {
    match OutputFormat::from_path(path) {
        OutputFormat::Csv => write_csv(table, path, config.csv_bom),
        OutputFormat::Xlsx => write_xlsx(table, path, &config.sheet_name),
        OutputFormat::Json => write_json(table, path),
    }
}

fn write_csv(table: &ResultTable, path: &Path, bom: bool) -> anyhow::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    if bom {
        file.write_all(UTF8_BOM)?;
    }

    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(file);

    // Header row is written explicitly so an empty table still has columns
    wtr.write_record(COLUMNS)?;
    for row in table {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

fn write_xlsx(table: &ResultTable, path: &Path, sheet_name: &str) -> anyhow::Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header)?;
    }

    for (idx, record) in table.iter().enumerate() {
        let row = idx as u32 + 1;
        for (col, cell) in record.cells().iter().enumerate() {
            if let Some(value) = cell {
                worksheet.write_string(row, col as u16, *value)?;
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn write_json(table: &ResultTable, path: &Path) -> anyhow::Result<()> {
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, table.rows())?;
    Ok(())
}
