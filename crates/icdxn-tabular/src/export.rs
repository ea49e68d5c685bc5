//! Association snapshot writers.
//!
//! Both formats carry the same five columns in the same order, with a header
//! row even when there are no associations.

use std::io::Write;
use std::path::{Path, PathBuf};

use icdxn_core::entities::ExportRow;
use icdxn_core::enums::ExportFormat;
use rust_xlsxwriter::{Format, Workbook};
use tempfile::NamedTempFile;

use crate::error::TabularError;

const SHEET_NAME: &str = "Associations";

/// Write `rows` as CSV to any writer.
///
/// # Errors
///
/// Returns `TabularError` if serialization or the underlying write fails.
pub fn write_csv<W: Write>(writer: W, rows: &[ExportRow]) -> Result<(), TabularError> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(ExportRow::HEADERS)?;
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Build a single-sheet workbook holding `rows` and return its bytes.
///
/// # Errors
///
/// Returns `TabularError` if the workbook cannot be built.
pub fn xlsx_bytes(rows: &[ExportRow]) -> Result<Vec<u8>, TabularError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    for (col, header) in (0u16..).zip(ExportRow::HEADERS) {
        sheet.write_string_with_format(0, col, header, &bold)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = u32::try_from(i + 1).map_err(|_| TabularError::TooManyRows { rows: rows.len() })?;
        #[allow(clippy::cast_precision_loss)]
        sheet.write_number(r, 0, row.id as f64)?;
        sheet.write_string(r, 1, &row.disease_name)?;
        sheet.write_string(r, 2, &row.test_name)?;
        sheet.write_string(r, 3, &row.status)?;
        sheet.write_string(r, 4, &row.finalized)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Encode `rows` in `format`.
///
/// # Errors
///
/// Returns `TabularError` if encoding fails.
pub fn render(rows: &[ExportRow], format: ExportFormat) -> Result<Vec<u8>, TabularError> {
    match format {
        ExportFormat::Csv => {
            let mut buf = Vec::new();
            write_csv(&mut buf, rows)?;
            Ok(buf)
        }
        ExportFormat::Xlsx => xlsx_bytes(rows),
    }
}

/// A finished export: where it was saved and exactly what was saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Save `rows` in `format` under the fixed export file name inside `dir`,
/// replacing any previous export.
///
/// The file is written to a temporary sibling and renamed into place, so a
/// reader never sees a partial file and concurrent exports do not interleave.
///
/// # Errors
///
/// Returns `TabularError` if `dir` cannot be created or the file cannot be written.
pub fn export_to_dir(
    rows: &[ExportRow],
    format: ExportFormat,
    dir: &Path,
) -> Result<Export, TabularError> {
    let bytes = render(rows, format)?;

    std::fs::create_dir_all(dir)?;
    let path = dir.join(format.file_name());
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.flush()?;
    tmp.persist(&path).map_err(|e| e.error)?;

    tracing::info!(path = %path.display(), rows = rows.len(), %format, "exported associations");
    Ok(Export { path, bytes })
}
