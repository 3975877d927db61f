//! CSV export sink.
//!
//! Persists the combined record sequence for the downstream spreadsheet
//! workflow. Column labels follow the registry conventions; the postal
//! code column is written empty on purpose — it is filled per row by an
//! external address-lookup step.

use std::path::Path;

use tohon_extract_record_models::OwnerRecord;

/// Output column labels: name, postal code, address, jurisdiction.
const COLUMNS: [&str; 4] = ["氏名", "郵便番号", "住所", "所在地"];

/// Errors that can occur while writing the output file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes `records` to `path` as CSV, one row per record.
///
/// # Errors
///
/// Returns [`ExportError`] when the file cannot be created or a row
/// cannot be written.
pub fn write_csv(path: &Path, records: &[OwnerRecord]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(COLUMNS)?;

    for record in records {
        writer.write_record([
            record.name.as_str(),
            record.postal_code.as_str(),
            record.address.as_str(),
            record.location.as_str(),
        ])?;
    }

    writer.flush()?;
    log::info!("{}: wrote {} row(s)", path.display(), records.len());
    Ok(())
}
