use crate::error::AppError;
use crate::presentation::instrument::{INSTRUMENT_FIELDS, InstrumentRecord};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Replaces the snapshot file at `path` with `records`
///
/// The file is truncated on open, then receives a header row in
/// [`INSTRUMENT_FIELDS`] order followed by one row per record. A header is
/// written even when `records` is empty. A failure part-way leaves whatever was
/// already written in place.
///
/// # Returns
/// * `Ok(usize)` - Number of data rows written
pub fn write_snapshot(records: &[InstrumentRecord], path: &Path) -> Result<usize, AppError> {
    let file = File::create(path)?;
    let rows = write_records(records, file)?;
    info!("{} Tickers saved to {}", rows, path.display());
    Ok(rows)
}

/// Writes header and records as CSV to any writer
pub fn write_records<W: Write>(records: &[InstrumentRecord], writer: W) -> Result<usize, AppError> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(INSTRUMENT_FIELDS)?;
    for record in records {
        wtr.write_record(record.to_row())?;
    }
    wtr.flush()?;

    Ok(records.len())
}
