//! Benchmark CSV loading
//!
//! Rows are deserialized straight into [`BenchmarkRecord`]; the header row is
//! checked against the schema first so a misnamed column fails with a message
//! naming it rather than a generic deserialization error.

use crate::types::{BenchmarkRecord, ReportError, Result, THREAD_COUNT_COLUMN, TIME_COLUMN};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load every record of a benchmark CSV file
pub fn load_records(path: &Path) -> Result<Vec<BenchmarkRecord>> {
    log::info!("Loading benchmark results: {:?}", path);

    let file = File::open(path).map_err(|e| {
        ReportError::InputError(format!("cannot open {:?}: {}", path, e))
    })?;

    let records = load_records_from_reader(file)?;
    log::info!("Loaded {} records from {:?}", records.len(), path);
    Ok(records)
}

/// Load every record from an in-memory or streamed CSV source
pub fn load_records_from_reader<R: Read>(reader: R) -> Result<Vec<BenchmarkRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| ReportError::InputError(format!("unreadable header row: {}", e)))?
        .clone();

    if headers.is_empty() {
        return Err(ReportError::InputError("input is empty".to_string()));
    }
    log::debug!("CSV header: {:?}", headers);

    for column in [THREAD_COUNT_COLUMN, TIME_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(ReportError::InputError(format!(
                "missing required column '{}'",
                column
            )));
        }
    }

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            ReportError::InputError(format!("malformed row at line {}: {}", line, e))
        })?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let record: BenchmarkRecord = row.deserialize(Some(&headers)).map_err(|e| {
            ReportError::InputError(format!("malformed row at line {}: {}", line, e))
        })?;
        validate(&record, line)?;
        log::trace!("Record: {:?}", record);
        records.push(record);
    }

    if records.is_empty() {
        return Err(ReportError::InputError("no benchmark rows found".to_string()));
    }

    Ok(records)
}

/// Reject values the statistics cannot work with
fn validate(record: &BenchmarkRecord, line: u64) -> Result<()> {
    if record.thread_count == 0 {
        return Err(ReportError::InputError(format!(
            "line {}: thread count must be at least 1",
            line
        )));
    }
    if !record.time_seconds.is_finite() || record.time_seconds < 0.0 {
        return Err(ReportError::InputError(format!(
            "line {}: time must be a finite, non-negative number of seconds (got {})",
            line, record.time_seconds
        )));
    }
    Ok(())
}
