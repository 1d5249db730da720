//! CSV bar loading.

use backtest_core::error::DataError;
use backtest_core::types::Bar;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// CSV record format. Columns are read by position; header names are ignored.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    timestamp: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

/// Load all bars from a CSV file.
///
/// The first row is a header and is skipped. Rows are returned in file order.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Bar>, DataError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(DataError::NotFound(path.display().to_string()));
    }

    let bars = read_bars(File::open(path)?)?;
    info!(path = %path.display(), bars = bars.len(), "loaded CSV data");
    Ok(bars)
}

/// Read bars from any CSV stream.
///
/// Expected columns: `timestamp,open,high,low,close,volume`. Values are not
/// validated beyond parsing; NaN or negative volume pass through unchanged.
pub fn read_bars<R: Read>(reader: R) -> Result<Vec<Bar>, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut bars = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| {
            let line = e.position().map_or(0, |p| p.line());
            parse_error(line, e)
        })?;
        let line = record.position().map_or(0, |p| p.line());

        if record.iter().all(|field| field.is_empty()) {
            debug!(line, "skipping blank row");
            continue;
        }

        let row: CsvRecord = record
            .deserialize(None)
            .map_err(|e| parse_error(line, e))?;

        bars.push(Bar::new(
            row.timestamp,
            row.open,
            row.high,
            row.low,
            row.close,
            row.volume,
        ));
    }

    Ok(bars)
}

fn parse_error(line: u64, err: csv::Error) -> DataError {
    DataError::Parse {
        line,
        message: err.to_string(),
    }
}
