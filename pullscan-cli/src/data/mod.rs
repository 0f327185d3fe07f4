//! Data access: Yahoo Finance fetch and CSV import.
//!
//! These failures are the external-I/O category, deliberately separate from
//! `pullscan_core::ScanError`: a fetch error is worth retrying, a short
//! series is not.

pub mod yahoo;

pub use yahoo::YahooProvider;

use chrono::NaiveDate;
use pullscan_core::domain::{is_ascending, PriceBar};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Structured error types for data operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider")]
    RateLimited,

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("no usable bars returned for '{symbol}'")]
    EmptyData { symbol: String },

    #[error("csv import failed: {0}")]
    CsvImport(String),
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

/// Load daily bars from a CSV file with a date,open,high,low,close,volume
/// header. The offline path when Yahoo is unavailable.
pub fn load_csv(path: &Path) -> Result<Vec<PriceBar>, DataError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| DataError::CsvImport(e.to_string()))?;

    let mut bars = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        let row = row.map_err(|e| DataError::CsvImport(e.to_string()))?;
        bars.push(PriceBar {
            date: row.date,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        });
    }

    if bars.is_empty() {
        return Err(DataError::CsvImport("file contains no bars".into()));
    }
    if !is_ascending(&bars) {
        return Err(DataError::CsvImport(
            "bars must be ascending by date with no duplicates".into(),
        ));
    }

    Ok(bars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("pullscan-csv-{name}-{}.csv", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_well_formed_csv() {
        let path = write_temp(
            "ok",
            "date,open,high,low,close,volume\n\
             2024-01-02,100.0,105.0,99.0,104.0,50000\n\
             2024-01-03,104.0,106.0,103.0,105.5,42000\n",
        );
        let bars = load_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(bars[1].volume, 42000);
        assert!(bars[1].is_sane());
    }

    #[test]
    fn rejects_out_of_order_csv() {
        let path = write_temp(
            "unordered",
            "date,open,high,low,close,volume\n\
             2024-01-03,104.0,106.0,103.0,105.5,42000\n\
             2024-01-02,100.0,105.0,99.0,104.0,50000\n",
        );
        let err = load_csv(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, DataError::CsvImport(_)));
    }

    #[test]
    fn rejects_empty_csv() {
        let path = write_temp("empty", "date,open,high,low,close,volume\n");
        let err = load_csv(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, DataError::CsvImport(_)));
    }
}
