//! CSV dataset loader.
//!
//! The source file layout is a fixed contract with the data provider: an
//! SDMX-style extract with one observation per row. Columns are located by
//! header name, not position, and columns beyond the required set are
//! ignored.

use std::path::Path;
use std::time::Instant;

use tracing::info;

use findex_model::{Dataset, Record};

use crate::error::{IngestError, Result};

/// Required source columns, by header name.
pub mod columns {
    pub const STATUS: &str = "OBS_STATUS";
    pub const PERIOD: &str = "TIME_PERIOD";
    pub const AREA: &str = "AREA_LABEL";
    pub const SEX: &str = "SEX_LABEL";
    pub const AGE: &str = "AGE_LABEL";
    pub const INCOME: &str = "COMP_BREAKDOWN_1_LABEL";
    pub const EDUCATION: &str = "COMP_BREAKDOWN_3_LABEL";
    pub const VALUE: &str = "OBS_VALUE";
}

/// Status code of actual/approved observations. Rows with any other status
/// (estimates, missing) are dropped at load time.
pub const RETAINED_STATUS: &str = "A";

/// Reads the dataset file, retaining only valid-status rows.
///
/// Fatal conditions: unreadable file, malformed CSV, a missing required
/// column, or a `TIME_PERIOD` cell that is not an integer; there is no
/// partial load. An `OBS_VALUE` cell that is empty or not a finite number
/// degrades to an absent value instead of failing the load.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let started = Instant::now();
    let bytes = std::fs::read(path).map_err(|e| IngestError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|e| IngestError::csv(path, e.to_string()))?
        .clone();

    let idx_status = require_column(path, &headers, columns::STATUS)?;
    let idx_period = require_column(path, &headers, columns::PERIOD)?;
    let idx_area = require_column(path, &headers, columns::AREA)?;
    let idx_sex = require_column(path, &headers, columns::SEX)?;
    let idx_age = require_column(path, &headers, columns::AGE)?;
    let idx_income = require_column(path, &headers, columns::INCOME)?;
    let idx_education = require_column(path, &headers, columns::EDUCATION)?;
    let idx_value = require_column(path, &headers, columns::VALUE)?;

    let mut records = Vec::new();
    let mut rows_read = 0u64;
    let mut value_absent = 0usize;
    for (idx, row) in reader.records().enumerate() {
        let row = row.map_err(|e| IngestError::csv(path, e.to_string()))?;
        rows_read += 1;

        if cell(&row, idx_status) != RETAINED_STATUS {
            continue;
        }

        let period_raw = cell(&row, idx_period);
        let period =
            period_raw
                .parse::<i32>()
                .map_err(|_| IngestError::InvalidPeriod {
                    path: path.to_path_buf(),
                    row: idx as u64 + 1,
                    value: period_raw.to_string(),
                })?;

        let value = parse_value(cell(&row, idx_value));
        if value.is_none() {
            value_absent += 1;
        }

        records.push(Record {
            period,
            area: cell(&row, idx_area).to_string(),
            sex: cell(&row, idx_sex).to_string(),
            age: cell(&row, idx_age).to_string(),
            income: cell(&row, idx_income).to_string(),
            education: cell(&row, idx_education).to_string(),
            value,
        });
    }

    info!(
        path = %path.display(),
        rows_read,
        retained = records.len(),
        value_absent,
        duration_ms = started.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(Dataset::new(records))
}

fn require_column(
    path: &Path,
    headers: &csv::StringRecord,
    name: &'static str,
) -> Result<usize> {
    headers
        .iter()
        .position(|header| normalize_header(header) == name)
        .ok_or(IngestError::MissingColumn {
            path: path.to_path_buf(),
            column: name,
        })
}

/// Strips surrounding whitespace and any UTF-8 BOM the export tool left on
/// the first header.
fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

fn cell<'a>(row: &'a csv::StringRecord, idx: usize) -> &'a str {
    row.get(idx).unwrap_or("").trim()
}

/// Parses an observation value. Empty and unparseable cells become `None`;
/// a non-finite parse result also counts as absent so the dataset invariant
/// (finite or absent) holds.
pub fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
