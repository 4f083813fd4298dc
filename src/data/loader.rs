use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::core::{RawRecord, SkippedRecord, ValidationPolicy};
use crate::error::{ChartError, ChartResult};

pub const YEAR_COLUMN: &str = "year";
pub const CATEGORY_COLUMN: &str = "category";

/// Records read from a dataset plus the rows the policy dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedRecords {
    pub records: Vec<RawRecord>,
    pub skipped: Vec<SkippedRecord>,
}

/// Columns the loader reads; any other column is ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    year: Option<String>,
    category: Option<String>,
    fullname: Option<String>,
}

pub fn load_records_from_path(
    path: impl AsRef<Path>,
    policy: ValidationPolicy,
) -> ChartResult<LoadedRecords> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    debug!(path = %path.display(), "loading laureate records");
    load_records_from_reader(file, policy)
}

/// Reads a headered CSV stream.
///
/// Rows are numbered from 1, not counting the header line.
pub fn load_records_from_reader<R: Read>(
    reader: R,
    policy: ValidationPolicy,
) -> ChartResult<LoadedRecords> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();
    for required in [YEAR_COLUMN, CATEGORY_COLUMN] {
        if !headers.iter().any(|header| header == required) {
            return Err(ChartError::validation(0, required, "column is missing from the header"));
        }
    }

    let mut loaded = LoadedRecords::default();
    for (index, result) in reader.records().enumerate() {
        let row = index + 1;
        let string_record = result?;
        let csv_row: CsvRow = string_record.deserialize(Some(&headers))?;
        if let Some(record) = policy.apply(parse_row(row, csv_row), &mut loaded.skipped)? {
            loaded.records.push(record);
        }
    }

    debug!(
        loaded = loaded.records.len(),
        skipped = loaded.skipped.len(),
        "loaded laureate records"
    );
    Ok(loaded)
}

fn parse_row(row: usize, csv_row: CsvRow) -> ChartResult<RawRecord> {
    let year_text = csv_row
        .year
        .ok_or_else(|| ChartError::validation(row, YEAR_COLUMN, "is missing"))?;
    let year = year_text.trim().parse::<i32>().map_err(|_| {
        ChartError::validation(row, YEAR_COLUMN, format!("`{year_text}` is not an integer"))
    })?;
    let category = csv_row
        .category
        .ok_or_else(|| ChartError::validation(row, CATEGORY_COLUMN, "is missing"))?;

    Ok(RawRecord {
        year,
        category,
        fullname: csv_row.fullname.unwrap_or_default(),
    })
}
