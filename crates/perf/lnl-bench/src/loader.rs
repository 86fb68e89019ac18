//! CSV benchmark table loader.
//!
//! Table layout:
//!
//! ```text
//! <test cases>,<bits>,<series 1>,<series 2>,...
//! 5000,16,0.0102,0.0097,...
//! ```
//!
//! The first two columns are row metadata; every remaining column is a
//! series of timings in seconds. All fields are trimmed and parsed as
//! floats; the metadata fields must additionally be non-negative integers.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use crate::series::Dataset;

/// Number of leading metadata columns (test cases, bits).
pub const METADATA_COLUMNS: usize = 2;

/// Errors raised while loading a benchmark table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing header row")]
    MissingHeader,
    #[error("header has {found} column(s); expected test cases, bits and at least one series")]
    NoSeries { found: usize },
    #[error("line {line}: expected {expected} fields, found {found}")]
    ColumnCount {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: column '{column}': '{value}' is not a number")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },
    #[error("line {line}: column '{column}': {value} is not a non-negative integer")]
    InvalidCount {
        line: u64,
        column: String,
        value: f64,
    },
}

/// Load a benchmark table from `path`.
///
/// The file is read to the end and closed before this returns.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(BufReader::new(file))
}

/// Parse a benchmark table from any reader.
pub fn parse_csv<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let header = rdr.headers()?.clone();
    if header.is_empty() {
        return Err(LoadError::MissingHeader);
    }
    if header.len() <= METADATA_COLUMNS {
        return Err(LoadError::NoSeries {
            found: header.len(),
        });
    }

    let mut dataset = Dataset::with_names(header.iter().skip(METADATA_COLUMNS));
    let mut values = Vec::with_capacity(header.len());

    // The reader drops blank lines, so a gap in line numbers is an empty row.
    let mut previous_line = header.position().map(|pos| pos.line());
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |pos| pos.line());
        if let Some(previous) = previous_line {
            if line > previous + 1 {
                return Err(LoadError::ColumnCount {
                    line: previous + 1,
                    expected: header.len(),
                    found: 0,
                });
            }
        }
        previous_line = Some(line);
        parse_row(&header, &record, line, &mut values)?;

        let test_cases = to_count(&header, 0, values[0], line)?;
        let bits = to_count(&header, 1, values[1], line)?;
        dataset.push_row(test_cases, bits, &values[METADATA_COLUMNS..]);
    }

    Ok(dataset)
}

/// Parse every field of `record` as a float into `values`.
fn parse_row(
    header: &StringRecord,
    record: &StringRecord,
    line: u64,
    values: &mut Vec<f64>,
) -> Result<(), LoadError> {
    if record.len() != header.len() {
        return Err(LoadError::ColumnCount {
            line,
            expected: header.len(),
            found: record.len(),
        });
    }

    values.clear();
    for (column, field) in header.iter().zip(record.iter()) {
        let value = field.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
            line,
            column: column.to_string(),
            value: field.to_string(),
        })?;
        values.push(value);
    }
    Ok(())
}

/// Convert a metadata value to an integer count.
fn to_count(header: &StringRecord, index: usize, value: f64, line: u64) -> Result<u64, LoadError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(LoadError::InvalidCount {
            line,
            column: header.get(index).unwrap_or_default().to_string(),
            value,
        });
    }
    Ok(value as u64)
}
