//! Terminal output formatting for benchmark tables.

use std::fmt::Write;

use crate::series::{AdjustError, Dataset};

/// Minimum width of a table cell.
const CELL_WIDTH: usize = 18;

/// Message printed instead of an empty table.
pub const EMPTY_TABLE: &str = "No benchmark rows to display.";

/// Which timings a table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableKind {
    /// Timings normalized to the reference test-case count.
    #[default]
    Adjusted,
    /// Timings as read from the CSV.
    Raw,
}

/// Format the dataset as a markdown table: one row per bit-width, one column
/// per series, times with four decimals.
pub fn format_times_table(dataset: &Dataset, kind: TableKind) -> Result<String, AdjustError> {
    if dataset.row_count() == 0 {
        return Ok(format!("{EMPTY_TABLE}\n"));
    }

    let columns: Vec<Vec<f64>> = match kind {
        TableKind::Raw => dataset.series().iter().map(|s| s.times.clone()).collect(),
        TableKind::Adjusted => dataset.adjusted()?.into_iter().map(|s| s.times).collect(),
    };

    let mut out = String::new();
    let _ = write!(out, "| {:<CELL_WIDTH$}|", "Bits");
    for name in dataset.names() {
        let _ = write!(out, " {name:<CELL_WIDTH$}|");
    }

    out.push_str("\n|");
    for _ in 0..=dataset.len() {
        let _ = write!(out, " {:<CELL_WIDTH$}|", "---");
    }
    out.push('\n');

    for (row, bits) in dataset.bits().iter().enumerate() {
        let _ = write!(out, "| {:<CELL_WIDTH$}|", format!("{bits} bits"));
        for column in &columns {
            let _ = write!(out, " {:<CELL_WIDTH$.4}|", column[row]);
        }
        out.push('\n');
    }

    Ok(out)
}

/// Print the dataset table to stdout.
pub fn print_times_table(dataset: &Dataset, kind: TableKind) -> Result<(), AdjustError> {
    print!("{}", format_times_table(dataset, kind)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_csv;

    fn dataset() -> Dataset {
        parse_csv("a,b,s1,s2\n10,16,1.0,2.0\n20,32,3.0,4.0".as_bytes()).unwrap()
    }

    #[test]
    fn adjusted_table_layout() {
        let table = format_times_table(&dataset(), TableKind::Adjusted).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "| Bits              | s1                | s2                |"
        );
        assert_eq!(
            lines[1],
            "| ---               | ---               | ---               |"
        );
        assert_eq!(
            lines[3],
            "| 32 bits           | 1.5000            | 2.0000            |"
        );
    }

    #[test]
    fn raw_table_keeps_measured_times() {
        let table = format_times_table(&dataset(), TableKind::Raw).unwrap();
        assert!(table.contains("| 32 bits           | 3.0000            | 4.0000            |"));
    }

    #[test]
    fn empty_table_message() {
        let empty = parse_csv("a,b,s1\n".as_bytes()).unwrap();
        let table = format_times_table(&empty, TableKind::Adjusted).unwrap();
        assert_eq!(table.trim_end(), EMPTY_TABLE);
    }

    #[test]
    fn zero_test_cases_fail_adjusted_table() {
        let bad = parse_csv("a,b,s1\n10,16,1.0\n0,32,1.0\n".as_bytes()).unwrap();
        assert!(format_times_table(&bad, TableKind::Adjusted).is_err());
        assert!(format_times_table(&bad, TableKind::Raw).is_ok());
    }
}
