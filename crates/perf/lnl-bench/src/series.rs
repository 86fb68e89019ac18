//! Benchmark series and the dataset they are loaded into.
//!
//! Every series carries its own copy of the per-row metadata (test-case count
//! and bit-width) so it can be plotted on its own. All series of a dataset
//! come from the same CSV rows and therefore share the same row count.

use thiserror::Error;

/// Errors raised while normalizing timings.
#[derive(Debug, Error, PartialEq)]
pub enum AdjustError {
    /// The dataset has no rows, so there is no reference test-case count.
    #[error("dataset has no benchmark rows")]
    NoRows,
    /// A row was measured with zero test cases.
    #[error("series '{series}', row {row}: test-case count is zero")]
    ZeroTestCases { series: String, row: usize },
}

/// One named column of benchmark timings.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Column name from the CSV header.
    pub name: String,
    /// Number of test cases each timing was measured over.
    pub test_cases: Vec<u64>,
    /// Operand size in bits.
    pub bits: Vec<u64>,
    /// Raw timings in seconds.
    pub times: Vec<f64>,
}

impl Series {
    /// Create an empty series.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            test_cases: Vec::new(),
            bits: Vec::new(),
            times: Vec::new(),
        }
    }

    /// Number of rows in this series.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the series holds no rows.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Rescale every timing to `reference` test cases.
    ///
    /// Row `i` becomes `times[i] * reference / test_cases[i]`, so rows that
    /// were measured over fewer test cases are scaled up accordingly.
    pub fn adjusted_times(&self, reference: u64) -> Result<Vec<f64>, AdjustError> {
        self.times
            .iter()
            .zip(&self.test_cases)
            .enumerate()
            .map(|(row, (&time, &count))| {
                if count == 0 {
                    return Err(AdjustError::ZeroTestCases {
                        series: self.name.clone(),
                        row,
                    });
                }
                Ok(time * reference as f64 / count as f64)
            })
            .collect()
    }

    fn push(&mut self, test_cases: u64, bits: u64, time: f64) {
        self.test_cases.push(test_cases);
        self.bits.push(bits);
        self.times.push(time);
    }
}

/// A series with its timings normalized to the dataset's reference count.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustedSeries {
    pub name: String,
    pub bits: Vec<u64>,
    pub times: Vec<f64>,
}

impl AdjustedSeries {
    /// `(bits, time)` pairs in row order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.bits
            .iter()
            .zip(&self.times)
            .map(|(&bits, &time)| (bits as f64, time))
    }
}

/// All series loaded from one benchmark table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    series: Vec<Series>,
}

impl Dataset {
    /// Create a dataset with one empty series per name.
    pub(crate) fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            series: names.into_iter().map(Series::new).collect(),
        }
    }

    /// Append one table row. `times` holds one value per series, in order.
    pub(crate) fn push_row(&mut self, test_cases: u64, bits: u64, times: &[f64]) {
        debug_assert_eq!(times.len(), self.series.len());
        for (series, &time) in self.series.iter_mut().zip(times) {
            series.push(test_cases, bits, time);
        }
    }

    /// All series, in header order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns `true` if the dataset has no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Number of rows shared by every series.
    pub fn row_count(&self) -> usize {
        self.series.first().map_or(0, Series::len)
    }

    /// Series names, in header order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.name.as_str())
    }

    /// Bit-widths of the table rows.
    pub fn bits(&self) -> &[u64] {
        self.series
            .first()
            .map(|s| s.bits.as_slice())
            .unwrap_or_default()
    }

    /// Test-case count every series is normalized to: the first row's.
    pub fn reference_test_cases(&self) -> Option<u64> {
        self.series
            .first()
            .and_then(|s| s.test_cases.first())
            .copied()
    }

    /// Normalize every series to the reference test-case count.
    pub fn adjusted(&self) -> Result<Vec<AdjustedSeries>, AdjustError> {
        let reference = self.reference_test_cases().ok_or(AdjustError::NoRows)?;
        self.series
            .iter()
            .map(|series| {
                Ok(AdjustedSeries {
                    name: series.name.clone(),
                    bits: series.bits.clone(),
                    times: series.adjusted_times(reference)?,
                })
            })
            .collect()
    }
}
