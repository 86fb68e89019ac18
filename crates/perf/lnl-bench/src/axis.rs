//! Axis ranges and tick positions.

use std::ops::{Range, RangeInclusive};

/// First bit-width tick.
pub const BITS_TICK_START: u64 = 16;
/// Bit-width ticks keep doubling until they reach this value.
pub const BITS_TICK_LIMIT: u64 = 64_000;
/// Decades covered by the time axis ticks (1 s to 10^6 s).
pub const TIME_TICK_EXPONENTS: RangeInclusive<i32> = 0..=6;

/// Fraction of the data span added on each side of an axis.
const MARGIN: f64 = 0.05;

/// Powers of ten for every exponent in `exponents`.
pub fn power_of_ten_ticks(exponents: RangeInclusive<i32>) -> Vec<f64> {
    exponents.map(|e| 10f64.powi(e)).collect()
}

/// `start, 2*start, 4*start, ...` up to the first value `>= limit`.
///
/// Returns an empty sequence for a zero start, which would never grow.
pub fn doubling_ticks(start: u64, limit: u64) -> Vec<u64> {
    if start == 0 {
        return Vec::new();
    }
    let mut ticks = vec![start];
    let mut last = start;
    while last < limit {
        match last.checked_mul(2) {
            Some(next) => {
                ticks.push(next);
                last = next;
            }
            None => break,
        }
    }
    ticks
}

/// Default bit-width ticks: 16, 32, ..., 65536.
pub fn bits_ticks() -> Vec<f64> {
    doubling_ticks(BITS_TICK_START, BITS_TICK_LIMIT)
        .into_iter()
        .map(|t| t as f64)
        .collect()
}

/// Default time ticks: 1, 10, ..., 10^6.
pub fn time_ticks() -> Vec<f64> {
    power_of_ten_ticks(TIME_TICK_EXPONENTS)
}

/// Range covering every positive value, padded in log10 space.
///
/// Returns `None` when there is no positive finite value to place on a log
/// axis.
pub fn log_range(values: impl IntoIterator<Item = f64>) -> Option<Range<f64>> {
    let (lo, hi) = min_max(
        values
            .into_iter()
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(f64::log10),
    )?;
    let pad = padding(lo, hi);
    Some(10f64.powf(lo - pad)..10f64.powf(hi + pad))
}

/// Range covering every finite value, padded linearly.
pub fn linear_range(values: impl IntoIterator<Item = f64>) -> Option<Range<f64>> {
    let (lo, hi) = min_max(values.into_iter().filter(|v| v.is_finite()))?;
    let pad = padding(lo, hi);
    Some(lo - pad..hi + pad)
}

/// Ticks that fall inside `range`.
pub fn ticks_within(ticks: &[f64], range: &Range<f64>) -> Vec<f64> {
    ticks
        .iter()
        .copied()
        .filter(|t| *t >= range.start && *t <= range.end)
        .collect()
}

/// Ticks that fall inside `range`, or the decades inside it when none do.
///
/// Keeps a log axis labelled when the data lies entirely outside the fixed
/// tick set.
pub fn log_ticks_within(ticks: &[f64], range: &Range<f64>) -> Vec<f64> {
    let inside = ticks_within(ticks, range);
    if !inside.is_empty() || range.start <= 0.0 {
        return inside;
    }
    let first = range.start.log10().floor() as i32;
    let last = range.end.log10().ceil() as i32;
    ticks_within(&power_of_ten_ticks(first..=last), range)
}

/// Tick label: integers without a fraction, values below `1e-3` in
/// scientific notation, other values with at most four decimals.
pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    if value.abs() < 1e-3 {
        return format!("{value:e}");
    }
    let text = format!("{value:.4}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn padding(lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span > 0.0 {
        span * MARGIN
    } else {
        (lo.abs() * MARGIN).max(0.5)
    }
}
