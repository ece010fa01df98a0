use serde::Deserialize;

use crate::input::NoiseTable;

/// Number of points on the reference axis over `[0, 1]`.
pub const BIN_COUNT: usize = 101;

/// What happens to samples above the last bin edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRange {
    #[default]
    Drop,
    Clamp,
}

/// Dense per-choice bin occupancy. `counts[c].len() == bins.len()` for every
/// choice and `sum(counts[c]) + dropped[c]` equals the choice's sample count.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramTable {
    pub bins: Vec<f64>,
    pub counts: Vec<Vec<u64>>,
    pub dropped: Vec<usize>,
}

pub fn bin_axis() -> Vec<f64> {
    let last = (BIN_COUNT - 1) as f64;
    (0..BIN_COUNT).map(|i| i as f64 / last).collect()
}

/// Smallest `j` with `bins[j] >= value`. `None` above the last edge and for NaN.
pub fn bin_index(bins: &[f64], value: f64) -> Option<usize> {
    if value.is_nan() {
        return None;
    }
    let idx = bins.partition_point(|&edge| edge < value);
    (idx < bins.len()).then_some(idx)
}

pub fn digitize(bins: &[f64], values: &[f64]) -> Vec<Option<usize>> {
    values.iter().map(|&v| bin_index(bins, v)).collect()
}

pub fn build_histogram(table: &NoiseTable, out_of_range: OutOfRange) -> HistogramTable {
    let bins = bin_axis();
    let last_edge = bins[bins.len() - 1];

    let mut counts = Vec::with_capacity(table.samples.len());
    let mut dropped = Vec::with_capacity(table.samples.len());

    for row in &table.samples {
        let mut sorted = row.clone();
        sorted.sort_by(f64::total_cmp);

        let mut dense = vec![0u64; bins.len()];
        let mut missed = 0usize;
        for (value, idx) in sorted.iter().zip(digitize(&bins, &sorted)) {
            match idx {
                Some(j) => dense[j] += 1,
                None if out_of_range == OutOfRange::Clamp && *value > last_edge => {
                    dense[bins.len() - 1] += 1;
                }
                None => missed += 1,
            }
        }

        counts.push(dense);
        dropped.push(missed);
    }

    HistogramTable {
        bins,
        counts,
        dropped,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/histogram.rs"]
mod tests;
