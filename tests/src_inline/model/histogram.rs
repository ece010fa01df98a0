use super::*;

fn noise(samples: Vec<Vec<f64>>) -> NoiseTable {
    NoiseTable {
        variance: 0.05,
        qualities: (0..samples.len()).map(|i| i as f64 + 1.0).collect(),
        samples,
    }
}

#[test]
fn test_bin_axis_spans_unit_interval() {
    let bins = bin_axis();
    assert_eq!(bins.len(), 101);
    assert_eq!(bins[0], 0.0);
    assert_eq!(bins[100], 1.0);
    for (i, pair) in bins.windows(2).enumerate() {
        assert!((pair[1] - pair[0] - 0.01).abs() < 1e-12, "step at {i}");
    }
}

#[test]
fn test_bin_index_boundaries() {
    let bins = bin_axis();
    assert_eq!(bin_index(&bins, 0.4), Some(40));
    assert_eq!(bin_index(&bins, 0.0), Some(0));
    assert_eq!(bin_index(&bins, -0.3), Some(0));
    assert_eq!(bin_index(&bins, 0.405), Some(41));
    assert_eq!(bin_index(&bins, 1.0), Some(100));
    assert_eq!(bin_index(&bins, 1.0001), None);
    assert_eq!(bin_index(&bins, f64::NAN), None);
}

#[test]
fn test_digitize_is_monotonic() {
    let bins = bin_axis();
    let values: Vec<f64> = (0..=1200).map(|i| i as f64 / 1000.0 - 0.1).collect();
    let idx = digitize(&bins, &values);
    let mut prev = 0usize;
    for (v, j) in values.iter().zip(&idx) {
        match j {
            Some(j) => {
                assert!(*j >= prev, "bin index went backwards at {v}");
                prev = *j;
            }
            None => assert!(*v > 1.0),
        }
    }
}

#[test]
fn test_concrete_noise_histogram() {
    let table = noise(vec![vec![0.1, 0.4, 0.9], vec![0.2, 0.25]]);
    let hist = build_histogram(&table, OutOfRange::Drop);

    assert_eq!(hist.counts.len(), 2);
    assert_eq!(hist.counts[0][10], 1);
    assert_eq!(hist.counts[0][40], 1);
    assert_eq!(hist.counts[0][90], 1);
    assert_eq!(hist.counts[1][20], 1);
    assert_eq!(hist.counts[1][25], 1);
    assert_eq!(hist.dropped, vec![0, 0]);
}

#[test]
fn test_count_vectors_have_fixed_length() {
    let table = noise(vec![vec![], vec![0.5], (0..500).map(|i| i as f64 / 499.0).collect()]);
    let hist = build_histogram(&table, OutOfRange::Drop);
    for (row, samples) in hist.counts.iter().zip(&table.samples) {
        assert_eq!(row.len(), BIN_COUNT);
        assert_eq!(row.iter().sum::<u64>() as usize, samples.len());
    }
}

#[test]
fn test_out_of_range_dropped_by_default() {
    let table = noise(vec![vec![0.5, 1.0, 1.5, 2.0]]);
    let hist = build_histogram(&table, OutOfRange::Drop);
    assert_eq!(hist.counts[0].iter().sum::<u64>(), 2);
    assert_eq!(hist.counts[0][100], 1);
    assert_eq!(hist.dropped, vec![2]);
}

#[test]
fn test_out_of_range_clamped() {
    let table = noise(vec![vec![0.5, 1.0, 1.5, 2.0, f64::NAN]]);
    let hist = build_histogram(&table, OutOfRange::Clamp);
    assert_eq!(hist.counts[0][100], 3);
    assert_eq!(hist.dropped, vec![1]);
}

#[test]
fn test_counts_ignore_input_order() {
    let a = build_histogram(&noise(vec![vec![0.9, 0.1, 0.4, 0.4]]), OutOfRange::Drop);
    let b = build_histogram(&noise(vec![vec![0.4, 0.4, 0.1, 0.9]]), OutOfRange::Drop);
    assert_eq!(a, b);
    assert_eq!(a.counts[0][40], 2);
}

#[test]
fn test_empty_table_gives_empty_histogram() {
    let hist = build_histogram(&NoiseTable::default(), OutOfRange::Drop);
    assert_eq!(hist.bins.len(), BIN_COUNT);
    assert!(hist.counts.is_empty());
    assert!(hist.dropped.is_empty());
}
