use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp(contents: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!(
        "dempshaf_plots_error_table_{}_{}",
        std::process::id(),
        id
    ));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("error_results.csv");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_concrete_error_file() {
    let path = write_temp("0.1,0.3\n0.0,0.5,1.0\n0.0,0.25,1.0\n");
    let table = load_error_table(&path, ShapeCheck::Strict).unwrap();
    assert_eq!(table.lambdas, vec![0.1, 0.3]);
    assert_eq!(
        table.samples,
        vec![vec![0.0, 0.5, 1.0], vec![0.0, 0.25, 1.0]]
    );
    assert_eq!(table.width(), 3);
}

#[test]
fn test_k_by_w_shape() {
    let k = 4;
    let w = 6;
    let mut text = (0..k)
        .map(|i| format!("{}", i as f64 * 0.5))
        .collect::<Vec<_>>()
        .join(",");
    text.push('\n');
    for i in 0..k {
        let row = (0..w)
            .map(|j| format!("{}", (i * w + j) as f64 / 100.0))
            .collect::<Vec<_>>()
            .join(",");
        text.push_str(&row);
        text.push('\n');
    }
    let path = write_temp(&text);
    let table = load_error_table(&path, ShapeCheck::Strict).unwrap();
    assert_eq!(table.lambdas.len(), k);
    assert_eq!(table.samples.len(), k);
    assert!(table.samples.iter().all(|row| row.len() == w));
}

#[test]
fn test_strict_rejects_ragged_rows() {
    let path = write_temp("0.1,0.3\n0.0,0.5,1.0\n0.0,1.0\n");
    let err = load_error_table(&path, ShapeCheck::Strict).unwrap_err();
    assert!(matches!(err, InputError::Malformed { .. }));
}

#[test]
fn test_strict_rejects_row_count_mismatch() {
    let path = write_temp("0.1,0.3,0.5\n0.0,0.5,1.0\n0.0,0.25,1.0\n");
    let err = load_error_table(&path, ShapeCheck::Strict).unwrap_err();
    match err {
        InputError::Malformed { reason, .. } => assert!(reason.contains("3 lambdas")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_lenient_keeps_ragged_rows() {
    let path = write_temp("0.1,0.3\n0.0,0.5,1.0\n0.0,1.0\n");
    let table = load_error_table(&path, ShapeCheck::Lenient).unwrap();
    assert_eq!(table.samples[1], vec![0.0, 1.0]);
}

#[test]
fn test_malformed_number_is_parse_error() {
    let path = write_temp("0.1,0.3\n0.0,oops,1.0\n0.0,0.25,1.0\n");
    let err = load_error_table(&path, ShapeCheck::Lenient).unwrap_err();
    assert!(matches!(err, InputError::Parse { line: 2, .. }));
}

#[test]
fn test_empty_file_is_malformed() {
    let path = write_temp("");
    let err = load_error_table(&path, ShapeCheck::Strict).unwrap_err();
    assert!(matches!(err, InputError::Malformed { .. }));
}

#[test]
fn test_missing_file_is_not_found() {
    let path = write_temp("").with_file_name("missing.csv");
    let err = load_error_table(&path, ShapeCheck::Strict).unwrap_err();
    assert!(matches!(err, InputError::NotFound { .. }));
}
