use std::path::{Path, PathBuf};

use crate::render::ChartFormat;

/// Shortest round-trip form with a decimal point for integral values (`1.0`, `0.25`).
/// Exponents carry a sign and at least two digits (`1e-05`, `1e+16`).
pub fn label_value(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    let repr = format!("{v:?}");
    let Some((mantissa, exp)) = repr.split_once('e') else {
        return repr;
    };
    match exp.parse::<i32>() {
        Ok(e) => format!(
            "{mantissa}e{}{:02}",
            if e < 0 { '-' } else { '+' },
            e.unsigned_abs()
        ),
        Err(_) => repr,
    }
}

/// Qualities joined with `_`, followed by the variance to four decimals.
pub fn noise_chart_stem(qualities: &[f64], variance: f64) -> String {
    let mut parts: Vec<String> = qualities.iter().map(|&q| label_value(q)).collect();
    parts.push(format!("{variance:.4}"));
    parts.join("_")
}

pub fn chart_path(dir: &Path, stem: &str, format: ChartFormat) -> PathBuf {
    dir.join(format!("{stem}.{}", format.extension()))
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/naming.rs"]
mod tests;
