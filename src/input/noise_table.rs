use std::path::Path;

use tracing::debug;

use crate::input::{InputError, ShapeCheck, malformed, parse_row, read_lines};

/// Per-choice quality samples recorded under a single noise variance.
/// Rows may differ in length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoiseTable {
    pub variance: f64,
    pub qualities: Vec<f64>,
    pub samples: Vec<Vec<f64>>,
}

pub fn load_noise_table(path: &Path, shape: ShapeCheck) -> Result<NoiseTable, InputError> {
    let lines = read_lines(path)?;
    let mut lines = lines.iter();

    let variance_line = lines
        .next()
        .ok_or_else(|| malformed(path, "missing variance line"))?;
    let variance_row = parse_row(path, variance_line)?;
    let variance = match (variance_row.as_slice(), shape) {
        ([v], _) => *v,
        ([v, ..], ShapeCheck::Lenient) => *v,
        (values, _) => {
            return Err(malformed(
                path,
                format!("expected a single variance value, found {}", values.len()),
            ));
        }
    };

    let quality_line = lines
        .next()
        .ok_or_else(|| malformed(path, "missing quality line"))?;
    let qualities = parse_row(path, quality_line)?;

    let samples = lines
        .map(|line| parse_row(path, line))
        .collect::<Result<Vec<_>, _>>()?;

    if shape == ShapeCheck::Strict && samples.len() != qualities.len() {
        return Err(malformed(
            path,
            format!(
                "{} qualities but {} sample rows",
                qualities.len(),
                samples.len()
            ),
        ));
    }

    debug!(
        path = %path.display(),
        variance,
        choices = qualities.len(),
        "parsed noise table"
    );

    Ok(NoiseTable {
        variance,
        qualities,
        samples,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/noise_table.rs"]
mod tests;
