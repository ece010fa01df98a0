use std::path::Path;

use tracing::debug;

use crate::input::{InputError, ShapeCheck, malformed, parse_row, read_lines};

/// Per-lambda error curves. Row `i` of `samples` belongs to `lambdas[i]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorTable {
    pub lambdas: Vec<f64>,
    pub samples: Vec<Vec<f64>>,
}

impl ErrorTable {
    /// Width of the first sample row, 0 for an empty table.
    pub fn width(&self) -> usize {
        self.samples.first().map_or(0, Vec::len)
    }
}

pub fn load_error_table(path: &Path, shape: ShapeCheck) -> Result<ErrorTable, InputError> {
    let lines = read_lines(path)?;
    let mut lines = lines.iter();

    let header = lines
        .next()
        .ok_or_else(|| malformed(path, "missing lambda header"))?;
    let lambdas = parse_row(path, header)?;
    let samples = lines
        .map(|line| parse_row(path, line))
        .collect::<Result<Vec<_>, _>>()?;

    if shape == ShapeCheck::Strict {
        check_shape(path, &lambdas, &samples)?;
    }

    debug!(
        path = %path.display(),
        lambdas = lambdas.len(),
        rows = samples.len(),
        "parsed error table"
    );

    Ok(ErrorTable { lambdas, samples })
}

fn check_shape(path: &Path, lambdas: &[f64], samples: &[Vec<f64>]) -> Result<(), InputError> {
    if samples.len() != lambdas.len() {
        return Err(malformed(
            path,
            format!(
                "{} lambdas but {} sample rows",
                lambdas.len(),
                samples.len()
            ),
        ));
    }
    let width = samples.first().map_or(0, Vec::len);
    for (idx, row) in samples.iter().enumerate() {
        if row.len() != width {
            return Err(malformed(
                path,
                format!(
                    "sample row {} has {} values, expected {}",
                    idx + 1,
                    row.len(),
                    width
                ),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/error_table.rs"]
mod tests;
