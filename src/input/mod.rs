use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use serde::Deserialize;
use thiserror::Error;

pub mod error_table;
pub mod noise_table;

pub use error_table::{ErrorTable, load_error_table};
pub use noise_table::{NoiseTable, load_noise_table};

/// How strictly row shapes are validated while a table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeCheck {
    #[default]
    Strict,
    Lenient,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("result file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error in {} (line {line}): invalid number {field:?}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        field: String,
    },
    #[error("malformed input {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

pub(crate) fn malformed(path: &Path, reason: impl Into<String>) -> InputError {
    InputError::Malformed {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// A non-blank line of a result file together with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Line {
    pub number: usize,
    pub text: String,
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputError::NotFound {
            path: path.to_path_buf(),
        },
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Reads the whole file up front; the handle is closed before any parsing.
pub(crate) fn read_lines(path: &Path) -> Result<Vec<Line>, InputError> {
    let reader = open_maybe_gz(path)?;
    let mut lines = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        lines.push(Line {
            number: idx + 1,
            text: text.to_string(),
        });
    }
    Ok(lines)
}

pub(crate) fn parse_row(path: &Path, line: &Line) -> Result<Vec<f64>, InputError> {
    line.text
        .split(',')
        .map(|field| {
            let field = field.trim();
            field.parse::<f64>().map_err(|_| InputError::Parse {
                path: path.to_path_buf(),
                line: line.number,
                field: field.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
