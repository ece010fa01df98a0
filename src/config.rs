use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::input::ShapeCheck;
use crate::model::{Colormap, OutOfRange};
use crate::pipeline::error_curves::XAxisMode;
use crate::render::{CanvasStyle, ChartFormat};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    pub results_dir: PathBuf,
    pub error_input: PathBuf,
    pub noise_input: PathBuf,
    pub error_chart: String,
    pub format: ChartFormat,
    pub width: u32,
    pub height: u32,
    pub colormap: Colormap,
    pub shape_check: ShapeCheck,
    pub x_axis: XAxisMode,
    pub out_of_range: OutOfRange,
    pub annotate: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        let style = CanvasStyle::default();
        Self {
            results_dir: PathBuf::from("../results/graphs/dempshaf"),
            error_input: PathBuf::from("error_results.csv"),
            noise_input: PathBuf::from("noise_results.csv"),
            error_chart: "error_functions".to_string(),
            format: style.format,
            width: style.width,
            height: style.height,
            colormap: Colormap::BoneR,
            shape_check: ShapeCheck::Strict,
            x_axis: XAxisMode::FirstRow,
            out_of_range: OutOfRange::Drop,
            annotate: style.annotate,
        }
    }
}

impl PlotConfig {
    pub fn canvas_style(&self) -> CanvasStyle {
        CanvasStyle {
            width: self.width,
            height: self.height,
            format: self.format,
            annotate: self.annotate,
        }
    }
}

pub fn load_config(path: &Path) -> Result<PlotConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
