use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, info};

use crate::config::PlotConfig;
use crate::input::{ErrorTable, load_error_table};
use crate::model::Colormap;
use crate::pipeline::{PipelineError, or_empty_if_missing};
use crate::render::naming::{chart_path, label_value};
use crate::render::{Canvas, RenderError, Series};

/// Which row width normalizes each series' x-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XAxisMode {
    #[default]
    FirstRow,
    PerRow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorCurveOptions {
    pub colormap: Colormap,
    pub x_axis: XAxisMode,
}

/// `x[j] = j / (width - 1)`; a single column sits at 0.
pub fn error_x_axis(width: usize) -> Vec<f64> {
    match width {
        0 => Vec::new(),
        1 => vec![0.0],
        w => {
            let last = (w - 1) as f64;
            (0..w).map(|j| j as f64 / last).collect()
        }
    }
}

pub fn draw_error_curves(
    canvas: &mut Canvas,
    table: &ErrorTable,
    opts: &ErrorCurveOptions,
) -> Result<(), RenderError> {
    canvas.set_caption("Error functions");
    canvas.set_axis_labels("threshold", "error");

    let shared_axis = error_x_axis(table.width());
    let n_series = table.lambdas.len();

    for (i, &lambda) in table.lambdas.iter().enumerate() {
        let row = table.samples.get(i).ok_or(RenderError::ShapeMismatch {
            series: i,
            expected: shared_axis.len(),
            found: 0,
        })?;

        let own_axis;
        let xs = match opts.x_axis {
            XAxisMode::FirstRow => {
                if row.len() != shared_axis.len() {
                    return Err(RenderError::ShapeMismatch {
                        series: i,
                        expected: shared_axis.len(),
                        found: row.len(),
                    });
                }
                &shared_axis
            }
            XAxisMode::PerRow => {
                own_axis = error_x_axis(row.len());
                &own_axis
            }
        };

        canvas.push_series(Series {
            label: label_value(lambda),
            color: opts.colormap.rank_color(i, n_series),
            points: xs.iter().copied().zip(row.iter().copied()).collect(),
        });
    }

    Ok(())
}

pub fn run_error_pipeline(config: &PlotConfig) -> Result<PathBuf, PipelineError> {
    let input = &config.error_input;
    info!(input = %input.display(), "loading error curves");
    let table = or_empty_if_missing(load_error_table(input, config.shape_check), "error")?;
    debug!(lambdas = table.lambdas.len(), width = table.width(), "error table ready");

    let mut canvas = Canvas::new(config.canvas_style());
    let opts = ErrorCurveOptions {
        colormap: config.colormap,
        x_axis: config.x_axis,
    };
    draw_error_curves(&mut canvas, &table, &opts)?;

    let path = chart_path(&config.results_dir, &config.error_chart, config.format);
    Ok(canvas.save(&path)?)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/error_curves.rs"]
mod tests;
