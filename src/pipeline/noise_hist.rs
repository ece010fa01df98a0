use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::PlotConfig;
use crate::input::load_noise_table;
use crate::model::HistogramTable;
use crate::model::colormap::categorical;
use crate::model::histogram::build_histogram;
use crate::pipeline::{PipelineError, or_empty_if_missing};
use crate::render::naming::{chart_path, label_value, noise_chart_stem};
use crate::render::{Canvas, RenderError, Series};

/// One occupancy curve per choice, legended by the choice's quality.
pub fn draw_noise_histogram(
    canvas: &mut Canvas,
    hist: &HistogramTable,
    qualities: &[f64],
) -> Result<(), RenderError> {
    if hist.counts.len() != qualities.len() {
        return Err(RenderError::ShapeMismatch {
            series: hist.counts.len().min(qualities.len()),
            expected: qualities.len(),
            found: hist.counts.len(),
        });
    }

    canvas.set_caption("Quality choice distribution");
    canvas.set_axis_labels("quality", "count");

    for (c, (counts, &quality)) in hist.counts.iter().zip(qualities).enumerate() {
        canvas.push_series(Series {
            label: label_value(quality),
            color: categorical(c),
            points: hist
                .bins
                .iter()
                .zip(counts)
                .map(|(&x, &n)| (x, n as f64))
                .collect(),
        });
    }

    Ok(())
}

pub fn run_noise_pipeline(config: &PlotConfig) -> Result<PathBuf, PipelineError> {
    let input = &config.noise_input;
    info!(input = %input.display(), "loading noise samples");
    let table = or_empty_if_missing(load_noise_table(input, config.shape_check), "noise")?;

    let hist = build_histogram(&table, config.out_of_range);
    for (c, &dropped) in hist.dropped.iter().enumerate() {
        if dropped > 0 {
            warn!(
                choice = c,
                quality = table.qualities.get(c).copied().unwrap_or(f64::NAN),
                dropped,
                "samples left out of the histogram"
            );
        }
    }

    let mut canvas = Canvas::new(config.canvas_style());
    draw_noise_histogram(&mut canvas, &hist, &table.qualities)?;

    let stem = noise_chart_stem(&table.qualities, table.variance);
    let path = chart_path(&config.results_dir, &stem, config.format);
    Ok(canvas.save(&path)?)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/noise_hist.rs"]
mod tests;
