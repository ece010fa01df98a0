use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::model::Rgb;

pub mod naming;

const BACKGROUND: RGBColor = RGBColor(234, 234, 242);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ChartFormat {
    #[default]
    Svg,
    Png,
}

impl ChartFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ChartFormat::Svg => "svg",
            ChartFormat::Png => "png",
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("series {series}: expected {expected} points, found {found}")]
    ShapeMismatch {
        series: usize,
        expected: usize,
        found: usize,
    },
    #[error("IO error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("drawing error: {0}")]
    Draw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: Rgb,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasStyle {
    pub width: u32,
    pub height: u32,
    pub format: ChartFormat,
    pub annotate: bool,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            format: ChartFormat::Svg,
            annotate: true,
        }
    }
}

/// One chart in flight. Plotters add series to it; `save` draws and
/// consumes it, so every artifact starts from a fresh canvas.
#[derive(Debug)]
pub struct Canvas {
    style: CanvasStyle,
    caption: String,
    x_desc: String,
    y_desc: String,
    series: Vec<Series>,
}

impl Canvas {
    pub fn new(style: CanvasStyle) -> Self {
        Self {
            style,
            caption: String::new(),
            x_desc: String::new(),
            y_desc: String::new(),
            series: Vec::new(),
        }
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    pub fn set_axis_labels(&mut self, x: impl Into<String>, y: impl Into<String>) {
        self.x_desc = x.into();
        self.y_desc = y.into();
    }

    pub fn push_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn x_range(&self) -> Range<f64> {
        padded_range(
            self.series.iter().flat_map(|s| s.points.iter().map(|p| p.0)),
            0.0,
        )
    }

    pub fn y_range(&self) -> Range<f64> {
        padded_range(
            self.series.iter().flat_map(|s| s.points.iter().map(|p| p.1)),
            0.05,
        )
    }

    pub fn save(self, path: &Path) -> Result<PathBuf, RenderError> {
        // plotters is built without a font backend; only SVG can carry text.
        if self.style.format == ChartFormat::Png && self.style.annotate {
            return Err(RenderError::Draw(
                "png charts cannot draw text; use svg or set annotate to false".to_string(),
            ));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| RenderError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let size = (self.style.width, self.style.height);
        match self.style.format {
            ChartFormat::Svg => self.draw(SVGBackend::new(path, size).into_drawing_area())?,
            ChartFormat::Png => self.draw(BitMapBackend::new(path, size).into_drawing_area())?,
        }
        Ok(path.to_path_buf())
    }

    fn draw<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> Result<(), RenderError> {
        root.fill(&BACKGROUND).map_err(draw_err)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(20);
        if self.style.annotate {
            builder
                .caption(&self.caption, ("sans-serif", 24))
                .x_label_area_size(45)
                .y_label_area_size(55);
        }
        let mut chart = builder
            .build_cartesian_2d(self.x_range(), self.y_range())
            .map_err(draw_err)?;

        if self.style.annotate {
            chart
                .configure_mesh()
                .x_desc(self.x_desc.as_str())
                .y_desc(self.y_desc.as_str())
                .bold_line_style(WHITE)
                .light_line_style(WHITE.mix(0.5))
                .draw()
                .map_err(draw_err)?;
        }

        for series in self.series() {
            let color = RGBColor(series.color.0, series.color.1, series.color.2);
            chart
                .draw_series(LineSeries::new(
                    series.points.iter().copied(),
                    color.stroke_width(2),
                ))
                .map_err(draw_err)?
                .label(series.label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }

        if self.style.annotate && !self.series.is_empty() {
            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(draw_err)?;
        }

        root.present().map_err(draw_err)?;
        Ok(())
    }
}

fn draw_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Draw(err.to_string())
}

/// Finite min..max of `values` widened by `pad` of the span on each side.
/// Empty input gives `0..1`; a single value is widened by 0.5.
fn padded_range(values: impl Iterator<Item = f64>, pad: f64) -> Range<f64> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo > hi {
        return 0.0..1.0;
    }
    if lo == hi {
        return (lo - 0.5)..(hi + 0.5);
    }
    let margin = (hi - lo) * pad;
    (lo - margin)..(hi + margin)
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/mod.rs"]
mod tests;
