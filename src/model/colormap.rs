use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Sequential colormaps used to grade series by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Colormap {
    #[default]
    BoneR,
    GreysR,
}

// Piecewise-linear segments of matplotlib's "bone": (position, intensity).
const BONE_RED: &[(f64, f64)] = &[(0.0, 0.0), (0.746032, 0.652778), (1.0, 1.0)];
const BONE_GREEN: &[(f64, f64)] = &[
    (0.0, 0.0),
    (0.365079, 0.319444),
    (0.746032, 0.777778),
    (1.0, 1.0),
];
const BONE_BLUE: &[(f64, f64)] = &[(0.0, 0.0), (0.365079, 0.444444), (1.0, 1.0)];

// ColorBrewer "Greys" as used by matplotlib, white to black in nine
// evenly spaced steps.
const GREYS: &[(f64, f64)] = &[
    (0.0, 1.0),
    (0.125, 0.941176),
    (0.25, 0.850980),
    (0.375, 0.741176),
    (0.5, 0.588235),
    (0.625, 0.450980),
    (0.75, 0.321569),
    (0.875, 0.145098),
    (1.0, 0.0),
];

// matplotlib's default qualitative cycle.
const TAB10: [Rgb; 10] = [
    Rgb(31, 119, 180),
    Rgb(255, 127, 14),
    Rgb(44, 160, 44),
    Rgb(214, 39, 40),
    Rgb(148, 103, 189),
    Rgb(140, 86, 75),
    Rgb(227, 119, 194),
    Rgb(127, 127, 127),
    Rgb(188, 189, 34),
    Rgb(23, 190, 207),
];

impl Colormap {
    /// Colour at `t`, clamped to `[0, 1]`.
    pub fn sample(self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Colormap::BoneR => {
                let x = 1.0 - t;
                Rgb(
                    channel(interpolate(BONE_RED, x)),
                    channel(interpolate(BONE_GREEN, x)),
                    channel(interpolate(BONE_BLUE, x)),
                )
            }
            Colormap::GreysR => {
                let v = channel(interpolate(GREYS, 1.0 - t));
                Rgb(v, v, v)
            }
        }
    }

    /// Colour for series `rank` of `count`, sampled at `rank / count`.
    pub fn rank_color(self, rank: usize, count: usize) -> Rgb {
        if count == 0 {
            return self.sample(0.0);
        }
        self.sample(rank as f64 / count as f64)
    }
}

pub fn categorical(index: usize) -> Rgb {
    TAB10[index % TAB10.len()]
}

fn interpolate(segments: &[(f64, f64)], x: f64) -> f64 {
    for pair in segments.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            let span = x1 - x0;
            if span <= 0.0 {
                return y1;
            }
            return y0 + (y1 - y0) * (x - x0) / span;
        }
    }
    segments.last().map_or(0.0, |&(_, y)| y)
}

fn channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/colormap.rs"]
mod tests;
