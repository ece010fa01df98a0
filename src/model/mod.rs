pub mod colormap;
pub mod histogram;

pub use colormap::{Colormap, Rgb};
pub use histogram::{HistogramTable, OutOfRange};
