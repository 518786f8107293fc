//! Resampling of irregularly spaced `(x, y)` signals onto an equally spaced grid.
//!
//! Three policies are available through [`Variant`]: `Smooth` averages the
//! piecewise-linear interpolant over each bin, `Slot` takes the mean of the
//! samples in each bin and `Unit` their sum.

pub mod bucket;
pub mod error;
pub mod grid;
pub mod integral;
pub mod options;
pub mod resample;
pub mod smooth;

pub use bucket::{Aggregate, slot, unit};
pub use error::{ResampleError, Result};
pub use grid::Grid;
pub use integral::integral;
pub use options::{DEFAULT_NUMBER_OF_POINTS, ResampleOptions, Variant};
pub use resample::{ResampledSignal, output_grid, resample, resample_signal};
pub use smooth::smooth;
