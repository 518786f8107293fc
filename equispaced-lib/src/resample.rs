use serde::{Deserialize, Serialize};

use crate::bucket::{slot, unit};
use crate::error::{ResampleError, Result};
use crate::grid::Grid;
use crate::options::{ResampleOptions, Variant};
use crate::smooth::smooth;

/// Resampled output with the x-coordinate of every point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResampledSignal {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Resample `(x, y)` onto `options.number_of_points` equally spaced points.
///
/// `x` must be finite and strictly increasing, with at least two points and
/// the same length as `y`. All checks happen before any resampling work.
pub fn resample(x: &[f64], y: &[f64], options: &ResampleOptions) -> Result<Vec<f64>> {
    let plan = Plan::resolve(x, y, options)?;
    Ok(plan.run(x, y))
}

/// Like [`resample`], also returning the grid x-coordinates in the requested
/// direction.
pub fn resample_signal(
    x: &[f64],
    y: &[f64],
    options: &ResampleOptions,
) -> Result<ResampledSignal> {
    let plan = Plan::resolve(x, y, options)?;
    Ok(ResampledSignal {
        x: plan.centers(),
        y: plan.run(x, y),
    })
}

/// The x-coordinates [`resample`] would produce, without resampling.
///
/// Input is validated the same way.
pub fn output_grid(x: &[f64], y: &[f64], options: &ResampleOptions) -> Result<Vec<f64>> {
    Ok(Plan::resolve(x, y, options)?.centers())
}

/// Validated request with `from <= to`.
#[derive(Debug, Clone, Copy)]
struct Plan {
    from: f64,
    to: f64,
    reverse: bool,
    number_of_points: usize,
    variant: Variant,
}

impl Plan {
    fn resolve(x: &[f64], y: &[f64], options: &ResampleOptions) -> Result<Self> {
        if x.len() != y.len() {
            return Err(ResampleError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(ResampleError::InvalidInput(format!(
                "at least two points are required, got {}",
                x.len()
            )));
        }

        let mut from = options.from.unwrap_or(x[0]);
        if !from.is_finite() {
            return Err(ResampleError::InvalidInput(format!(
                "'from' must be a finite number, got {from}"
            )));
        }
        let mut to = options.to.unwrap_or(x[x.len() - 1]);
        if !to.is_finite() {
            return Err(ResampleError::InvalidInput(format!(
                "'to' must be a finite number, got {to}"
            )));
        }
        let reverse = from > to;
        if reverse {
            std::mem::swap(&mut from, &mut to);
        }

        if options.number_of_points < 1 {
            return Err(ResampleError::InvalidInput(
                "the number of points must be at least 1".to_string(),
            ));
        }

        if let Some(idx) = x.iter().position(|v| !v.is_finite()) {
            return Err(ResampleError::InvalidInput(format!(
                "x[{idx}] is not finite"
            )));
        }
        if let Some(idx) = x.windows(2).position(|w| w[1] <= w[0]) {
            return Err(ResampleError::InvalidInput(format!(
                "x must be strictly increasing (x[{}] = {} follows {})",
                idx + 1,
                x[idx + 1],
                x[idx]
            )));
        }

        Ok(Plan {
            from,
            to,
            reverse,
            number_of_points: options.number_of_points,
            variant: options.variant,
        })
    }

    fn centers(&self) -> Vec<f64> {
        let mut centers = Grid::new(self.from, self.to, self.number_of_points).centers();
        if self.reverse {
            centers.reverse();
        }
        centers
    }

    fn run(&self, x: &[f64], y: &[f64]) -> Vec<f64> {
        tracing::debug!(
            variant = %self.variant,
            from = self.from,
            to = self.to,
            number_of_points = self.number_of_points,
            reverse = self.reverse,
            "resampling {} points",
            x.len()
        );
        let mut output = match self.variant {
            Variant::Smooth => smooth(x, y, self.from, self.to, self.number_of_points),
            Variant::Slot => slot(x, y, self.from, self.to, self.number_of_points),
            Variant::Unit => unit(x, y, self.from, self.to, self.number_of_points),
        };
        if self.reverse {
            output.reverse();
        }
        output
    }
}
