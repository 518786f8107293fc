//! WASM bindings for equispaced.
//!
//! Build with:
//! ```sh
//! wasm-pack build equispaced-wasm
//! ```

use wasm_bindgen::prelude::*;

use equispaced::{Grid, ResampleOptions, Variant};

fn to_js(e: equispaced::ResampleError) -> JsError {
    JsError::new(&e.to_string())
}

fn options(
    from: Option<f64>,
    to: Option<f64>,
    number_of_points: Option<usize>,
    variant: Option<String>,
) -> Result<ResampleOptions, JsError> {
    let variant = match variant {
        Some(v) => v.parse::<Variant>().map_err(to_js)?,
        None => Variant::default(),
    };
    Ok(ResampleOptions {
        from,
        to,
        number_of_points: number_of_points.unwrap_or(equispaced::DEFAULT_NUMBER_OF_POINTS),
        variant,
    })
}

// ── Resampling ──

/// Resamples `(x, y)` onto `number_of_points` equally spaced points (default 100).
///
/// `variant` is one of: "smooth" (default), "slot", "unit".
#[wasm_bindgen]
pub fn resample(
    x: &[f64],
    y: &[f64],
    from: Option<f64>,
    to: Option<f64>,
    number_of_points: Option<usize>,
    variant: Option<String>,
) -> Result<Vec<f64>, JsError> {
    let opts = options(from, to, number_of_points, variant)?;
    equispaced::resample(x, y, &opts).map_err(to_js)
}

/// Returns the x-coordinates matching the output of `resample`.
#[wasm_bindgen]
pub fn resample_x(
    x: &[f64],
    y: &[f64],
    from: Option<f64>,
    to: Option<f64>,
    number_of_points: Option<usize>,
) -> Result<Vec<f64>, JsError> {
    let opts = options(from, to, number_of_points, None)?;
    equispaced::output_grid(x, y, &opts).map_err(to_js)
}

/// Returns the definite integral of `slope * x + intercept` from `x0` to `x1`.
#[wasm_bindgen]
pub fn integral(x0: f64, x1: f64, slope: f64, intercept: f64) -> f64 {
    equispaced::integral(x0, x1, slope, intercept)
}

/// Returns `number_of_points` equally spaced x-coordinates from `from` to `to`.
#[wasm_bindgen]
pub fn grid_centers(from: f64, to: f64, number_of_points: usize) -> Vec<f64> {
    Grid::new(from, to, number_of_points).centers()
}
