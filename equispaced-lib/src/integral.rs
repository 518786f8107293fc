/// Definite integral of the line `y = slope * x + intercept` from `x0` to `x1`.
///
/// Non-finite arguments propagate into the result.
pub fn integral(x0: f64, x1: f64, slope: f64, intercept: f64) -> f64 {
    (0.5 * slope * x1 * x1 + intercept * x1) - (0.5 * slope * x0 * x0 + intercept * x0)
}
