use crate::grid::Grid;
use crate::integral::integral;

/// Resample `(x, y)` by averaging its piecewise-linear interpolant over each bin.
///
/// The interpolant is extended with a zero ramp before `x[0]` and after the
/// last point, each as long as the adjacent input spacing; beyond the trailing
/// ramp it stays at zero, so every bin past the ramp is filled without walking
/// the input any further.
///
/// # Panics
/// Panics if `x` has fewer than two points. `x` must be strictly increasing
/// and `y` at least as long as `x`.
pub fn smooth(x: &[f64], y: &[f64], from: f64, to: f64, number_of_points: usize) -> Vec<f64> {
    let grid = Grid::new(from, to, number_of_points);
    let mut output = Vec::with_capacity(number_of_points);
    if grid.is_empty() {
        return output;
    }

    let len = x.len();
    let step = grid.step();
    let initial_step = x[1] - x[0];
    let last_step = x[len - 1] - x[len - 2];

    let mut window = grid.window();
    // Segment from `previous` to `(next_x, next_y)`; no previous point before the
    // leading ramp, which makes the first segment contribute no area.
    let mut previous: Option<(f64, f64)> = None;
    let mut next_x = x[0] - initial_step;
    let mut next_y = 0.0;
    let mut slope = 0.0;
    let mut intercept = 0.0;

    let mut current_value = 0.0;
    let mut sum_at_min = 0.0;
    let mut i = 0;
    let mut ramp_placed = false;

    loop {
        while next_x - window.max >= 0.0 {
            let sum_at_max = current_value + partial_area(previous, window.max, slope);
            output.push((sum_at_max - sum_at_min) / step);
            if output.len() == number_of_points {
                return output;
            }
            window.advance();
            sum_at_min = sum_at_max;
        }

        let starts_before_min = previous.is_none_or(|(px, _)| px <= window.min);
        if starts_before_min && window.min <= next_x {
            sum_at_min = current_value + partial_area(previous, window.min, slope);
        }
        if let Some((px, _)) = previous {
            current_value += integral(px, next_x, slope, intercept);
        }

        let (px, py) = (next_x, next_y);
        previous = Some((px, py));
        if i < len {
            next_x = x[i];
            next_y = y[i];
            i += 1;
        } else if !ramp_placed {
            next_x += last_step;
            next_y = 0.0;
            ramp_placed = true;
        } else {
            // `px` ends the trailing ramp and the interpolant is zero past it,
            // so the area is final: only the open bin can still hold any.
            if window.min > px {
                sum_at_min = current_value;
            }
            output.push((current_value - sum_at_min) / step);
            let empty = (current_value - current_value) / step;
            output.resize(number_of_points, empty);
            return output;
        }

        slope = (next_y - py) / (next_x - px);
        intercept = -slope * px + py;
    }
}

/// Area under the current segment from its start up to `until`.
fn partial_area(previous: Option<(f64, f64)>, until: f64, slope: f64) -> f64 {
    match previous {
        Some((px, py)) => integral(0.0, until - px, slope, py),
        None => 0.0,
    }
}
