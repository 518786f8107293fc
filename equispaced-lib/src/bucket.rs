use crate::grid::Grid;

/// How a filled bin is turned into an output value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    /// Mean of the y-values in the bin.
    Mean,
    /// Sum of the y-values in the bin.
    Sum,
}

impl Aggregate {
    fn emit(self, value: f64, points: i64) -> f64 {
        if points <= 0 {
            return 0.0;
        }
        match self {
            Aggregate::Mean => value / points as f64,
            Aggregate::Sum => value,
        }
    }
}

/// Mean of the y-values falling in each bin, 0 for empty bins.
pub fn slot(x: &[f64], y: &[f64], from: f64, to: f64, number_of_points: usize) -> Vec<f64> {
    bucket(x, y, from, to, number_of_points, Aggregate::Mean)
}

/// Sum of the y-values falling in each bin, 0 for empty bins.
pub fn unit(x: &[f64], y: &[f64], from: f64, to: f64, number_of_points: usize) -> Vec<f64> {
    bucket(x, y, from, to, number_of_points, Aggregate::Sum)
}

/// Assign every input point to the bin containing it and aggregate each bin.
///
/// A point belongs to bin `(min, max]`. Once the input runs out, the bin
/// holding the last point is closed with what it has and every later bin is
/// empty. `x` must be strictly increasing; points past the end of the shorter
/// of `x` and `y` are ignored.
pub fn bucket(
    x: &[f64],
    y: &[f64],
    from: f64,
    to: f64,
    number_of_points: usize,
    aggregate: Aggregate,
) -> Vec<f64> {
    let grid = Grid::new(from, to, number_of_points);
    let mut output = Vec::with_capacity(number_of_points);
    if grid.is_empty() {
        return output;
    }

    let mut window = grid.window();
    let mut current_value = 0.0;
    // The pass starts from a sentinel point that is counted and taken back.
    let mut current_points: i64 = -1;
    // The first bin to close returns the point taken back for the sentinel.
    let mut back_outside = true;

    for (&px, &py) in x.iter().zip(y) {
        while px - window.max > 0.0 {
            if back_outside {
                current_points += 1;
                back_outside = false;
            }
            output.push(aggregate.emit(current_value, current_points));
            if output.len() == number_of_points {
                return output;
            }
            window.advance();
            current_value = 0.0;
            current_points = 0;
        }
        if px > window.min {
            current_value += py;
            current_points += 1;
        }
    }

    // Past the input only zero-valued extrapolated points remain, and each one
    // is taken back as soon as it is counted.
    if back_outside {
        current_points += 1;
    }
    output.push(aggregate.emit(current_value, current_points));
    tracing::trace!(
        empty_bins = number_of_points - output.len(),
        "input exhausted before the grid was filled"
    );
    output.resize(number_of_points, 0.0);
    output
}
