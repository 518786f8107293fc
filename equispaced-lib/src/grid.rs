/// Equally spaced output grid.
///
/// Point `j` sits at `from + j * step` and owns the bin running from
/// `start + j * step` to `start + (j + 1) * step`, with `start = from - step / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    from: f64,
    number_of_points: usize,
    step: f64,
}

impl Grid {
    /// A single-point grid uses the whole `[from, to]` span as its step.
    pub fn new(from: f64, to: f64, number_of_points: usize) -> Self {
        let step = if number_of_points > 1 {
            (to - from) / (number_of_points - 1) as f64
        } else {
            to - from
        };
        Grid {
            from,
            number_of_points,
            step,
        }
    }

    pub fn len(&self) -> usize {
        self.number_of_points
    }

    pub fn is_empty(&self) -> bool {
        self.number_of_points == 0
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Left edge of the first bin.
    pub fn start(&self) -> f64 {
        self.from - self.step / 2.0
    }

    /// Bounds `(min, max)` of bin `j`.
    pub fn bin(&self, j: usize) -> (f64, f64) {
        let min = self.start() + j as f64 * self.step;
        (min, min + self.step)
    }

    /// The x-coordinate of every output point.
    pub fn centers(&self) -> Vec<f64> {
        (0..self.number_of_points)
            .map(|j| self.from + j as f64 * self.step)
            .collect()
    }

    pub(crate) fn window(&self) -> BinWindow {
        let min = self.start();
        BinWindow {
            min,
            max: min + self.step,
            step: self.step,
        }
    }
}

/// Bin currently being filled during a resampling pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BinWindow {
    pub min: f64,
    pub max: f64,
    step: f64,
}

impl BinWindow {
    pub fn advance(&mut self) {
        self.min = self.max;
        self.max += self.step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_step_and_start() {
        let grid = Grid::new(0.0, 4.0, 5);
        assert_eq!(grid.step(), 1.0);
        assert_eq!(grid.start(), -0.5);
        assert_eq!(grid.bin(0), (-0.5, 0.5));
        assert_eq!(grid.bin(4), (3.5, 4.5));
    }

    #[test]
    fn test_grid_centers() {
        let grid = Grid::new(10.0, 12.0, 5);
        assert_eq!(grid.centers(), vec![10.0, 10.5, 11.0, 11.5, 12.0]);
    }

    #[test]
    fn test_single_point_grid() {
        let grid = Grid::new(2.0, 6.0, 1);
        assert_eq!(grid.step(), 4.0);
        assert_eq!(grid.centers(), vec![2.0]);
        assert_eq!(grid.bin(0), (0.0, 4.0));
    }

    #[test]
    fn test_window_advance_is_contiguous() {
        let grid = Grid::new(0.0, 1.0, 3);
        let mut window = grid.window();
        for j in 0..3 {
            assert_eq!((window.min, window.max), grid.bin(j));
            window.advance();
        }
    }
}
