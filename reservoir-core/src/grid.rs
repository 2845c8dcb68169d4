use std::ops::{Index, IndexMut};

/// Temperature at the top row and the left column.
pub const HOT_EDGE: f64 = 150.0;
/// Temperature at the bottom row and the right column.
pub const COLD_EDGE: f64 = 50.0;

/// Row-major `nx x ny` temperature field. `(i, j)` is row `i`, column `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    nx: usize,
    ny: usize,
    data: Vec<f64>,
}

impl Grid {
    pub fn filled(nx: usize, ny: usize, value: f64) -> Grid {
        Grid {
            nx,
            ny,
            data: vec![value; nx * ny],
        }
    }

    /// Linear gradient from [`HOT_EDGE`] at row 0 to [`COLD_EDGE`] at row
    /// `nx - 1`, then the fixed edges: top, bottom, left, right. The columns
    /// are written last and own the corners.
    ///
    /// Callers guarantee `nx >= 2`.
    pub fn reservoir_initial(nx: usize, ny: usize) -> Grid {
        let mut g = Grid::filled(nx, ny, 0.0);
        let step = (HOT_EDGE - COLD_EDGE) / ((nx - 1) as f64);

        for i in 0..nx {
            g.row_mut(i).fill(HOT_EDGE - (i as f64) * step);
        }

        g.row_mut(0).fill(HOT_EDGE);
        g.row_mut(nx - 1).fill(COLD_EDGE);
        for i in 0..nx {
            g[(i, 0)] = HOT_EDGE;
            g[(i, ny - 1)] = COLD_EDGE;
        }
        g
    }

    // ---- Accessors ----

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.nx || j >= self.ny {
            return None;
        }
        Some(self.data[i * self.ny + j])
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.ny..(i + 1) * self.ny]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.ny..(i + 1) * self.ny]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    pub fn is_boundary(&self, i: usize, j: usize) -> bool {
        i == 0 || j == 0 || i + 1 == self.nx || j + 1 == self.ny
    }

    // ---- Statistics ----

    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f64>() / (self.data.len() as f64)
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(i < self.nx && j < self.ny, "cell ({i}, {j}) out of bounds");
        &self.data[i * self.ny + j]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(i < self.nx && j < self.ny, "cell ({i}, {j}) out of bounds");
        &mut self.data[i * self.ny + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_gradient_runs_hot_to_cold() {
        let g = Grid::reservoir_initial(5, 5);
        assert_eq!(g.row(1), &[150.0, 125.0, 125.0, 125.0, 50.0]);
        assert_eq!(g.row(2), &[150.0, 100.0, 100.0, 100.0, 50.0]);
        assert_eq!(g.row(3), &[150.0, 75.0, 75.0, 75.0, 50.0]);
    }

    #[test]
    fn columns_own_the_corners() {
        let g = Grid::reservoir_initial(4, 6);
        assert_eq!(g[(0, 0)], HOT_EDGE);
        assert_eq!(g[(0, 5)], COLD_EDGE);
        assert_eq!(g[(3, 0)], HOT_EDGE);
        assert_eq!(g[(3, 5)], COLD_EDGE);
        assert_eq!(g.row(0), &[150.0, 150.0, 150.0, 150.0, 150.0, 50.0]);
        assert_eq!(g.row(3), &[150.0, 50.0, 50.0, 50.0, 50.0, 50.0]);
    }

    #[test]
    fn non_square_layout_is_row_major() {
        let mut g = Grid::filled(2, 3, 0.0);
        g[(1, 2)] = 7.0;
        assert_eq!(g.as_slice()[5], 7.0);
        assert_eq!(g.get(1, 2), Some(7.0));
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.get(0, 3), None);
    }

    #[test]
    fn stats() {
        let g = Grid::reservoir_initial(5, 5);
        assert_eq!(g.min(), 50.0);
        assert_eq!(g.max(), 150.0);

        let flat = Grid::filled(3, 4, 2.5);
        assert_eq!(flat.mean(), 2.5);
    }

    #[test]
    fn boundary_detection() {
        let g = Grid::filled(4, 4, 0.0);
        assert!(g.is_boundary(0, 2));
        assert!(g.is_boundary(3, 1));
        assert!(g.is_boundary(2, 0));
        assert!(g.is_boundary(1, 3));
        assert!(!g.is_boundary(1, 2));
    }
}
