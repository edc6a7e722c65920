//! # Row-major
//!
//! Rows are laid out one after another.
use std::fmt;

use crate::data::storage::layout::Layout;

/// Every position of a `nr_rows x nr_columns` matrix, row by row.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowMajor {
    nr_rows: usize,
    nr_columns: usize,
}

impl RowMajor {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows of the matrix.
    /// * `nr_columns`: Number of columns of the matrix, the length of each stored row.
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        debug_assert!(nr_rows > 0);
        debug_assert!(nr_columns > 0);

        Self { nr_rows, nr_columns }
    }
}

impl Layout for RowMajor {
    fn shape(&self) -> (usize, usize) {
        (self.nr_rows, self.nr_columns)
    }

    fn len(&self) -> usize {
        self.nr_rows * self.nr_columns
    }

    fn forward(&self, i: usize, j: usize) -> Option<usize> {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        Some(i * self.nr_columns + j)
    }

    fn backward(&self, k: usize) -> (usize, usize) {
        debug_assert!(k < self.len());

        (k / self.nr_columns, k % self.nr_columns)
    }
}

impl fmt::Display for RowMajor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-major {} x {}", self.nr_rows, self.nr_columns)
    }
}
