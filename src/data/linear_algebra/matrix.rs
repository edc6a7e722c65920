//! # Dense matrix
//!
//! A rectangular matrix that stores every value. It is the input of the mappings to compact
//! storage, and the output of the reverse mappings.
use std::fmt;
use std::fmt::Display;
use std::ops::{Index, IndexMut};

use itertools::Itertools;
use num_traits::Zero;

use crate::error::ShapeError;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
///
/// Indices start at `0`. Both dimensions are at least `1`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Arguments
    ///
    /// * `rows`: Values of the matrix, one `Vec` per row. All rows should have the same length.
    ///
    /// # Errors
    ///
    /// If there are no rows, if the rows are empty or if the rows don't all have the same length.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self, ShapeError> {
        let nr_columns = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(ShapeError::Empty),
        };

        if let Some((row, found)) = rows.iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, length)| length != nr_columns) {
            return Err(ShapeError::Ragged { row, expected: nr_columns, found });
        }

        let nr_rows = rows.len();
        Ok(Self { data: rows, nr_rows, nr_columns })
    }

    /// Create a matrix by evaluating a function at each position.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows, at least `1`.
    /// * `nr_columns`: Number of columns, at least `1`.
    /// * `f`: Called with `(row, column)` for every position, row by row.
    pub fn from_fn(
        nr_rows: usize,
        nr_columns: usize,
        mut f: impl FnMut(usize, usize) -> F,
    ) -> Self {
        debug_assert!(nr_rows > 0);
        debug_assert!(nr_columns > 0);

        let data = (0..nr_rows)
            .map(|i| (0..nr_columns).map(|j| f(i, j)).collect())
            .collect();

        Self { data, nr_rows, nr_columns }
    }

    /// Create a dense matrix of zero's of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self
    where
        F: Zero,
    {
        Self::from_fn(nr_rows, nr_columns, |_, _| F::zero())
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get(&self, i: usize, j: usize) -> &F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the dimensions as `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nr_rows, self.nr_columns)
    }

    /// Whether the number of rows equals the number of columns.
    pub fn is_square(&self) -> bool {
        self.nr_rows == self.nr_columns
    }

    /// Get the data of this matrix, one `Vec` per row.
    pub fn into_rows(self) -> Vec<Vec<F>> {
        self.data
    }
}

impl<F> Index<(usize, usize)> for DenseMatrix<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        self.get(i, j)
    }
}

impl<F> IndexMut<(usize, usize)> for DenseMatrix<F> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &mut self.data[i][j]
    }
}

impl<F: Display> Display for DenseMatrix<F> {
    /// One line per row, values right aligned per column.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = self.data.iter()
            .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let column_width = (0..self.nr_columns)
            .map(|j| rows.iter().map(|row| row[j].len()).max().unwrap_or(0))
            .collect::<Vec<_>>();

        for row in &rows {
            let line = row.iter()
                .zip(&column_width)
                .map(|(value, &width)| format!("{0:>width$}", value, width = width))
                .join(" ");
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}
