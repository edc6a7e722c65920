//! # Layouts
//!
//! Index maps between the positions of a matrix and the indices of a flat array.
use std::fmt::{Debug, Display};

pub use column_major::ColumnMajor;
pub use diagonal::Diagonal;
pub use row_major::RowMajor;
pub use symmetric::Symmetric;
pub use triangular::{Half, Lower, LowerTriangular, Triangular, Upper, UpperTriangular};
pub use tridiagonal::{Band, Tridiagonal};

mod column_major;
mod diagonal;
mod row_major;
mod symmetric;
mod triangular;
mod tridiagonal;

/// Basic layout behavior.
///
/// A layout is a bijection between the *stored* positions of a `nr_rows x nr_columns` matrix and
/// the range `0..self.len()`. Which positions are stored depends on the implementor; the other
/// positions either read back as zero, or take the value of another, stored position.
pub trait Layout: Display + Debug {
    /// Dimensions `(rows, columns)` of the matrices this layout describes.
    fn shape(&self) -> (usize, usize);

    /// Number of positions that are stored.
    fn len(&self) -> usize;

    /// Whether no positions are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index into the flat array at which a position is stored.
    ///
    /// # Arguments
    ///
    /// * `i`: Row index in range `0..self.shape().0`.
    /// * `j`: Column index in range `0..self.shape().1`.
    ///
    /// # Return value
    ///
    /// `None` if the position is not stored.
    fn forward(&self, i: usize, j: usize) -> Option<usize>;

    /// Position that is stored at an index of the flat array.
    ///
    /// # Arguments
    ///
    /// * `k`: Value in range `0..self.len()`.
    fn backward(&self, k: usize) -> (usize, usize);

    /// Stored position that a position takes its value from.
    ///
    /// # Arguments
    ///
    /// * `i`: Row index in range `0..self.shape().0`.
    /// * `j`: Column index in range `0..self.shape().1`.
    ///
    /// # Return value
    ///
    /// `(i, j)` itself if it is stored. `None` if the position is a structural zero.
    fn source(&self, i: usize, j: usize) -> Option<(usize, usize)> {
        self.forward(i, j).map(|_| (i, j))
    }

    /// Whether a position has its own index in the flat array.
    fn is_stored(&self, i: usize, j: usize) -> bool {
        self.forward(i, j).is_some()
    }

    /// Iterate over the stored positions, in the order in which they are stored.
    fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len()).map(move |k| self.backward(k))
    }
}

/// Number of values stored by the triangular layouts of a square matrix of order `n`.
pub(crate) const fn triangle_len(n: usize) -> usize {
    n * (n + 1) / 2
}
