//! # Triangular
//!
//! One half of a square matrix, including the diagonal, stored row by row.
//!
//! The lower and upper variants share all logic except for which positions of a row are stored,
//! which is captured by the `Half` marker types.
use std::fmt;
use std::marker::PhantomData;

use crate::data::storage::layout::{Layout, triangle_len};

/// Which half of the matrix is stored.
pub trait Half: Copy + fmt::Debug {
    /// Human readable name of the half.
    const NAME: &'static str;

    /// Whether position `(i, j)` lies in this half (including the diagonal).
    fn contains(i: usize, j: usize) -> bool;
    /// Column of the first stored value in row `i`.
    fn first_column(i: usize) -> usize;
    /// Number of stored values in row `i` of a matrix of order `n`.
    fn row_len(i: usize, n: usize) -> usize;
    /// Index of the first stored value of row `i` of a matrix of order `n`.
    fn row_start(i: usize, n: usize) -> usize;
}

/// Positions on or below the diagonal, `i >= j`.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Lower;

/// Positions on or above the diagonal, `i <= j`.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Upper;

impl Half for Lower {
    const NAME: &'static str = "lower";

    fn contains(i: usize, j: usize) -> bool {
        i >= j
    }

    fn first_column(_i: usize) -> usize {
        0
    }

    fn row_len(i: usize, _n: usize) -> usize {
        i + 1
    }

    fn row_start(i: usize, _n: usize) -> usize {
        triangle_len(i)
    }
}

impl Half for Upper {
    const NAME: &'static str = "upper";

    fn contains(i: usize, j: usize) -> bool {
        i <= j
    }

    fn first_column(i: usize) -> usize {
        i
    }

    fn row_len(i: usize, n: usize) -> usize {
        n - i
    }

    fn row_start(i: usize, n: usize) -> usize {
        // Always even: either `i` or `2n - i + 1` is.
        i * (2 * n - i + 1) / 2
    }
}

/// Stores one half of a square matrix of order `n` in `n(n + 1) / 2` values.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Triangular<H> {
    n: usize,
    half: PhantomData<H>,
}

/// Stores position `(i, j)` with `i >= j` at `i(i + 1) / 2 + j`.
pub type LowerTriangular = Triangular<Lower>;
/// Stores position `(i, j)` with `i <= j` at `i(2n - i + 1) / 2 + j - i`.
pub type UpperTriangular = Triangular<Upper>;

impl<H: Half> Triangular<H> {
    /// Create a new instance for a square matrix of order `n`.
    pub fn new(n: usize) -> Self {
        debug_assert!(n > 0);

        Self { n, half: PhantomData }
    }
}

impl<H: Half> Layout for Triangular<H> {
    fn shape(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    fn len(&self) -> usize {
        triangle_len(self.n)
    }

    fn forward(&self, i: usize, j: usize) -> Option<usize> {
        debug_assert!(i < self.n && j < self.n);

        if H::contains(i, j) {
            Some(H::row_start(i, self.n) + j - H::first_column(i))
        } else {
            None
        }
    }

    fn backward(&self, k: usize) -> (usize, usize) {
        debug_assert!(k < self.len());

        // Largest row whose first index is not beyond `k`
        let (mut low, mut high) = (0, self.n);
        while high - low > 1 {
            let middle = (low + high) / 2;
            if H::row_start(middle, self.n) <= k {
                low = middle;
            } else {
                high = middle;
            }
        }
        let i = low;
        debug_assert!(k - H::row_start(i, self.n) < H::row_len(i, self.n));

        (i, H::first_column(i) + k - H::row_start(i, self.n))
    }
}

impl<H: Half> fmt::Display for Triangular<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} triangular of order {}", H::NAME, self.n)
    }
}

#[cfg(test)]
mod test {
    use crate::data::storage::layout::{Layout, LowerTriangular, UpperTriangular};
    use crate::data::storage::layout::test::assert_bijection;

    #[test]
    fn lower() {
        let layout = LowerTriangular::new(4);
        assert_eq!(layout.len(), 10);
        assert_eq!(layout.forward(0, 0), Some(0));
        assert_eq!(layout.forward(2, 1), Some(4));
        assert_eq!(layout.forward(3, 3), Some(9));
        assert_eq!(layout.forward(1, 2), None);
        assert_eq!(layout.backward(6), (3, 0));
        assert_eq!(layout.source(0, 3), None);
        assert_bijection(&layout);
    }

    #[test]
    fn upper() {
        let layout = UpperTriangular::new(4);
        assert_eq!(layout.len(), 10);
        assert_eq!(layout.forward(0, 3), Some(3));
        assert_eq!(layout.forward(1, 1), Some(4));
        assert_eq!(layout.forward(2, 3), Some(8));
        assert_eq!(layout.forward(3, 3), Some(9));
        assert_eq!(layout.forward(2, 1), None);
        assert_eq!(layout.backward(7), (2, 2));
        assert_bijection(&layout);
    }

    #[test]
    fn various_orders() {
        for n in 1..8 {
            assert_bijection(&LowerTriangular::new(n));
            assert_bijection(&UpperTriangular::new(n));
        }
    }

    #[test]
    fn display() {
        assert_eq!(LowerTriangular::new(3).to_string(), "lower triangular of order 3");
        assert_eq!(UpperTriangular::new(2).to_string(), "upper triangular of order 2");
    }
}
