//! # Symmetric
//!
//! Only the lower half of a symmetric matrix is stored; the upper half mirrors it.
use std::fmt;

use crate::data::storage::layout::{Layout, LowerTriangular};

/// Stores the lower half like a `LowerTriangular` layout, and reads position `(i, j)` with `i < j`
/// from `(j, i)`.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Symmetric {
    lower: LowerTriangular,
}

impl Symmetric {
    /// Create a new instance for a square matrix of order `n`.
    pub fn new(n: usize) -> Self {
        Self { lower: LowerTriangular::new(n) }
    }
}

impl Layout for Symmetric {
    fn shape(&self) -> (usize, usize) {
        self.lower.shape()
    }

    fn len(&self) -> usize {
        self.lower.len()
    }

    fn forward(&self, i: usize, j: usize) -> Option<usize> {
        self.lower.forward(i, j)
    }

    fn backward(&self, k: usize) -> (usize, usize) {
        self.lower.backward(k)
    }

    fn source(&self, i: usize, j: usize) -> Option<(usize, usize)> {
        debug_assert!(i < self.shape().0 && j < self.shape().1);

        if i >= j { Some((i, j)) } else { Some((j, i)) }
    }
}

impl fmt::Display for Symmetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "symmetric of order {}", self.shape().0)
    }
}

#[cfg(test)]
mod test {
    use crate::data::storage::layout::{Layout, Symmetric};
    use crate::data::storage::layout::test::assert_bijection;

    #[test]
    fn mirrored() {
        let layout = Symmetric::new(4);
        assert_eq!(layout.len(), 10);
        assert_eq!(layout.forward(1, 3), None);
        assert_eq!(layout.source(1, 3), Some((3, 1)));
        assert_eq!(layout.source(3, 1), Some((3, 1)));
        assert_eq!(layout.source(2, 2), Some((2, 2)));
        assert!(!layout.is_stored(0, 1));
        assert_bijection(&layout);
    }
}
