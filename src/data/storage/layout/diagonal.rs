//! # Diagonal
//!
//! Only the main diagonal of a square matrix.
use std::fmt;

use crate::data::storage::layout::Layout;

/// Stores position `(i, i)` at index `i`.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Diagonal(usize);

impl Diagonal {
    /// Create a new instance for a square matrix of order `n`.
    pub fn new(n: usize) -> Self {
        debug_assert!(n > 0);

        Self(n)
    }
}

impl Layout for Diagonal {
    fn shape(&self) -> (usize, usize) {
        (self.0, self.0)
    }

    fn len(&self) -> usize {
        self.0
    }

    fn forward(&self, i: usize, j: usize) -> Option<usize> {
        debug_assert!(i < self.0 && j < self.0);

        if i == j { Some(i) } else { None }
    }

    fn backward(&self, k: usize) -> (usize, usize) {
        debug_assert!(k < self.0);

        (k, k)
    }
}

impl fmt::Display for Diagonal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "diagonal of order {}", self.0)
    }
}

#[cfg(test)]
mod test {
    use crate::data::storage::layout::{Diagonal, Layout};
    use crate::data::storage::layout::test::assert_bijection;

    #[test]
    fn diagonal() {
        let layout = Diagonal::new(3);
        assert_eq!(layout.len(), 3);
        assert_eq!(layout.forward(2, 2), Some(2));
        assert_eq!(layout.forward(0, 1), None);
        assert_eq!(layout.source(1, 0), None);
        assert_bijection(&layout);
    }
}
