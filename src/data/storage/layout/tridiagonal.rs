//! # Tridiagonal
//!
//! The main diagonal and the diagonals directly above and below it, stored band after band.
use std::fmt;

use cumsum::cumsum_array_owned;
use enum_map::{Enum, EnumMap, enum_map};

use crate::data::storage::layout::Layout;

/// One of the three diagonals stored by a `Tridiagonal` layout.
///
/// The order of the variants is the order in which the bands are stored.
#[derive(Enum, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Band {
    /// Positions `(i, i)`.
    Main,
    /// Positions `(i, i + 1)`.
    Upper,
    /// Positions `(i + 1, i)`.
    Lower,
}

/// Stores the three bands of a square matrix of order `n` in `3n - 2` values.
///
/// The main diagonal takes indices `0..n`, the upper diagonal `n..2n - 1` and the lower diagonal
/// `2n - 1..3n - 2`. Within a band, values are ordered by row.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Tridiagonal {
    n: usize,
    /// Index of the first value of each band.
    band_start: EnumMap<Band, usize>,
    len: usize,
}

impl Tridiagonal {
    /// Create a new instance for a square matrix of order `n`.
    pub fn new(n: usize) -> Self {
        debug_assert!(n > 0);

        let cumulative = cumsum_array_owned([n, n - 1, n - 1]);
        let band_start = enum_map! {
            Band::Main  => 0,
            Band::Upper => cumulative[0],
            Band::Lower => cumulative[1],
        };

        Self { n, band_start, len: cumulative[2] }
    }

    /// Band a position lies on.
    ///
    /// # Return value
    ///
    /// `None` if the position is outside of the three bands.
    pub fn band(&self, i: usize, j: usize) -> Option<Band> {
        debug_assert!(i < self.n && j < self.n);

        if i == j {
            Some(Band::Main)
        } else if j == i + 1 {
            Some(Band::Upper)
        } else if i == j + 1 {
            Some(Band::Lower)
        } else {
            None
        }
    }

    /// Index of the first value of a band.
    pub fn band_start(&self, band: Band) -> usize {
        self.band_start[band]
    }
}

impl Layout for Tridiagonal {
    fn shape(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn forward(&self, i: usize, j: usize) -> Option<usize> {
        self.band(i, j).map(|band| match band {
            Band::Main | Band::Upper => self.band_start[band] + i,
            Band::Lower => self.band_start[band] + j,
        })
    }

    fn backward(&self, k: usize) -> (usize, usize) {
        debug_assert!(k < self.len);

        if k < self.band_start[Band::Upper] {
            (k, k)
        } else if k < self.band_start[Band::Lower] {
            let i = k - self.band_start[Band::Upper];
            (i, i + 1)
        } else {
            let j = k - self.band_start[Band::Lower];
            (j + 1, j)
        }
    }
}

impl fmt::Display for Tridiagonal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tridiagonal of order {}", self.n)
    }
}
