//! # Packed storage
//!
//! A flat array holding exactly the values a layout stores.
use std::fmt;
use std::fmt::Display;

use itertools::{Itertools, iproduct};
use num_traits::Zero;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::storage::layout::Layout;
use crate::error::MappingError;

/// Values of a matrix in the compact representation described by a `Layout`.
///
/// The length of `data` always equals `layout.len()`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Packed<F, L> {
    data: Vec<F>,
    layout: L,
}

impl<F, L: Layout> Packed<F, L> {
    /// Copy the stored positions of a matrix into a flat array.
    ///
    /// Values at positions that the layout doesn't store are ignored. Use `is_lossless_for` to
    /// verify that nothing is lost.
    ///
    /// # Arguments
    ///
    /// * `matrix`: Matrix with the dimensions of the layout.
    /// * `layout`: Determines which positions are stored and where.
    ///
    /// # Errors
    ///
    /// If the dimensions of the matrix don't match those of the layout.
    pub fn pack(matrix: &DenseMatrix<F>, layout: L) -> Result<Self, MappingError>
    where
        F: Clone,
    {
        if matrix.shape() != layout.shape() {
            return Err(MappingError::ShapeMismatch {
                expected: layout.shape(),
                found: matrix.shape(),
            });
        }

        Ok(Self::gather(matrix, layout))
    }

    /// Copy the stored positions of a matrix known to have the right dimensions.
    pub(crate) fn gather(matrix: &DenseMatrix<F>, layout: L) -> Self
    where
        F: Clone,
    {
        debug_assert_eq!(matrix.shape(), layout.shape());

        let data = layout.positions()
            .map(|(i, j)| matrix[(i, j)].clone())
            .collect::<Vec<_>>();
        log::debug!(
            "Packed {} of {} values using {}",
            data.len(), matrix.nr_rows() * matrix.nr_columns(), layout,
        );

        Self { data, layout }
    }

    /// Wrap an existing flat array.
    ///
    /// # Errors
    ///
    /// If the array doesn't have exactly `layout.len()` values.
    pub fn from_data(data: Vec<F>, layout: L) -> Result<Self, MappingError> {
        if data.len() != layout.len() {
            return Err(MappingError::LengthMismatch { expected: layout.len(), found: data.len() });
        }

        Ok(Self { data, layout })
    }

    /// Value at a position of the represented matrix.
    ///
    /// # Return value
    ///
    /// The stored value, the value of the mirrored position for layouts that mirror, or zero for
    /// positions that are not stored.
    pub fn get(&self, i: usize, j: usize) -> F
    where
        F: Zero + Clone,
    {
        lookup(&self.data, &self.layout, i, j)
    }

    /// Rebuild the full matrix.
    pub fn unpack(&self) -> DenseMatrix<F>
    where
        F: Zero + Clone,
    {
        let (nr_rows, nr_columns) = self.layout.shape();
        log::trace!("Unpacking {} values using {}", self.data.len(), self.layout);

        DenseMatrix::from_fn(nr_rows, nr_columns, |i, j| self.get(i, j))
    }

    /// Whether packing and then unpacking a matrix gives back the same matrix.
    ///
    /// That is the case when every position that is not stored is zero, or equal to the position
    /// it mirrors.
    pub fn is_lossless_for(&self, matrix: &DenseMatrix<F>) -> bool
    where
        F: Zero + PartialEq,
    {
        if matrix.shape() != self.layout.shape() {
            return false;
        }

        let (nr_rows, nr_columns) = self.layout.shape();
        iproduct!(0..nr_rows, 0..nr_columns)
            .filter(|&(i, j)| !self.layout.is_stored(i, j))
            .all(|(i, j)| match self.layout.source(i, j) {
                None => matrix[(i, j)].is_zero(),
                Some(source) => matrix[(i, j)] == matrix[source],
            })
    }

    /// The flat array.
    pub fn data(&self) -> &[F] {
        &self.data
    }

    /// Take the flat array out.
    pub fn into_data(self) -> Vec<F> {
        self.data
    }

    /// The layout describing how the values are stored.
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Number of values stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no values are stored.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Read a position of the represented matrix directly from a flat array.
pub(crate) fn lookup<F: Zero + Clone>(data: &[F], layout: &impl Layout, i: usize, j: usize) -> F {
    debug_assert_eq!(data.len(), layout.len());

    layout.source(i, j)
        .and_then(|(i, j)| layout.forward(i, j))
        .map_or_else(F::zero, |k| data[k].clone())
}

impl<F: Display, L> Display for Packed<F, L> {
    /// The flat array on a single line, values separated by a space.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data.iter().join(" "))
    }
}
