//! # Error reporting
//!
//! Errors that can occur while building matrices or while moving values between a matrix and its
//! compact representation.
//!
//! Indexing outside of a matrix or array is not represented here; that is a programming error and
//! is caught by debug assertions.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// A `ShapeError` is created when the rows provided for a matrix don't describe a rectangle.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum ShapeError {
    /// There are no rows, or the rows contain no values.
    Empty,
    /// Not all rows have the same length.
    Ragged {
        /// Index of the first row that has a different length than the first row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "ShapeError: a matrix needs at least one row and one column"),
            ShapeError::Ragged { row, expected, found } => write!(
                f,
                "ShapeError: row {} has length {}, but the first row has length {}",
                row, found, expected,
            ),
        }
    }
}

impl Error for ShapeError {}

/// A `MappingError` is created when values can't be moved between a matrix and a flat array.
///
/// It is the highest error in the hierarchy of this crate.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum MappingError {
    /// The storage scheme only describes square matrices.
    NotSquare {
        /// Number of rows of the matrix that was provided.
        nr_rows: usize,
        /// Number of columns of the matrix that was provided.
        nr_columns: usize,
    },
    /// The matrix doesn't have the dimensions the layout was created for.
    ShapeMismatch {
        /// `(rows, columns)` of the layout.
        expected: (usize, usize),
        /// `(rows, columns)` of the matrix.
        found: (usize, usize),
    },
    /// A flat array doesn't hold exactly as many values as the layout stores.
    LengthMismatch {
        /// Number of values stored by the layout.
        expected: usize,
        /// Length of the array that was provided.
        found: usize,
    },
    /// The matrix itself could not be built.
    Shape(ShapeError),
}

impl Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MappingError::NotSquare { nr_rows, nr_columns } => write!(
                f,
                "MappingError: storage scheme requires a square matrix, got {} x {}",
                nr_rows, nr_columns,
            ),
            MappingError::ShapeMismatch { expected, found } => write!(
                f,
                "MappingError: layout is for a {} x {} matrix, got {} x {}",
                expected.0, expected.1, found.0, found.1,
            ),
            MappingError::LengthMismatch { expected, found } => write!(
                f,
                "MappingError: layout stores {} values, got an array of length {}",
                expected, found,
            ),
            MappingError::Shape(error) => error.fmt(f),
        }
    }
}

impl Error for MappingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MappingError::Shape(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ShapeError> for MappingError {
    fn from(error: ShapeError) -> Self {
        MappingError::Shape(error)
    }
}
