//! # Mapping functions
//!
//! One function per storage scheme to go from a matrix to its flat array, and one to go back.
//!
//! The forward functions pick the layout from the dimensions of the matrix. The reverse functions
//! for the square schemes read a single position from the flat array, returning zero for
//! positions that aren't stored.
use num_traits::Zero;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::storage::layout::{
    ColumnMajor,
    Diagonal,
    LowerTriangular,
    RowMajor,
    Symmetric,
    Tridiagonal,
    UpperTriangular,
};
use crate::data::storage::packed::{Packed, lookup};
use crate::error::MappingError;

/// Order of a matrix that a square storage scheme is applied to.
fn square_order<F>(matrix: &DenseMatrix<F>) -> Result<usize, MappingError> {
    if matrix.is_square() {
        Ok(matrix.nr_rows())
    } else {
        Err(MappingError::NotSquare { nr_rows: matrix.nr_rows(), nr_columns: matrix.nr_columns() })
    }
}

/// Lay the rows of a matrix out one after another.
pub fn row_major_mapping<F: Clone>(matrix: &DenseMatrix<F>) -> Packed<F, RowMajor> {
    Packed::gather(matrix, RowMajor::new(matrix.nr_rows(), matrix.nr_columns()))
}

/// Rebuild a matrix from its rows laid out one after another.
///
/// # Errors
///
/// If `data` doesn't have exactly `nr_rows * nr_columns` values.
pub fn reverse_row_major_mapping<F: Zero + Clone>(
    data: Vec<F>,
    nr_rows: usize,
    nr_columns: usize,
) -> Result<DenseMatrix<F>, MappingError> {
    Packed::from_data(data, RowMajor::new(nr_rows, nr_columns)).map(|packed| packed.unpack())
}

/// Lay the columns of a matrix out one after another.
pub fn column_major_mapping<F: Clone>(matrix: &DenseMatrix<F>) -> Packed<F, ColumnMajor> {
    Packed::gather(matrix, ColumnMajor::new(matrix.nr_rows(), matrix.nr_columns()))
}

/// Rebuild a matrix from its columns laid out one after another.
///
/// # Errors
///
/// If `data` doesn't have exactly `nr_rows * nr_columns` values.
pub fn reverse_column_major_mapping<F: Zero + Clone>(
    data: Vec<F>,
    nr_rows: usize,
    nr_columns: usize,
) -> Result<DenseMatrix<F>, MappingError> {
    Packed::from_data(data, ColumnMajor::new(nr_rows, nr_columns)).map(|packed| packed.unpack())
}

/// Keep only the main diagonal of a square matrix.
///
/// # Errors
///
/// If the matrix is not square.
pub fn diagonal_mapping<F: Clone>(matrix: &DenseMatrix<F>) -> Result<Packed<F, Diagonal>, MappingError> {
    let n = square_order(matrix)?;
    Ok(Packed::gather(matrix, Diagonal::new(n)))
}

/// Value at `(i, j)` of a diagonal matrix of order `n` stored as its diagonal.
pub fn reverse_diagonal_mapping<F: Zero + Clone>(data: &[F], n: usize, i: usize, j: usize) -> F {
    lookup(data, &Diagonal::new(n), i, j)
}

/// Keep the main diagonal and the diagonals directly above and below it.
///
/// # Errors
///
/// If the matrix is not square.
pub fn tridiagonal_mapping<F: Clone>(
    matrix: &DenseMatrix<F>,
) -> Result<Packed<F, Tridiagonal>, MappingError> {
    let n = square_order(matrix)?;
    Ok(Packed::gather(matrix, Tridiagonal::new(n)))
}

/// Value at `(i, j)` of a tridiagonal matrix of order `n` stored as its three bands.
pub fn reverse_tridiagonal_mapping<F: Zero + Clone>(data: &[F], n: usize, i: usize, j: usize) -> F {
    lookup(data, &Tridiagonal::new(n), i, j)
}

/// Keep the positions on and below the diagonal, row by row.
///
/// # Errors
///
/// If the matrix is not square.
pub fn lower_triangular_mapping<F: Clone>(
    matrix: &DenseMatrix<F>,
) -> Result<Packed<F, LowerTriangular>, MappingError> {
    let n = square_order(matrix)?;
    Ok(Packed::gather(matrix, LowerTriangular::new(n)))
}

/// Value at `(i, j)` of a lower triangular matrix of order `n` stored as its lower half.
pub fn reverse_lower_triangular_mapping<F: Zero + Clone>(data: &[F], n: usize, i: usize, j: usize) -> F {
    lookup(data, &LowerTriangular::new(n), i, j)
}

/// Keep the positions on and above the diagonal, row by row.
///
/// # Errors
///
/// If the matrix is not square.
pub fn upper_triangular_mapping<F: Clone>(
    matrix: &DenseMatrix<F>,
) -> Result<Packed<F, UpperTriangular>, MappingError> {
    let n = square_order(matrix)?;
    Ok(Packed::gather(matrix, UpperTriangular::new(n)))
}

/// Value at `(i, j)` of an upper triangular matrix of order `n` stored as its upper half.
pub fn reverse_upper_triangular_mapping<F: Zero + Clone>(data: &[F], n: usize, i: usize, j: usize) -> F {
    lookup(data, &UpperTriangular::new(n), i, j)
}

/// Keep the lower half of a symmetric matrix, row by row.
///
/// # Errors
///
/// If the matrix is not square.
pub fn symmetric_mapping<F: Clone>(matrix: &DenseMatrix<F>) -> Result<Packed<F, Symmetric>, MappingError> {
    let n = square_order(matrix)?;
    Ok(Packed::gather(matrix, Symmetric::new(n)))
}

/// Value at `(i, j)` of a symmetric matrix of order `n` stored as its lower half.
pub fn reverse_symmetric_mapping<F: Zero + Clone>(data: &[F], n: usize, i: usize, j: usize) -> F {
    lookup(data, &Symmetric::new(n), i, j)
}
