use relp_num::{R64, RB};
use relp_num::{Rational64, RationalBig};

use compact_storage::data::linear_algebra::matrix::DenseMatrix;
use compact_storage::data::storage::layout::{Layout, LowerTriangular, Symmetric, Tridiagonal, UpperTriangular};
use compact_storage::data::storage::mapping::{
    lower_triangular_mapping,
    reverse_symmetric_mapping,
    symmetric_mapping,
    tridiagonal_mapping,
    upper_triangular_mapping,
};
use compact_storage::data::storage::packed::Packed;
use compact_storage::error::MappingError;

/// Symmetric matrix with value `1 / (i + j + 1)` at `(i, j)`, at most of order 4.
fn hilbert(n: usize) -> DenseMatrix<Rational64> {
    debug_assert!(n <= 4);

    let values = [R64!(1), R64!(1, 2), R64!(1, 3), R64!(1, 4), R64!(1, 5), R64!(1, 6), R64!(1, 7)];
    DenseMatrix::from_fn(n, n, |i, j| values[i + j].clone())
}

#[test]
fn symmetric_rational() {
    let matrix = hilbert(4);
    let packed = symmetric_mapping(&matrix).unwrap();
    assert_eq!(packed.len(), 10);
    assert_eq!(packed.data()[4], R64!(1, 4));
    assert!(packed.is_lossless_for(&matrix));
    assert_eq!(packed.unpack(), matrix);

    for (i, j) in [(0, 3), (3, 0), (2, 1)] {
        assert_eq!(reverse_symmetric_mapping(packed.data(), 4, i, j), matrix[(i, j)]);
    }
}

#[test]
fn triangular_halves_rational() {
    let matrix = hilbert(3);

    let lower = lower_triangular_mapping(&matrix).unwrap().unpack();
    let upper = upper_triangular_mapping(&matrix).unwrap().unpack();
    assert_eq!(lower[(0, 2)], R64!(0));
    assert_eq!(upper[(2, 0)], R64!(0));
    assert_eq!(lower[(2, 0)], upper[(0, 2)]);

    // Off the diagonal, exactly one of the halves keeps the value
    for i in 0..3 {
        for j in 0..3 {
            if i == j {
                assert_eq!(lower[(i, j)], matrix[(i, j)]);
                assert_eq!(upper[(i, j)], matrix[(i, j)]);
            } else {
                let (kept, dropped) = if i > j { (&lower, &upper) } else { (&upper, &lower) };
                assert_eq!(kept[(i, j)], matrix[(i, j)]);
                assert_eq!(dropped[(i, j)], R64!(0));
            }
        }
    }
}

#[test]
fn tridiagonal_big_rational() {
    let band = [RB!(1, 2), RB!(-3), RB!(5, 7)];
    let matrix = DenseMatrix::from_fn(5, 5, |i, j| match j as i64 - i as i64 {
        -1 => band[0].clone(),
        0 => band[1].clone(),
        1 => band[2].clone(),
        _ => RB!(0),
    });
    let packed = tridiagonal_mapping(&matrix).unwrap();
    assert_eq!(packed.len(), 3 * 5 - 2);
    assert!(packed.is_lossless_for(&matrix));
    assert_eq!(packed.unpack(), matrix);

    let rebuilt: Packed<RationalBig, _> = Packed::from_data(packed.data().to_vec(), Tridiagonal::new(5)).unwrap();
    assert_eq!(rebuilt.get(4, 3), RB!(1, 2));
    assert_eq!(rebuilt.get(1, 2), RB!(5, 7));
    assert_eq!(rebuilt.get(0, 4), RB!(0));
}

#[test]
fn dense_band_is_lossy() {
    let matrix = DenseMatrix::from_fn(4, 4, |i, j| (i * 4 + j + 1) as i64);
    let packed = tridiagonal_mapping(&matrix).unwrap();
    assert!(!packed.is_lossless_for(&matrix));
    assert_ne!(packed.unpack(), matrix);
}

#[test]
fn positions_in_storage_order() {
    let layout = UpperTriangular::new(3);
    assert_eq!(
        layout.positions().collect::<Vec<_>>(),
        vec![(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 2)],
    );

    let layout = LowerTriangular::new(3);
    assert_eq!(
        layout.positions().collect::<Vec<_>>(),
        vec![(0, 0), (1, 0), (1, 1), (2, 0), (2, 1), (2, 2)],
    );
}

#[test]
fn wrong_inputs() {
    let matrix = DenseMatrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
    assert_eq!(
        symmetric_mapping(&matrix),
        Err(MappingError::NotSquare { nr_rows: 3, nr_columns: 2 }),
    );
    assert_eq!(
        Packed::pack(&matrix, Symmetric::new(2)),
        Err(MappingError::ShapeMismatch { expected: (2, 2), found: (3, 2) }),
    );
    assert_eq!(
        Packed::<i32, _>::from_data(vec![0; 5], LowerTriangular::new(3)),
        Err(MappingError::LengthMismatch { expected: 6, found: 5 }),
    );
}
