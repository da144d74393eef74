// ─────────────────────────────────────────────────────────────────────
// SCPN Linalg — Matrix
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dense `f64` matrix with value semantics.
//!
//! Every transforming operation clones the buffer, runs the in-place
//! primitives from `reduce` on the clone and moves the clone out.
//! `set` is the only mutator visible to callers.

use linalg_types::constants::approx_eq;
use linalg_types::error::{Axis, MatrixError, MatrixResult};
use ndarray::{concatenate, Array2, ArrayView2, Axis as NdAxis};
use serde::{Deserialize, Serialize};

use crate::reduce::{add_scaled_row_in_place, swap_rows_in_place};

/// Rectangular matrix of `f64` values.
///
/// Equality is tolerance-based (see [`linalg_types::constants::TOLERANCE`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    // invariant: both dimensions are > 0
    data: Array2<f64>,
}

fn check_shape(rows: usize, cols: usize) -> MatrixResult<()> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidShape { rows, cols });
    }
    Ok(())
}

impl Matrix {
    /// Build from explicit rows. Rejects empty input and jagged rows.
    pub fn new(rows: Vec<Vec<f64>>) -> MatrixResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        check_shape(n_rows, n_cols)?;
        if rows.iter().any(|row| row.len() != n_cols) {
            return Err(MatrixError::InvalidShape {
                rows: n_rows,
                cols: n_cols,
            });
        }

        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((n_rows, n_cols), flat).map_err(|_| {
            MatrixError::InvalidShape {
                rows: n_rows,
                cols: n_cols,
            }
        })?;
        Ok(Matrix { data })
    }

    pub fn zeros(rows: usize, cols: usize) -> MatrixResult<Self> {
        Self::filled(rows, cols, 0.0)
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> MatrixResult<Self> {
        check_shape(rows, cols)?;
        Ok(Matrix {
            data: Array2::from_elem((rows, cols), value),
        })
    }

    /// Ones on the main diagonal up to `min(rows, cols)`, zero elsewhere.
    pub fn identity(rows: usize, cols: usize) -> MatrixResult<Self> {
        let mut out = Self::zeros(rows, cols)?;
        for i in 0..rows.min(cols) {
            out.data[[i, i]] = 1.0;
        }
        Ok(out)
    }

    /// Wrap a buffer whose dimensions are already known to be non-zero.
    pub(crate) fn from_array_unchecked(data: Array2<f64>) -> Self {
        debug_assert!(data.nrows() > 0 && data.ncols() > 0);
        Matrix { data }
    }

    pub(crate) fn data_mut(&mut self) -> &mut Array2<f64> {
        &mut self.data
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn row_count(&self) -> usize {
        self.data.nrows()
    }

    pub fn column_count(&self) -> usize {
        self.data.ncols()
    }

    pub fn is_square(&self) -> bool {
        self.row_count() == self.column_count()
    }

    pub(crate) fn check_row(&self, index: usize) -> MatrixResult<()> {
        if index >= self.row_count() {
            return Err(MatrixError::IndexOutOfRange {
                axis: Axis::Row,
                index,
                bound: self.row_count(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_column(&self, index: usize) -> MatrixResult<()> {
        if index >= self.column_count() {
            return Err(MatrixError::IndexOutOfRange {
                axis: Axis::Column,
                index,
                bound: self.column_count(),
            });
        }
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> MatrixResult<f64> {
        self.check_row(row)?;
        self.check_column(col)?;
        Ok(self.data[[row, col]])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> MatrixResult<()> {
        self.check_row(row)?;
        self.check_column(col)?;
        self.data[[row, col]] = value;
        Ok(())
    }

    /// Independent copy of one row.
    pub fn row(&self, index: usize) -> MatrixResult<Vec<f64>> {
        self.check_row(index)?;
        Ok(self.data.row(index).to_vec())
    }

    /// Independent copy of one column. Used to read a solved column
    /// after [`Matrix::row_reduce`].
    pub fn column(&self, index: usize) -> MatrixResult<Vec<f64>> {
        self.check_column(index)?;
        Ok(self.data.column(index).to_vec())
    }

    pub fn to_2d_copy(&self) -> Vec<Vec<f64>> {
        self.data.outer_iter().map(|row| row.to_vec()).collect()
    }

    /// Owned copy of the buffer for interop with `ndarray` code.
    pub fn to_array(&self) -> Array2<f64> {
        self.data.clone()
    }

    pub(crate) fn as_array(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Same shape and every pair of entries within tolerance.
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        self.data.dim() == other.data.dim()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| approx_eq(a, b))
    }

    // ── Row-level algebra ────────────────────────────────────────────

    /// Elementwise sum.
    pub fn plus(&self, other: &Matrix) -> MatrixResult<Matrix> {
        if self.data.dim() != other.data.dim() {
            return Err(MatrixError::DimensionMismatch {
                expected: self.data.dim(),
                found: other.data.dim(),
            });
        }
        Ok(Matrix::from_array_unchecked(&self.data + &other.data))
    }

    /// `scalar * row`, as a new row.
    pub fn scalar_times_row(&self, scalar: f64, row: usize) -> MatrixResult<Vec<f64>> {
        self.check_row(row)?;
        Ok(self.data.row(row).iter().map(|&v| scalar * v).collect())
    }

    pub fn switch_rows(&self, row1: usize, row2: usize) -> MatrixResult<Matrix> {
        self.check_row(row1)?;
        self.check_row(row2)?;
        let mut out = self.clone();
        swap_rows_in_place(out.data_mut(), row1, row2);
        Ok(out)
    }

    /// New matrix where `dest_row := dest_row + scalar * source_row`,
    /// computed from the original values of both rows.
    pub fn linear_comb_rows(
        &self,
        scalar: f64,
        source_row: usize,
        dest_row: usize,
    ) -> MatrixResult<Matrix> {
        self.check_row(source_row)?;
        self.check_row(dest_row)?;
        let mut out = self.clone();
        add_scaled_row_in_place(out.data_mut(), scalar, source_row, dest_row);
        Ok(out)
    }

    // ── Augmentation ─────────────────────────────────────────────────

    /// Append `other`'s columns to the right of this matrix.
    pub fn augment(&self, other: &Matrix) -> MatrixResult<Matrix> {
        if self.row_count() != other.row_count() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.row_count(), other.column_count()),
                found: other.data.dim(),
            });
        }
        let data = concatenate(NdAxis(1), &[self.data.view(), other.data.view()]).map_err(
            |_| MatrixError::DimensionMismatch {
                expected: (self.row_count(), other.column_count()),
                found: other.data.dim(),
            },
        )?;
        Ok(Matrix::from_array_unchecked(data))
    }

    /// Augment with the identity of this matrix's row count.
    pub fn augment_identity(&self) -> Matrix {
        let n = self.row_count();
        let mut data = Array2::<f64>::zeros((n, self.column_count() + n));
        data.slice_mut(ndarray::s![.., ..self.column_count()])
            .assign(&self.data);
        for i in 0..n {
            data[[i, self.column_count() + i]] = 1.0;
        }
        Matrix::from_array_unchecked(data)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> MatrixResult<Self> {
        Matrix::new(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_2d_copy()
    }
}

impl TryFrom<Array2<f64>> for Matrix {
    type Error = MatrixError;

    fn try_from(data: Array2<f64>) -> MatrixResult<Self> {
        check_shape(data.nrows(), data.ncols())?;
        Ok(Matrix { data })
    }
}

impl From<Matrix> for Array2<f64> {
    fn from(matrix: Matrix) -> Self {
        matrix.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_new_rejects_degenerate() {
        assert!(matches!(
            Matrix::new(vec![]),
            Err(MatrixError::InvalidShape { rows: 0, cols: 0 })
        ));
        assert!(matches!(
            Matrix::new(vec![vec![], vec![]]),
            Err(MatrixError::InvalidShape { rows: 2, cols: 0 })
        ));
        assert!(matches!(
            Matrix::zeros(3, 0),
            Err(MatrixError::InvalidShape { .. })
        ));
        assert!(matches!(
            Matrix::filled(0, 3, 1.0),
            Err(MatrixError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_new_rejects_jagged() {
        let result = Matrix::new(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(MatrixError::InvalidShape { .. })));
    }

    #[test]
    fn test_filled_and_shape() {
        let a = Matrix::filled(2, 3, 4.5).unwrap();
        assert_eq!(a.row_count(), 2);
        assert_eq!(a.column_count(), 3);
        assert!(!a.is_square());
        assert!(a.to_2d_copy().iter().flatten().all(|&v| v == 4.5));
    }

    #[test]
    fn test_identity_non_square() {
        let wide = Matrix::identity(2, 4).unwrap();
        assert_eq!(wide, m(&[&[1.0, 0.0, 0.0, 0.0], &[0.0, 1.0, 0.0, 0.0]]));
        let tall = Matrix::identity(3, 2).unwrap();
        assert_eq!(tall, m(&[&[1.0, 0.0], &[0.0, 1.0], &[0.0, 0.0]]));
    }

    #[test]
    fn test_get_set_bounds() {
        let mut a = Matrix::zeros(2, 2).unwrap();
        a.set(1, 0, 7.0).unwrap();
        assert_eq!(a.get(1, 0).unwrap(), 7.0);
        assert!(matches!(
            a.get(2, 0),
            Err(MatrixError::IndexOutOfRange {
                axis: Axis::Row,
                index: 2,
                bound: 2
            })
        ));
        assert!(matches!(
            a.set(0, 5, 1.0),
            Err(MatrixError::IndexOutOfRange {
                axis: Axis::Column,
                ..
            })
        ));
        assert_eq!(a.get(0, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_row_and_column_are_copies() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let mut row = a.row(1).unwrap();
        row[0] = 100.0;
        let mut col = a.column(1).unwrap();
        col[0] = -100.0;
        let mut copy = a.to_2d_copy();
        copy[0][0] = 42.0;
        assert_eq!(a, m(&[&[1.0, 2.0], &[3.0, 4.0]]));
        assert_eq!(a.column(1).unwrap(), vec![2.0, 4.0]);
        assert!(a.row(2).is_err());
        assert!(a.column(2).is_err());
    }

    #[test]
    fn test_equality_within_tolerance() {
        let a = m(&[&[1.0, 2.0]]);
        assert_eq!(a, m(&[&[1.0 + 5e-9, 2.0 - 5e-9]]));
        assert_ne!(a, m(&[&[1.0 + 1e-6, 2.0]]));
        assert_ne!(a, m(&[&[1.0], &[2.0]]));
    }

    #[test]
    fn test_plus() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[0.5, -2.0], &[1.0, 0.0]]);
        let sum = a.plus(&b).unwrap();
        assert_eq!(sum, m(&[&[1.5, 0.0], &[4.0, 4.0]]));
        assert_eq!(sum, b.plus(&a).unwrap());
        assert_eq!(a, m(&[&[1.0, 2.0], &[3.0, 4.0]]));

        let c = Matrix::filled(2, 3, 9.0).unwrap();
        let a_before = a.to_2d_copy();
        let c_before = c.to_2d_copy();
        assert!(matches!(
            a.plus(&c),
            Err(MatrixError::DimensionMismatch {
                expected: (2, 2),
                found: (2, 3)
            })
        ));
        assert_eq!(a.to_2d_copy(), a_before);
        assert_eq!(c.to_2d_copy(), c_before);
    }

    #[test]
    fn test_scalar_times_row() {
        let a = m(&[&[0.0, -1.0], &[4.0, 0.3]]);
        let row = a.scalar_times_row(-1.0, 0).unwrap();
        assert_eq!(row[1], 1.0);
        assert!(row[0].abs() < 1e-12);
        assert!(matches!(
            a.scalar_times_row(2.0, 2),
            Err(MatrixError::IndexOutOfRange { .. })
        ));
        assert_eq!(a.get(0, 1).unwrap(), -1.0);
    }

    #[test]
    fn test_switch_rows() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        let b = a.switch_rows(0, 2).unwrap();
        assert_eq!(b, m(&[&[5.0, 6.0], &[3.0, 4.0], &[1.0, 2.0]]));
        assert_eq!(b.switch_rows(0, 2).unwrap(), a);
        assert_eq!(a.switch_rows(1, 1).unwrap(), a);
        assert!(a.switch_rows(0, 3).is_err());
    }

    #[test]
    fn test_linear_comb_rows() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = a.linear_comb_rows(-3.0, 0, 1).unwrap();
        assert_eq!(b, m(&[&[1.0, 2.0], &[0.0, -2.0]]));
        assert_eq!(a, m(&[&[1.0, 2.0], &[3.0, 4.0]]));
    }

    #[test]
    fn test_linear_comb_same_row_uses_snapshot() {
        // dest := dest + 2 * dest  ==  3 * dest
        let a = m(&[&[1.0, 2.0, 3.0]]);
        let b = a.linear_comb_rows(2.0, 0, 0).unwrap();
        assert_eq!(b, m(&[&[3.0, 6.0, 9.0]]));
        assert!(a.linear_comb_rows(1.0, 0, 1).is_err());
    }

    #[test]
    fn test_augment_zero_with_identity() {
        let zeros = Matrix::zeros(2, 3).unwrap();
        let eye = Matrix::identity(2, 2).unwrap();
        let aug = zeros.augment(&eye).unwrap();
        assert_eq!(aug.row_count(), 2);
        assert_eq!(aug.column_count(), 5);
        assert_eq!(aug.column(3).unwrap(), vec![1.0, 0.0]);
        assert_eq!(aug.column(4).unwrap(), vec![0.0, 1.0]);
        assert_eq!(aug.column(0).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_augment_row_mismatch() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = Matrix::filled(3, 2, -1.0).unwrap();
        let a_before = a.to_2d_copy();
        let b_before = b.to_2d_copy();
        assert!(matches!(
            a.augment(&b),
            Err(MatrixError::DimensionMismatch { .. })
        ));
        assert!(b.augment(&a).is_err());
        assert_eq!(a.to_2d_copy(), a_before);
        assert_eq!(b.to_2d_copy(), b_before);
    }

    #[test]
    fn test_augment_identity_matches_explicit() {
        let a = m(&[&[2.0, 1.0, 0.0], &[1.0, 3.0, 1.0]]);
        let explicit = a.augment(&Matrix::identity(2, 2).unwrap()).unwrap();
        assert_eq!(a.augment_identity(), explicit);
    }

    #[test]
    fn test_serde_roundtrip_and_validation() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "[[1.0,2.0],[3.0,4.0]]");
        let back: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);

        assert!(serde_json::from_str::<Matrix>("[]").is_err());
        assert!(serde_json::from_str::<Matrix>("[[1.0],[2.0, 3.0]]").is_err());
    }

    #[test]
    fn test_array_conversions() {
        let arr = ndarray::array![[1.0, 2.0], [3.0, 4.0]];
        let a = Matrix::try_from(arr.clone()).unwrap();
        assert_eq!(a.as_array(), arr.view());
        let mut copy = a.to_array();
        copy[[0, 0]] = 100.0;
        assert_eq!(a.get(0, 0).unwrap(), 1.0);
        let back: Array2<f64> = a.into();
        assert_eq!(back, arr);
        assert!(Matrix::try_from(Array2::<f64>::zeros((0, 3))).is_err());
    }
}
