// ─────────────────────────────────────────────────────────────────────
// SCPN Linalg — Reduce
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gauss-Jordan row reduction and inversion.
//!
//! Pivots are chosen as the first entry that is not basically zero,
//! scanning columns left to right and rows top to bottom. There is no
//! partial pivoting, so ill-conditioned inputs lose more precision than
//! with a largest-magnitude pivot.

use linalg_types::constants::{approx_eq, basically_zero};
use linalg_types::error::{MatrixError, MatrixResult};
use ndarray::{s, Array2};
use tracing::{debug, trace};

use crate::matrix::Matrix;

// ── In-place primitives ──────────────────────────────────────────────
// These only ever run on a private clone owned by the calling operation.

pub(crate) fn swap_rows_in_place(data: &mut Array2<f64>, row1: usize, row2: usize) {
    if row1 == row2 {
        return;
    }
    for col in 0..data.ncols() {
        data.swap([row1, col], [row2, col]);
    }
}

/// `dest := dest + scalar * source`, using the values `source` had before
/// the update. Distinct rows are borrowed together; nothing is allocated.
pub(crate) fn add_scaled_row_in_place(
    data: &mut Array2<f64>,
    scalar: f64,
    source: usize,
    dest: usize,
) {
    if source == dest {
        data.row_mut(dest).mapv_inplace(|v| v + scalar * v);
        return;
    }
    let (src, mut dst) = data.multi_slice_mut((s![source, ..], s![dest, ..]));
    dst.scaled_add(scalar, &src);
}

fn divide_row_in_place(data: &mut Array2<f64>, row: usize, divisor: f64) {
    data.row_mut(row).mapv_inplace(|v| v / divisor);
}

/// First entry at or after `(pivot_row, pivot_col)` that is not basically
/// zero, scanning column by column.
fn find_pivot(data: &Array2<f64>, pivot_row: usize, pivot_col: usize) -> Option<(usize, usize)> {
    let (n_rows, n_cols) = data.dim();
    for col in pivot_col..n_cols {
        for row in pivot_row..n_rows {
            if !basically_zero(data[[row, col]]) {
                return Some((row, col));
            }
        }
    }
    None
}

/// Zero `data[row][pivot_col]` by adding a multiple of the pivot row.
fn eliminate_in_place(data: &mut Array2<f64>, pivot_row: usize, pivot_col: usize, row: usize) {
    let elem = data[[row, pivot_col]];
    if basically_zero(elem) {
        return;
    }
    let pivot = data[[pivot_row, pivot_col]];
    add_scaled_row_in_place(data, -elem / pivot, pivot_row, row);
    data[[row, pivot_col]] = 0.0;
}

fn row_reduce_in_place(data: &mut Array2<f64>) {
    let n_rows = data.nrows();
    let mut pivot_col = 0;

    for pivot_row in 0..n_rows {
        let Some((row, col)) = find_pivot(data, pivot_row, pivot_col) else {
            debug!(
                rank = pivot_row,
                rows = n_rows,
                "no further pivots, leaving trailing zero rows"
            );
            return;
        };
        trace!(pivot_row, pivot_col = col, source_row = row, "pivot found");
        swap_rows_in_place(data, pivot_row, row);
        pivot_col = col;

        for other in 0..n_rows {
            if other != pivot_row {
                eliminate_in_place(data, pivot_row, pivot_col, other);
            }
        }

        let pivot = data[[pivot_row, pivot_col]];
        divide_row_in_place(data, pivot_row, pivot);
        pivot_col += 1;
    }
}

// ── Public operations ────────────────────────────────────────────────

impl Matrix {
    /// Reduced row-echelon form of a copy of this matrix.
    ///
    /// Rank-deficient inputs yield trailing all-zero rows, never an error.
    pub fn row_reduce(&self) -> Matrix {
        let mut out = self.clone();
        row_reduce_in_place(out.data_mut());
        out
    }

    /// `true` if the leading `n x n` block is the identity within tolerance.
    pub(crate) fn leading_block_is_identity(&self, n: usize) -> bool {
        if n > self.row_count() || n > self.column_count() {
            return false;
        }
        let block = self.as_array();
        (0..n).all(|i| {
            (0..n).all(|j| {
                let expected = if i == j { 1.0 } else { 0.0 };
                approx_eq(block[[i, j]], expected)
            })
        })
    }

    /// The row-reduced tableau `[A | I] -> [R | X]` without any
    /// singularity check. `X` is only the inverse when `R` is the identity.
    pub fn inversion_tableau(&self) -> Matrix {
        self.augment_identity().row_reduce()
    }

    /// Inverse of a square matrix via Gauss-Jordan elimination on `[A | I]`.
    ///
    /// Fails with [`MatrixError::NotInvertible`] if the matrix is not square
    /// or the reduced left block is not the identity.
    pub fn invert(&self) -> MatrixResult<Matrix> {
        if !self.is_square() {
            debug!(
                rows = self.row_count(),
                cols = self.column_count(),
                "non-square matrix has no inverse"
            );
            return Err(MatrixError::NotInvertible);
        }
        let n = self.row_count();
        let tableau = self.inversion_tableau();
        if !tableau.leading_block_is_identity(n) {
            debug!(n, "reduced left block is not the identity, matrix is singular");
            return Err(MatrixError::NotInvertible);
        }
        let inverse = tableau.as_array().slice(s![.., n..]).to_owned();
        Ok(Matrix::from_array_unchecked(inverse))
    }
}
