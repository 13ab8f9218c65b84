//! Helper functions for matrix operations

use cofactor_core::{MatrixError, Result};
use crate::types::Matrix;

/// Fixed tolerance for pivots, singularity and zero rows
pub const EPSILON: f64 = 1e-10;

/// Default decimal places for `Matrix::round`
pub const DEFAULT_DECIMALS: u32 = 12;

/// True when `x` is indistinguishable from zero at `EPSILON`
pub(crate) fn is_negligible(x: f64) -> bool {
    x.abs() < EPSILON
}

/// True when every entry of `row` is negligible
pub(crate) fn is_zero_row(row: &[f64]) -> bool {
    row.iter().all(|&x| is_negligible(x))
}

/// `(-1)^k` for cofactor signs
pub(crate) fn alternating_sign(k: usize) -> f64 {
    if k % 2 == 0 { 1.0 } else { -1.0 }
}

/// Check that two matrices have compatible dimensions for multiplication
pub(crate) fn check_matmul_dims(a: &Matrix, b: &Matrix, op: &'static str) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(mismatch(a, b, op));
    }
    Ok(())
}

/// Check that two matrices have the same dimensions
pub(crate) fn check_same_dims(a: &Matrix, b: &Matrix, op: &'static str) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(mismatch(a, b, op));
    }
    Ok(())
}

/// Check that two matrices have the same number of rows
pub(crate) fn check_same_rows(a: &Matrix, b: &Matrix, op: &'static str) -> Result<()> {
    if a.rows() != b.rows() {
        return Err(mismatch(a, b, op));
    }
    Ok(())
}

/// Check that a matrix is square
pub(crate) fn check_square(m: &Matrix, op: &'static str) -> Result<()> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare {
            op,
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    Ok(())
}

fn mismatch(a: &Matrix, b: &Matrix, op: &'static str) -> MatrixError {
    MatrixError::DimensionMismatch {
        op,
        left: a.shape(),
        right: b.shape(),
    }
}
