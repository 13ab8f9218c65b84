//! Matrix properties: minors, determinant, rank

use cofactor_core::{MatrixError, Result};
use crate::helpers::{alternating_sign, check_square, is_zero_row};
use crate::types::Matrix;

/// Copy of `rows` without the given row and column
pub(crate) fn minor_of(rows: &[Vec<f64>], row: usize, col: usize) -> Vec<Vec<f64>> {
    rows.iter()
        .enumerate()
        .filter(|&(i, _)| i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, &x)| x)
                .collect()
        })
        .collect()
}

/// Laplace expansion along the first row.
///
/// Terms are accumulated left to right starting from `0.0`; callers rely on
/// this order for reproducible results.
pub(crate) fn determinant_of(rows: &[Vec<f64>]) -> f64 {
    if rows.len() == 1 {
        return rows[0][0];
    }

    let mut result = 0.0;
    for (i, &x) in rows[0].iter().enumerate() {
        result += alternating_sign(i) * x * determinant_of(&minor_of(rows, 0, i));
    }
    result
}

impl Matrix {
    /// Submatrix with `row` and `col` removed
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        self.get(row, col)?;
        if self.rows() == 1 || self.cols() == 1 {
            return Err(MatrixError::invalid_dimension(format!(
                "minor: removing row {} and column {} of a {}×{} matrix leaves nothing",
                row,
                col,
                self.rows(),
                self.cols()
            )));
        }
        Ok(Matrix::from_raw(minor_of(self.data(), row, col)))
    }

    /// Determinant by recursive cofactor expansion (O(n!))
    pub fn determinant(&self) -> Result<f64> {
        check_square(self, "determinant")?;
        Ok(determinant_of(self.data()))
    }

    /// Number of non-zero rows of the reduced row echelon form
    pub fn rank(&self) -> usize {
        let rank = self.rref().iter_rows().filter(|row| !is_zero_row(row)).count();
        tracing::trace!(rows = self.rows(), cols = self.cols(), rank, "computed rank");
        rank
    }
}
