//! Matrix operations: arithmetic, transformations, inverse

use std::ops::{Add, Div, Mul, Neg, Sub};
use cofactor_core::{MatrixError, Result};
use crate::helpers::*;
use crate::props::{determinant_of, minor_of};
use crate::types::Matrix;

impl Matrix {
    /// Elementwise sum
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        check_same_dims(self, other, "add")?;

        let data = self
            .iter_rows()
            .zip(other.iter_rows())
            .map(|(a, b)| a.iter().zip(b).map(|(x, y)| x + y).collect())
            .collect();
        Ok(Matrix::from_raw(data))
    }

    /// `self + (-1 · other)`
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        check_same_dims(self, other, "subtract")?;
        self.add(&other.scale(-1.0))
    }

    /// Multiply every entry by `k`
    pub fn scale(&self, k: f64) -> Matrix {
        let data = self
            .iter_rows()
            .map(|row| row.iter().map(|x| x * k).collect())
            .collect();
        Matrix::from_raw(data)
    }

    /// `self · (1 / k)`
    pub fn divide_by_scalar(&self, k: f64) -> Result<Matrix> {
        if k == 0.0 {
            return Err(MatrixError::DivisionByZero);
        }
        Ok(self.scale(1.0 / k))
    }

    /// Matrix product, naive triple loop
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        check_matmul_dims(self, other, "multiply")?;

        let a = self.data();
        let b = other.data();
        let mut data = Vec::with_capacity(self.rows());
        for i in 0..self.rows() {
            let mut row = Vec::with_capacity(other.cols());
            for j in 0..other.cols() {
                let mut sum = 0.0;
                for k in 0..self.cols() {
                    sum += a[i][k] * b[k][j];
                }
                row.push(sum);
            }
            data.push(row);
        }
        Ok(Matrix::from_raw(data))
    }

    /// Transpose: `cols × rows` result
    pub fn transpose(&self) -> Matrix {
        let a = self.data();
        let data = (0..self.cols())
            .map(|j| (0..self.rows()).map(|i| a[i][j]).collect())
            .collect();
        Matrix::from_raw(data)
    }

    /// Horizontal concatenation `[self | other]`
    pub fn augment(&self, other: &Matrix) -> Result<Matrix> {
        check_same_rows(self, other, "augment")?;

        let data = self
            .iter_rows()
            .zip(other.iter_rows())
            .map(|(a, b)| {
                let mut row = Vec::with_capacity(a.len() + b.len());
                row.extend_from_slice(a);
                row.extend_from_slice(b);
                row
            })
            .collect();
        Ok(Matrix::from_raw(data))
    }

    /// Matrix of signed minor determinants, `C[i][j] = (-1)^(i+j) · det(minor(i, j))`
    ///
    /// A 1×1 matrix has the cofactor matrix `[[1]]`.
    pub fn cofactor_matrix(&self) -> Result<Matrix> {
        check_square(self, "cofactor")?;

        let n = self.rows();
        if n == 1 {
            return Ok(Matrix::from_raw(vec![vec![1.0]]));
        }

        let a = self.data();
        let data = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| alternating_sign(i + j) * determinant_of(&minor_of(a, i, j)))
                    .collect()
            })
            .collect();
        Ok(Matrix::from_raw(data))
    }

    /// Transpose of the cofactor matrix
    pub fn adjugate(&self) -> Result<Matrix> {
        Ok(self.cofactor_matrix()?.transpose())
    }

    /// Inverse by the adjugate method
    ///
    /// Fails with `Singular` when `|det| < EPSILON`.
    pub fn inverse(&self) -> Result<Matrix> {
        check_square(self, "inverse")?;

        let det = self.determinant()?;
        if is_negligible(det) {
            return Err(MatrixError::Singular { op: "inverse", det });
        }

        Ok(self.adjugate()?.scale(1.0 / det))
    }
}

impl Add for &Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: Self) -> Result<Matrix> {
        Matrix::add(self, rhs)
    }
}

impl Sub for &Matrix {
    type Output = Result<Matrix>;

    fn sub(self, rhs: Self) -> Result<Matrix> {
        self.subtract(rhs)
    }
}

impl Mul for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: Self) -> Result<Matrix> {
        self.multiply(rhs)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, k: f64) -> Matrix {
        self.scale(k)
    }
}

impl Div<f64> for &Matrix {
    type Output = Result<Matrix>;

    fn div(self, k: f64) -> Result<Matrix> {
        self.divide_by_scalar(k)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.scale(-1.0)
    }
}
