//! Core matrix type

use std::fmt;
use std::ops::{Index, IndexMut};
use cofactor_core::{MatrixError, Result};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Dense row-major matrix of `f64`
///
/// Always has at least one row and one column, and every row has exactly
/// `cols` entries. Construction deep-copies its input, so no two matrices
/// share storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: Vec<Vec<f64>>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create a `rows × cols` matrix filled with zeros
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::invalid_dimension(format!(
                "matrix dimensions must be positive, got {}×{}",
                rows, cols
            )));
        }
        Ok(Self {
            data: vec![vec![0.0; cols]; rows],
            rows,
            cols,
        })
    }

    /// Create a matrix by copying explicit rows
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let data: Vec<Vec<f64>> = rows.iter().map(|r| r.as_ref().to_vec()).collect();
        Self::validated(data)
    }

    /// Validate rectangularity of owned rows
    fn validated(data: Vec<Vec<f64>>) -> Result<Self> {
        if data.is_empty() {
            return Err(MatrixError::invalid_dimension("matrix: empty data"));
        }

        let rows = data.len();
        let cols = data[0].len();

        if cols == 0 {
            return Err(MatrixError::invalid_dimension("matrix: row 0 is empty"));
        }

        // Validate all rows have same length
        for (i, row) in data.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::invalid_dimension(format!(
                    "matrix: row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
        }

        Ok(Self { data, rows, cols })
    }

    /// Wrap rows produced by an operator. Callers guarantee the shape.
    pub(crate) fn from_raw(data: Vec<Vec<f64>>) -> Self {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        debug_assert!(rows > 0 && cols > 0);
        debug_assert!(data.iter().all(|r| r.len() == cols));
        Self { data, rows, cols }
    }

    /// Get number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Check if matrix is square
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Get element at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_index(row, col)?;
        Ok(self.data[row][col])
    }

    /// Set element at (row, col) in place
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_index(row, col)?;
        self.data[row][col] = value;
        Ok(())
    }

    /// Borrow a row
    pub fn row(&self, row: usize) -> Result<&[f64]> {
        self.check_index(row, 0)?;
        Ok(&self.data[row])
    }

    /// Iterate over rows
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Copy out the rows as nested vectors
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.clone()
    }

    pub(crate) fn data(&self) -> &[Vec<f64>] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.data
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Convert to nalgebra DMatrix
    pub fn to_dmatrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.rows, self.cols, |i, j| self.data[i][j])
    }

    /// Create from nalgebra DMatrix
    pub fn from_dmatrix(m: &DMatrix<f64>) -> Result<Self> {
        let data: Vec<Vec<f64>> = (0..m.nrows())
            .map(|i| (0..m.ncols()).map(|j| m[(i, j)]).collect())
            .collect();
        Self::validated(data)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row][col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row][col]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(data: Vec<Vec<f64>>) -> Result<Self> {
        Self::validated(data)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.data
    }
}

impl From<&Matrix> for DMatrix<f64> {
    fn from(m: &Matrix) -> Self {
        m.to_dmatrix()
    }
}

/// Rows space-separated, one row per line
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            for (j, val) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_creation() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();

        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
        assert!(m.is_square());
        assert_eq!(m.shape(), (2, 2));
    }

    #[test]
    fn test_new_is_zero_filled() {
        let m = Matrix::new(2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert!(m.iter_rows().all(|r| r.iter().all(|&x| x == 0.0)));
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(Matrix::new(0, 3), Err(MatrixError::InvalidDimension { .. })));
        assert!(matches!(Matrix::new(3, 0), Err(MatrixError::InvalidDimension { .. })));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(MatrixError::InvalidDimension { .. })));
    }

    #[test]
    fn test_empty_rows_rejected() {
        let empty: [Vec<f64>; 0] = [];
        assert!(matches!(Matrix::from_rows(&empty), Err(MatrixError::InvalidDimension { .. })));
        assert!(matches!(
            Matrix::from_rows(&[Vec::<f64>::new()]),
            Err(MatrixError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_matrix_get_set() {
        let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();

        assert_eq!(m.get(0, 0), Ok(1.0));
        assert_eq!(m.get(1, 1), Ok(4.0));
        assert!(matches!(m.get(2, 0), Err(MatrixError::IndexOutOfRange { .. })));
        assert!(matches!(m.get(0, 2), Err(MatrixError::IndexOutOfRange { .. })));

        m.set(0, 1, 9.0).unwrap();
        assert_eq!(m[(0, 1)], 9.0);
        assert!(m.set(5, 5, 1.0).is_err());

        m[(1, 0)] = -1.0;
        assert_eq!(m.get(1, 0), Ok(-1.0));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let m = Matrix::new(2, 2).unwrap();
        let _ = m[(0, 2)];
    }

    #[test]
    fn test_construction_copies_input() {
        let mut source = vec![vec![1.0, 2.0]];
        let m = Matrix::from_rows(&source).unwrap();
        source[0][0] = 100.0;
        assert_eq!(m[(0, 0)], 1.0);

        let mut copy = m.clone();
        copy[(0, 0)] = 5.0;
        assert_eq!(m[(0, 0)], 1.0);
    }

    #[test]
    fn test_row_access() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(m.row(1).unwrap(), &[3.0, 4.0]);
        assert!(m.row(2).is_err());
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(&[[1.0, 2.5], [-3.0, 0.0]]).unwrap();
        assert_eq!(m.to_string(), "1 2.5\n-3 0\n");
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1.0,2.0],[3.0,4.0]]");

        let back: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);

        assert!(serde_json::from_str::<Matrix>("[[1.0,2.0],[3.0]]").is_err());
        assert!(serde_json::from_str::<Matrix>("[]").is_err());
    }

    #[test]
    fn test_dmatrix_conversion() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let d = m.to_dmatrix();
        assert_eq!(d.nrows(), 2);
        assert_eq!(d.ncols(), 3);
        assert_eq!(d[(1, 2)], 6.0);

        let back = Matrix::from_dmatrix(&d).unwrap();
        assert_eq!(back, m);

        let empty = DMatrix::<f64>::zeros(0, 3);
        assert!(Matrix::from_dmatrix(&empty).is_err());
    }
}
