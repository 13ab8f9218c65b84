//! Row reduction: reduced row echelon form by Gauss-Jordan elimination

use crate::helpers::is_negligible;
use crate::types::Matrix;

impl Matrix {
    /// Reduced row echelon form
    ///
    /// Columns are scanned left to right for a pivot, taking the first entry
    /// at or below the current row whose magnitude reaches `EPSILON`. When the
    /// remaining columns hold no pivot the partially reduced matrix is
    /// returned as is.
    pub fn rref(&self) -> Matrix {
        let rows = self.rows();
        let cols = self.cols();
        let mut data = self.to_rows();
        let mut lead = 0;

        for r in 0..rows {
            if lead >= cols {
                break;
            }

            let mut i = r;
            while is_negligible(data[i][lead]) {
                i += 1;
                if i == rows {
                    i = r;
                    lead += 1;
                    if lead == cols {
                        tracing::trace!(row = r, "rref: no pivot left, stopping early");
                        return Matrix::from_raw(data);
                    }
                }
            }

            data.swap(i, r);

            let div = data[r][lead];
            if !is_negligible(div) {
                for x in data[r].iter_mut() {
                    *x /= div;
                }
            }

            let pivot_row = data[r].clone();
            for (j, row) in data.iter_mut().enumerate() {
                if j == r {
                    continue;
                }
                let mult = row[lead];
                for (x, p) in row.iter_mut().zip(&pivot_row) {
                    *x -= mult * p;
                }
            }

            lead += 1;
        }

        Matrix::from_raw(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_rref_invertible_is_identity() {
        let a = m(&[&[2.0, 1.0], &[1.0, 3.0]]);
        let r = a.rref();
        let id = Matrix::identity(2).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                assert!((r[(i, j)] - id[(i, j)]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_rref_dependent_rows() {
        let a = m(&[&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]]);
        assert_eq!(a.rref(), m(&[&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0]]));
    }

    #[test]
    fn test_rref_swaps_rows_for_pivot() {
        let a = m(&[&[0.0, 1.0], &[1.0, 0.0]]);
        assert_eq!(a.rref(), Matrix::identity(2).unwrap());
    }

    #[test]
    fn test_rref_skips_empty_column() {
        let a = m(&[&[0.0, 2.0, 4.0], &[0.0, 1.0, 3.0]]);
        assert_eq!(a.rref(), m(&[&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]]));
    }

    #[test]
    fn test_rref_zero_matrix_unchanged() {
        let z = Matrix::zeros(3, 2).unwrap();
        assert_eq!(z.rref(), z);
    }

    #[test]
    fn test_rref_augmented_system() {
        // x + 2y = 5, 3x + 4y = 6  =>  x = -4, y = 4.5
        let a = m(&[&[1.0, 2.0, 5.0], &[3.0, 4.0, 6.0]]);
        let r = a.rref();
        assert!((r[(0, 2)] + 4.0).abs() < 1e-12);
        assert!((r[(1, 2)] - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_rref_leaves_input_untouched() {
        let a = m(&[&[0.0, 1.0], &[3.0, 0.0]]);
        let before = a.clone();
        let _ = a.rref();
        assert_eq!(a, before);
    }
}
