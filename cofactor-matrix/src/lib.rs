//! Cofactor Matrix - Dense Linear Algebra
//!
//! Provides a dense `f64` matrix value type and the classic textbook
//! algorithms over it:
//! - Construction (new, from_rows, zeros, identity, fill_random)
//! - Basic operations (add, subtract, scale, divide, multiply, transpose, augment)
//! - Determinant by cofactor expansion along the first row
//! - Inverse by the adjugate method
//! - Row reduction (RREF) and rank
//! - Linear systems with rank-based consistency classification
//! - Presentation helpers (round, clean)
//!
//! Every operator is pure: operands are borrowed and a new matrix is returned.

mod types;
mod helpers;
mod construct;
mod ops;
mod props;
mod decompose;
mod solve;
mod format;

pub use types::Matrix;
pub use construct::DEFAULT_SEED;
pub use helpers::{DEFAULT_DECIMALS, EPSILON};
pub use solve::Consistency;
pub use format::Presentation;
pub use cofactor_core::{MatrixError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_determinant_and_inverse() {
        let a = Matrix::from_rows(&[[2.0, 0.0], [0.0, 2.0]]).unwrap();
        assert_eq!(a.determinant(), Ok(4.0));
        assert_eq!(a.inverse().unwrap(), Matrix::from_rows(&[[0.5, 0.0], [0.0, 0.5]]).unwrap());
    }

    #[test]
    fn test_solve_concrete_system() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[[5.0], [6.0]]).unwrap();
        let x = a.solve(&b).unwrap();
        assert!((x[(0, 0)] + 4.0).abs() < 1e-9);
        assert!((x[(1, 0)] - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_ragged_construction_fails() {
        let result = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(MatrixError::InvalidDimension { .. })));
    }

    #[test]
    fn test_incompatible_multiply_fails() {
        let a = Matrix::new(2, 3).unwrap();
        let b = Matrix::new(2, 2).unwrap();
        assert!(matches!(a.multiply(&b), Err(MatrixError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_rank_deficient_systems() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
        let consistent = Matrix::from_rows(&[[3.0], [6.0]]).unwrap();
        let inconsistent = Matrix::from_rows(&[[3.0], [7.0]]).unwrap();

        assert!(matches!(a.solve(&consistent), Err(MatrixError::InfiniteSolutions { .. })));
        assert!(matches!(a.solve(&inconsistent), Err(MatrixError::NoSolution { .. })));
    }

    #[test]
    fn test_inverse_product_is_identity_after_clean() {
        let a = Matrix::from_rows(&[[3.0, 1.0, 2.0], [1.0, 4.0, 1.0], [2.0, 1.0, 5.0]]).unwrap();
        let product = a.multiply(&a.inverse().unwrap()).unwrap().clean(EPSILON);
        let id = Matrix::identity(3).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert!((product[(i, j)] - id[(i, j)]).abs() < 1e-6);
            }
        }
    }
}
