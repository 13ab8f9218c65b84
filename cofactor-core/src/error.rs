//! Structured errors for the matrix engine
//!
//! Every failure is reported synchronously to the caller as a value. The
//! engine never logs, retries or suppresses an error; it is returned with `?`
//! until someone decides what to do with it.

use serde::Serialize;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_DIMENSION: &str = "INVALID_DIMENSION";
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const NOT_SQUARE: &str = "NOT_SQUARE";
    pub const SINGULAR: &str = "SINGULAR";
    pub const NO_SOLUTION: &str = "NO_SOLUTION";
    pub const INFINITE_SOLUTIONS: &str = "INFINITE_SOLUTIONS";
    pub const INDEX_OUT_OF_RANGE: &str = "INDEX_OUT_OF_RANGE";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const INVALID_RANGE: &str = "INVALID_RANGE";
}

/// Result alias used throughout Cofactor
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors raised by matrix construction and algebra
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatrixError {
    /// Non-positive or ragged dimensions at construction
    #[error("invalid dimension: {reason}")]
    InvalidDimension { reason: String },

    /// Operand shapes are incompatible for the operation
    #[error("{op}: incompatible dimensions {}×{} and {}×{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("{op}: requires square matrix, got {rows}×{cols}")]
    NotSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },

    /// Determinant is (numerically) zero
    #[error("{op}: matrix is singular (det = {det})")]
    Singular { op: &'static str, det: f64 },

    /// rank(A) < rank(A|B)
    #[error("system has no solution: rank(A) = {rank_a}, rank(A|B) = {rank_ab}")]
    NoSolution { rank_a: usize, rank_ab: usize },

    /// rank(A) == rank(A|B) < number of equations
    #[error("system has infinitely many solutions: rank {rank} < {rows} equations")]
    InfiniteSolutions { rank: usize, rows: usize },

    #[error("index ({row}, {col}) out of range for {rows}×{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("division by zero")]
    DivisionByZero,

    /// Random fill bounds are inverted
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
}

impl MatrixError {
    /// Create an `InvalidDimension` error
    pub fn invalid_dimension(reason: impl Into<String>) -> Self {
        MatrixError::InvalidDimension { reason: reason.into() }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            MatrixError::InvalidDimension { .. } => codes::INVALID_DIMENSION,
            MatrixError::DimensionMismatch { .. } => codes::DIMENSION_MISMATCH,
            MatrixError::NotSquare { .. } => codes::NOT_SQUARE,
            MatrixError::Singular { .. } => codes::SINGULAR,
            MatrixError::NoSolution { .. } => codes::NO_SOLUTION,
            MatrixError::InfiniteSolutions { .. } => codes::INFINITE_SOLUTIONS,
            MatrixError::IndexOutOfRange { .. } => codes::INDEX_OUT_OF_RANGE,
            MatrixError::DivisionByZero => codes::DIV_ZERO,
            MatrixError::InvalidRange { .. } => codes::INVALID_RANGE,
        }
    }

    /// Suggestion for fixing the error
    pub fn suggestion(&self) -> &'static str {
        match self {
            MatrixError::InvalidDimension { .. } => {
                "Use at least one row and one column, with every row the same length"
            }
            MatrixError::DimensionMismatch { op, .. } => match *op {
                "multiply" => "Left operand columns must equal right operand rows",
                "augment" | "solve" => "Both operands must have the same number of rows",
                _ => "Operands must have the same number of rows and columns",
            },
            MatrixError::NotSquare { .. } => "Use a matrix with as many rows as columns",
            MatrixError::Singular { .. } => "Matrix has no inverse; check for dependent rows",
            MatrixError::NoSolution { .. } => "Equations are inconsistent",
            MatrixError::InfiniteSolutions { .. } => {
                "Equations are dependent; add independent equations"
            }
            MatrixError::IndexOutOfRange { .. } => "Indices are zero-based and must be inside the matrix",
            MatrixError::DivisionByZero => "Ensure divisor is not zero",
            MatrixError::InvalidRange { .. } => "Swap the bounds so that min <= max",
        }
    }
}
