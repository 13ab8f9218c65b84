//! Cofactor Core - Fundamental types
//!
//! This crate provides the types shared by every Cofactor crate:
//! - `MatrixError`: the error taxonomy of the matrix engine
//! - `codes`: stable machine-readable error codes
//! - `Result`: crate-wide result alias

mod error;

pub use error::{codes, MatrixError, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{MatrixError, Result};
}
