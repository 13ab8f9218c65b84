//! Matrix construction helpers: zeros, identity, seeded random fill

use cofactor_core::{MatrixError, Result};
use crate::types::Matrix;

/// Seed used when none is supplied
pub const DEFAULT_SEED: u64 = 12345;

impl Matrix {
    /// Create a `rows × cols` zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols)
    }

    /// Create an `n × n` identity matrix
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        for (i, row) in m.data_mut().iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Ok(m)
    }

    /// Overwrite every entry with an integer drawn uniformly from `[min, max]`
    pub fn fill_random(&mut self, min: i64, max: i64, seed: Option<u64>) -> Result<()> {
        if min > max {
            return Err(MatrixError::InvalidRange { min, max });
        }

        // Simple LCG: state = (a * state + c) mod 2^64
        let mut state = seed.unwrap_or(DEFAULT_SEED);
        let span = max as f64 - min as f64 + 1.0;

        for row in self.data_mut() {
            for val in row.iter_mut() {
                state = state.wrapping_mul(1103515245).wrapping_add(12345);
                let r = ((state >> 16) & 0x7fff) as f64 / 32768.0;
                *val = (min as f64 + (r * span).floor()).min(max as f64);
            }
        }

        tracing::trace!(min, max, rows = self.rows(), cols = self.cols(), "filled matrix with random values");
        Ok(())
    }

    /// Create a `rows × cols` matrix of random integers in `[min, max]`
    pub fn random(rows: usize, cols: usize, min: i64, max: i64, seed: Option<u64>) -> Result<Self> {
        let mut m = Self::new(rows, cols)?;
        m.fill_random(min, max, seed)?;
        Ok(m)
    }
}
