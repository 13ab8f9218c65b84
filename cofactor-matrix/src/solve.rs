//! Linear system solving with rank-based consistency classification

use cofactor_core::{MatrixError, Result};
use serde::{Deserialize, Serialize};
use crate::helpers::{check_same_rows, check_square, is_negligible};
use crate::types::Matrix;

/// Solvability of `A·X = B`, decided by comparing rank(A) with rank(A|B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Consistency {
    /// Exactly one solution
    Unique,
    /// rank(A) < rank(A|B)
    NoSolution,
    /// rank(A) == rank(A|B) < number of equations
    Infinite,
}

impl Consistency {
    fn from_ranks(rank_a: usize, rank_ab: usize, equations: usize) -> Self {
        if rank_a < rank_ab {
            Consistency::NoSolution
        } else if rank_a < equations {
            Consistency::Infinite
        } else {
            Consistency::Unique
        }
    }
}

impl Matrix {
    /// rank(A) and rank(A|B) after shape checks
    fn system_ranks(&self, rhs: &Matrix) -> Result<(usize, usize)> {
        check_same_rows(self, rhs, "solve")?;
        check_square(self, "solve")?;

        let rank_a = self.rank();
        let rank_ab = self.augment(rhs)?.rank();
        tracing::debug!(rank_a, rank_ab, equations = rhs.rows(), "ranked linear system");
        Ok((rank_a, rank_ab))
    }

    /// Classify the system `self · X = rhs` without solving it
    pub fn classify(&self, rhs: &Matrix) -> Result<Consistency> {
        let (rank_a, rank_ab) = self.system_ranks(rhs)?;
        Ok(Consistency::from_ranks(rank_a, rank_ab, rhs.rows()))
    }

    /// Solve `self · X = rhs` as `inverse(self) · rhs`
    ///
    /// Rank deficiency is reported as `NoSolution` or `InfiniteSolutions`
    /// before the determinant is looked at, so `Singular` only surfaces for
    /// full-rank systems whose determinant is still below `EPSILON`.
    pub fn solve(&self, rhs: &Matrix) -> Result<Matrix> {
        let (rank_a, rank_ab) = self.system_ranks(rhs)?;

        match Consistency::from_ranks(rank_a, rank_ab, rhs.rows()) {
            Consistency::NoSolution => return Err(MatrixError::NoSolution { rank_a, rank_ab }),
            Consistency::Infinite => {
                return Err(MatrixError::InfiniteSolutions { rank: rank_a, rows: rhs.rows() })
            }
            Consistency::Unique => {}
        }

        let det = self.determinant()?;
        if is_negligible(det) {
            return Err(MatrixError::Singular { op: "solve", det });
        }

        self.inverse()?.multiply(rhs)
    }
}
