//! Presentation helpers: rounding and noise cleaning before display

use serde::{Deserialize, Serialize};
use crate::helpers::{DEFAULT_DECIMALS, EPSILON};
use crate::types::Matrix;

/// How a result is tidied up before it is shown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Presentation {
    /// Decimal places kept by rounding
    pub decimals: u32,
    /// Replace near-zero entries with exactly 0.0
    pub clean: bool,
    /// Magnitude under which an entry counts as noise
    pub clean_tolerance: f64,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            clean: true,
            clean_tolerance: EPSILON,
        }
    }
}

/// Round half away from zero to `decimals` places.
fn round_to(x: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(i32::MAX as u32) as i32);
    let scaled = x * factor;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round() / factor
}

impl Matrix {
    /// Round every entry to `decimals` places (half away from zero)
    pub fn round(&self, decimals: u32) -> Matrix {
        self.map(|x| round_to(x, decimals))
    }

    /// Replace entries with magnitude below `tolerance` by exactly 0.0
    pub fn clean(&self, tolerance: f64) -> Matrix {
        self.map(|x| if x.abs() < tolerance { 0.0 } else { x })
    }

    /// Round, then clean at `EPSILON`
    pub fn round_clean(&self, decimals: u32) -> Matrix {
        self.round(decimals).clean(EPSILON)
    }

    /// Apply a presentation config
    pub fn present(&self, cfg: &Presentation) -> Matrix {
        let rounded = self.round(cfg.decimals);
        if cfg.clean {
            rounded.clean(cfg.clean_tolerance)
        } else {
            rounded
        }
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        let data = self
            .iter_rows()
            .map(|row| row.iter().map(|&x| f(x)).collect())
            .collect();
        Matrix::from_raw(data)
    }
}
