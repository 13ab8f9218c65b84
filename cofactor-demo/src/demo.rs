//! The console walkthrough: arithmetic, inverse and a linear system on two
//! random square matrices.

use std::fmt::Write;
use cofactor_matrix::{Matrix, Presentation};
use crate::config::DemoConfig;
use crate::error::DemoError;

/// Build both matrices from the config and render the walkthrough
pub fn run(cfg: &DemoConfig) -> Result<String, DemoError> {
    let m1 = Matrix::random(cfg.size, cfg.size, cfg.min, cfg.max, Some(cfg.seed))?;
    let m2 = Matrix::random(cfg.size, cfg.size, cfg.min, cfg.max, Some(cfg.seed.wrapping_add(1)))?;
    tracing::info!(size = cfg.size, min = cfg.min, max = cfg.max, seed = cfg.seed, "generated matrices");
    render(&m1, &m2, &cfg.presentation)
}

/// Render the walkthrough for two square matrices of equal size
pub fn render(m1: &Matrix, m2: &Matrix, cfg: &Presentation) -> Result<String, DemoError> {
    let sum = (m1 + m2)?;
    let product = (m1 * m2)?;
    let transposed = m1.transpose();
    let inverse = m1.inverse()?;
    let inverse_check = (m1 * &inverse)?;

    let column: Vec<[f64; 1]> = (1..=m1.rows()).map(|i| [i as f64]).collect();
    let m3 = Matrix::from_rows(&column)?;
    let solution = m1.solve(&m3)?;
    let solution_check = (m1 * &solution)?;
    let det = m1.determinant()?;

    let mut out = String::new();
    section(&mut out, "m1", m1);
    section(&mut out, "m2", m2);
    section(&mut out, "m1 + m2", &sum);
    section(&mut out, "m1 * m2", &product);
    section(&mut out, "transpose of m1", &transposed);
    section(&mut out, "inverse of m1", &inverse.present(cfg));
    section(&mut out, "m1 * inverse", &inverse_check.present(cfg));
    section(&mut out, "m3", &m3);
    section(&mut out, "solution of m1 * x = m3", &solution.present(cfg));
    section(&mut out, "m1 * solution", &solution_check.present(cfg));
    let _ = writeln!(out, "det(m1):\n{}", det);
    Ok(out)
}

fn section(out: &mut String, title: &str, m: &Matrix) {
    let _ = writeln!(out, "{}:\n{}", title, m);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cofactor_core::MatrixError;

    #[test]
    fn test_render_known_matrices() {
        let m1 = Matrix::from_rows(&[[2.0, 0.0], [0.0, 2.0]]).unwrap();
        let m2 = Matrix::identity(2).unwrap();
        let report = render(&m1, &m2, &Presentation::default()).unwrap();

        assert!(report.contains("m1 + m2:\n3 0\n0 3\n"));
        assert!(report.contains("inverse of m1:\n0.5 0\n0 0.5\n"));
        assert!(report.contains("m1 * inverse:\n1 0\n0 1\n"));
        assert!(report.contains("solution of m1 * x = m3:\n0.5\n1\n"));
        assert!(report.ends_with("det(m1):\n4\n"));
    }

    #[test]
    fn test_render_singular_fails() {
        let m1 = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
        let m2 = Matrix::identity(2).unwrap();
        let err = render(&m1, &m2, &Presentation::default()).unwrap_err();
        assert!(matches!(err, DemoError::Matrix(MatrixError::Singular { op: "inverse", .. })));
    }

    #[test]
    fn test_run_reports_sections_or_engine_error() {
        let cfg = DemoConfig { size: 3, ..DemoConfig::default() };
        match run(&cfg) {
            Ok(report) => {
                assert!(report.starts_with("m1:\n"));
                assert!(report.contains("m1 * solution:\n"));
            }
            Err(DemoError::Matrix(e)) => {
                assert!(matches!(e, MatrixError::Singular { .. } | MatrixError::InfiniteSolutions { .. }));
            }
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn test_run_rejects_bad_config() {
        let cfg = DemoConfig { size: 0, ..DemoConfig::default() };
        assert!(matches!(run(&cfg), Err(DemoError::Matrix(MatrixError::InvalidDimension { .. }))));

        let cfg = DemoConfig { min: 9, max: 1, ..DemoConfig::default() };
        assert!(matches!(run(&cfg), Err(DemoError::Matrix(MatrixError::InvalidRange { .. }))));
    }
}
