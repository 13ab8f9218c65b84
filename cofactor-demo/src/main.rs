//! Cofactor demo
//!
//! Prints a walkthrough of the matrix engine on two seeded random matrices.
//!
//! Environment:
//! - `COFACTOR_CONFIG`: optional JSON config file (see `DemoConfig`)
//! - `RUST_LOG`: log filter, defaults to `info`

mod config;
mod demo;
mod error;

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use crate::config::DemoConfig;

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Cofactor demo v{} started", env!("CARGO_PKG_VERSION"));

    let result = DemoConfig::load().and_then(|cfg| demo::run(&cfg));
    match result {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let error::DemoError::Matrix(ref m) = e {
                tracing::error!(code = m.code(), suggestion = m.suggestion(), "{}", e);
            } else {
                tracing::error!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}
