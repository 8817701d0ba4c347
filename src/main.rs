//! nodescale command line
//!
//! ```bash
//! # One chart per metric and row count, written to the working directory
//! nodescale jacobi.json matvec.json
//!
//! # With diagnostics
//! RUST_LOG=nodescale=debug nodescale jacobi.json
//! ```

use clap::Parser;
use nodescale::report::{ReportConfig, Reporter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Render time and scalability charts from benchmark result files
///
/// Each FILE is a JSON array of benchmark runs. For every metric and row
/// count a PNG named `<metric>_<file>_<rows>.png` is written to the working
/// directory.
#[derive(Parser)]
#[command(name = "nodescale")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Benchmark result files
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    // log records from the library are forwarded through tracing-log
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nodescale=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut reporter = Reporter::new(ReportConfig::default());
    match reporter.run(&cli.files) {
        Ok(summary) => {
            log::debug!(
                "{} charts generated, {} inputs not accessible",
                summary.generated.len(),
                summary.inaccessible.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
