use std::{path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::Parser;
use feature_count_check::{Minimum, Outcome};
use tracing_subscriber::EnvFilter;

/// Fail if any Feature in a (nested) FeatureCollection has `properties.count`
/// below a minimum.
#[derive(Parser, Debug)]
#[command(name = "check-minimum-count", version, about)]
struct Cli {
    /// Input GeoJSON document.
    document: PathBuf,

    /// Smallest acceptable `count`.
    #[arg(allow_hyphen_values = true)]
    minimum: Minimum,
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let document = feature_count_check::load_document(&cli.document)
        .with_context(|| format!("load document '{}'", cli.document.display()))?;

    match feature_count_check::check_document(&document, &cli.minimum)? {
        Outcome::Pass => Ok(ExitCode::SUCCESS),
        Outcome::Violation(violation) => {
            tracing::debug!(path = %violation.path, "violation");
            feature_count_check::write_violation(
                std::io::stderr().lock(),
                &violation,
                &cli.minimum,
                &cli.document,
            )?;
            Ok(ExitCode::from(1))
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
