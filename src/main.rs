//! Monitoring client CLI
//!
//! Probes session state and streams paginated resources to stdout.

use clap::Parser;
use parkmon_client::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let runner = Runner::new(cli);

    // RUST_LOG wins; otherwise verbosity follows the run mode.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(runner.config().log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
