use clap::Parser;
use dotenv::dotenv;
use tracing::error;
use tracing_subscriber::EnvFilter;

use pinnexus::cli::{self, Args};

fn init_logging() {
    // Diagnostics go to stderr so table/JSON output on stdout stays clean.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();
    dotenv().ok(); // Load .env file

    let args = Args::parse();

    if let Err(e) = cli::run(args).await {
        error!(error = %e, "Command failed.");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
