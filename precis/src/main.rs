//! precis - command-line entry point

use anyhow::Result;
use clap::Parser;
use std::io::Write;

use precis::cli::{Cli, run};

const DEFAULT_LOG_FILTER: &str = "precis=info,precis_core=info,precis_text=warn";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let json = run(&cli).await?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
