//! llms-txt-generator - build llms.txt files from documentation repositories

use anyhow::{Context, Result};
use llms_txt_generator::cli::{generate, Cli};
use llms_txt_generator::repo::{GeneratorConfig, GitCloner, GitHubClient};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = match cli.config {
        Some(ref path) => GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load config {:?}", path))?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            GeneratorConfig::load_or_default(&cwd)?
        }
    };

    let metadata = GitHubClient::new(
        &config.api_base,
        &config.user_agent,
        Duration::from_secs(config.timeout_secs),
    )?;

    match generate(&cli.generate, &config, &GitCloner, &metadata).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::debug!("Generation failed: {:?}", e);
            eprintln!("✗ {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
