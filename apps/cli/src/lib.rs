//! Command-line front end for md2anki.

pub mod cli;
pub mod config;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use cli::Cli;
pub use config::Config;

pub fn run(cli: Cli) -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from(cli);
    tracing::debug!("Using separator {:?}", config.separator);

    let count = md2anki_core::convert_file(&config.input, &config.output, &config.separator)
        .with_context(|| {
            format!(
                "Failed to convert {} into {}",
                config.input.display(),
                config.output.display()
            )
        })?;

    println!("Wrote {} notes to {}", count, config.output.display());
    Ok(())
}
