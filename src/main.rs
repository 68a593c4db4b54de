//! Portfolio Builder - fill a few fields, preview a one-page portfolio,
//! then export it as HTML, JSON, a share link or a QR code

#![forbid(unsafe_code)]

mod cli;
mod config;
mod constants;
mod draft;
mod export;
mod gui;
mod persistence;
mod render;
mod session;

use clap::Parser;
use tracing::Level as TraceLevel;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use config::Settings;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let settings = Settings::load();

    cli::run(cli, settings)?;

    Ok(())
}
