#![forbid(unsafe_code)]

mod apply;
mod cli;
mod clock;
mod config;
mod constants;
mod content;
mod dashboard;
mod gui;
mod navigator;
mod search;
mod stats;
mod timers;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;

use cli::Args;
use config::{Config, ConfigStore};

fn main() -> Result<()> {
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
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    let args = Args::parse();
    let storage = args.storage();

    if args.reset {
        info!("Resetting stored settings to defaults");
        ConfigStore::new(storage.clone()).save(&Config::default());
    }

    if args.print_config {
        let config = ConfigStore::new(storage).load();
        let json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize config")?;
        println!("{json}");
        return Ok(());
    }

    gui::run_gui(storage)
}
