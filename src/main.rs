use std::{fs::OpenOptions, io, sync::Mutex};

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod constants;
mod domain;
mod export;
mod rain;
mod seed;
mod storage;
mod validation;

const LOG_ENV: &str = "SEEDFALL_LOG";
const DEFAULT_LOG_LEVEL: &str = "info";

/// `SEEDFALL_LOG` when set and valid, otherwise `info` for both UI and CLI.
fn log_filter(env_value: Option<&str>) -> EnvFilter {
    env_value
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

fn init_logging(to_file: bool) {
    let filter = log_filter(std::env::var(LOG_ENV).ok().as_deref());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if !to_file {
        builder.with_writer(io::stderr).init();
        return;
    }

    let log_path = storage::get_log_path();
    match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
        Err(e) => eprintln!(
            "Warning: Could not open log file {}: {}",
            log_path.display(),
            e
        ),
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.runs_ui());
    cli::run_cli(cli);
}
