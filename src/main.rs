//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `stream_unlock` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Writing the panel to stdout
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use stream_unlock::initialization::init_logger_with;
use stream_unlock::{run_check, Config, ReportSink, WriterSink};

#[tokio::main]
async fn main() -> Result<()> {
    // Options may come from STREAM_UNLOCK_* variables in a local .env file
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_check(&config).await {
        Ok(panel) => {
            let mut sink = WriterSink::stdout(config.output);
            sink.done(&panel).context("Failed to emit report")?;
            Ok(())
        }
        Err(e) => {
            eprintln!("stream_unlock error: {:#}", e);
            process::exit(1);
        }
    }
}
