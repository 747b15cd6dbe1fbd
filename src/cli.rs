//! # CLI
//!
//! Argument parsing and server bootstrap. `main.rs` delegates here.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::config::{AppConfig, ConfigError};
use crate::http_server::HttpServer;

/// Aircraft and airport reference data REST service
#[derive(Debug, Parser)]
#[command(name = "aviaref", version, about)]
struct Args {
    /// Path to a JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to serve on, overriding the configuration
    #[arg(long)]
    addr: Option<String>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse arguments, load configuration and run the server to completion.
pub fn run() -> Result<(), CliError> {
    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(addr) = args.addr {
        config.server.addr = addr;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(HttpServer::new(config).start())?;

    Ok(())
}
