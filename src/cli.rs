//! Command-line interface.
//!
//! Mirrors the historical tool's surface: an optional positional listen
//! address and a `-n` switch for non-transparent proxying, plus an optional
//! TOML config file. CLI values win over file values.

use std::path::PathBuf;

use clap::Parser;

use crate::config::loader::{load_config, ConfigError};
use crate::config::validation::validate_config;
use crate::config::StripConfig;

/// TLS-stripping proxy: accepts plaintext HTTP, replays each request as
/// HTTPS against the real origin, and relays the response with the
/// Strict-Transport-Security header removed.
#[derive(Parser, Debug)]
#[command(name = "tlstrip", version, about)]
pub struct Cli {
    /// Address to listen on (host:port)
    #[arg(value_name = "ADDRESS")]
    pub address: Option<String>,

    /// Proxy connections non-transparently: dispatch to the request-line URL
    /// instead of the wire-level Host header
    #[arg(short = 'n', long)]
    pub non_transparent: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Resolve the final configuration: file values first, CLI overrides on
    /// top, then a final semantic validation of the merged result.
    pub fn into_config(self) -> Result<StripConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => StripConfig::default(),
        };

        if let Some(address) = self.address {
            config.listener.bind_address = address;
        }
        if self.non_transparent {
            config.addressing.non_transparent = true;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
