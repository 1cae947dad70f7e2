use crate::config::toml_config::TomlConfig;
use crate::config::ClientConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "page-fetch")]
#[command(about = "Fetch a greeting or a stock quote and render it like the web page does")]
pub struct Cli {
    #[arg(long, global = true, help = "Server base URL (overrides the config file)")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Request a greeting for NAME
    Hello {
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Request quote data for SYMBOL
    Stock {
        #[arg(long, default_value = "")]
        symbol: String,
    },
}

impl Cli {
    /// Config file first, then the `--base-url` flag on top.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.client_config(),
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }

        Ok(config)
    }
}
