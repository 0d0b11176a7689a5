//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Terminal booking funnel for discounted international flights
#[derive(Debug, Parser)]
#[command(name = "flightfare-tui")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.flightfare-tui/config.json
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Text-generation API key (overrides environment and config file)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Log filter, e.g. "flightfare_tui=debug"
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Write a config file with default values and exit
    #[arg(long)]
    pub write_default_config: bool,
}
