use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "urbanpulse",
    version,
    about = "City weather, air quality and comfort dashboard"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// City to show first (must be one of the configured cities)
    #[arg(long)]
    pub city: Option<String>,

    /// City to compare against
    #[arg(long)]
    pub compare: Option<String>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Re-run interactive setup
    Init,
    /// Validate config and test the OpenWeatherMap connection
    Check,
    /// Fetch one city and print its derived metrics
    Snapshot {
        /// Print as JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Log filter directive implied by `-v` flags.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
