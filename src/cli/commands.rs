//! CLI commands and argument parsing

use crate::types::RunMode;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

/// Monitoring client CLI
#[derive(Parser, Debug)]
#[command(name = "parkmon-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API base URL (overrides PARKMON_API_URL and the mode default)
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Run mode: development or production
    #[arg(short, long, global = true, value_parser = parse_mode)]
    pub mode: Option<RunMode>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether the current session is authenticated
    Check,

    /// Fetch all regions
    Regions {
        /// Point-in-time filter (RFC 3339, e.g. 2024-05-01T12:00:00Z)
        #[arg(long, value_parser = parse_time)]
        time: Option<DateTime<Utc>>,
    },

    /// Fetch region statistics
    RegionStats {
        /// Point-in-time filter (RFC 3339)
        #[arg(long, value_parser = parse_time)]
        time: Option<DateTime<Utc>>,
    },

    /// Fetch parkings valid at a point in time
    ValidParkings {
        /// Point-in-time filter (RFC 3339)
        #[arg(long, value_parser = parse_time)]
        time: Option<DateTime<Utc>>,
    },

    /// Print the logout navigation target
    LogoutUrl,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One JSON item per line
    Json,
    /// Human-readable summary
    Pretty,
}

fn parse_mode(value: &str) -> Result<RunMode, String> {
    RunMode::parse(value)
        .ok_or_else(|| format!("unknown mode '{value}' (expected 'development' or 'production')"))
}

fn parse_time(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp '{value}': {e}"))
}
