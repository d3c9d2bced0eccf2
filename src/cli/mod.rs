//! CLI module
//!
//! Command-line interface for exercising the client.
//!
//! # Commands
//!
//! - `check` - Probe the current session
//! - `regions` - Fetch all regions
//! - `region-stats` - Fetch region statistics
//! - `valid-parkings` - Fetch valid parkings
//! - `logout-url` - Print the logout navigation target

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
