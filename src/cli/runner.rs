//! CLI command execution

use super::commands::{Cli, Commands, OutputFormat};
use crate::auth::AuthStatus;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::monitoring::MonitoringClient;
use crate::pagination::Page;
use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use serde_json::json;

/// Executes parsed CLI commands
pub struct Runner {
    cli: Cli,
}

enum Resource {
    Regions,
    RegionStatistics,
    ValidParkings,
}

impl Runner {
    /// Create a runner for the parsed CLI
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve the effective client configuration.
    ///
    /// Environment first, then `--mode` (resets to that mode's defaults),
    /// then `--base-url` and `--timeout` on top.
    pub fn config(&self) -> ClientConfig {
        let mut config = match self.cli.mode {
            Some(mode) => ClientConfig::for_mode(mode),
            None => ClientConfig::from_env(),
        };
        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(timeout) = self.cli.timeout {
            config.timeout_seconds = timeout;
        }
        config
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        let config = self.config();
        let client = MonitoringClient::new(&config)?;

        match &self.cli.command {
            Commands::Check => self.run_check(&client).await,
            Commands::Regions { time } => self.fetch(&client, Resource::Regions, *time).await,
            Commands::RegionStats { time } => {
                self.fetch(&client, Resource::RegionStatistics, *time).await
            }
            Commands::ValidParkings { time } => {
                self.fetch(&client, Resource::ValidParkings, *time).await
            }
            Commands::LogoutUrl => {
                println!("{}", client.logout_url());
                Ok(())
            }
        }
    }

    async fn run_check(&self, client: &MonitoringClient) -> Result<()> {
        let status = client.check_session().await;
        match (self.cli.format, &status) {
            (OutputFormat::Json, AuthStatus::Authenticated(marker)) => {
                println!(
                    "{}",
                    json!({ "authenticated": true, "username": marker.username() })
                );
            }
            (OutputFormat::Json, AuthStatus::Unauthenticated) => {
                println!("{}", json!({ "authenticated": false }));
            }
            (OutputFormat::Pretty, AuthStatus::Authenticated(marker)) => {
                match marker.username() {
                    Some(name) => println!("Authenticated as {name}"),
                    None => println!("Authenticated"),
                }
            }
            (OutputFormat::Pretty, AuthStatus::Unauthenticated) => {
                println!("Not authenticated");
            }
        }
        Ok(())
    }

    async fn fetch(
        &self,
        client: &MonitoringClient,
        resource: Resource,
        time: Option<DateTime<Utc>>,
    ) -> Result<()> {
        let format = self.cli.format;
        let mut pages = 0usize;
        let mut total = 0usize;
        let mut failure: Option<Error> = None;

        let on_page = |page: Page<JsonValue>| {
            pages += 1;
            total += page.len();
            match format {
                OutputFormat::Json => {
                    for item in &page.items {
                        println!("{item}");
                    }
                }
                OutputFormat::Pretty => {
                    println!("page {pages}: {} items", page.len());
                }
            }
        };
        let on_error = |err: Error| failure = Some(err);

        match resource {
            Resource::Regions => client.fetch_regions(time, on_page, on_error).await,
            Resource::RegionStatistics => {
                client.fetch_region_statistics(time, on_page, on_error).await;
            }
            Resource::ValidParkings => client.fetch_valid_parkings(time, on_page, on_error).await,
        }

        match failure {
            // Pages already printed stand; the failure decides the exit code.
            Some(err) => Err(err),
            None => {
                if format == OutputFormat::Pretty {
                    println!("fetched {total} items in {pages} pages");
                }
                Ok(())
            }
        }
    }
}
