// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # parkmon-client
//!
//! Session-aware client for a parking monitoring service exposing paginated
//! REST resources (regions, region statistics, valid parkings) behind a
//! session-cookie authentication boundary.
//!
//! ## Features
//!
//! - **Session probe**: one request classifies the current session as
//!   authenticated or not, without ever exposing token material or throwing
//! - **Transparent pagination**: server-driven `next` links followed one
//!   page at a time, each page delivered to a callback in arrival order
//! - **Cookie-based auth**: the transport's cookie jar carries the session;
//!   nothing in this crate reads or stores credentials
//! - **Point-in-time queries**: every resource accepts an optional ISO-8601
//!   instant filter
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use parkmon_client::{ClientConfig, MonitoringClient};
//!
//! #[tokio::main]
//! async fn main() -> parkmon_client::Result<()> {
//!     let client = MonitoringClient::new(&ClientConfig::from_env())?;
//!
//!     if !client.check_session().await.is_authenticated() {
//!         eprintln!("not authenticated");
//!         return Ok(());
//!     }
//!
//!     client
//!         .fetch_regions(
//!             None,
//!             |page| println!("{} regions", page.len()),
//!             |err| eprintln!("fetch failed: {err}"),
//!         )
//!         .await;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      MonitoringClient                       │
//! │  check_session() → AuthStatus     logout_url() → String    │
//! │  fetch_{regions,region_statistics,valid_parkings}(time, …)  │
//! └───────────────┬─────────────────────────────┬───────────────┘
//!                 │                             │
//!      ┌──────────┴─────────┐        ┌──────────┴──────────┐
//!      │ SessionAuthChecker │        │     PageFetcher     │
//!      │ probe → AuthStatus │        │ follow next links,  │
//!      │ failures collapse  │        │ deliver pages in    │
//!      │ to Unauthenticated │        │ order via callbacks │
//!      └──────────┬─────────┘        └──────────┬──────────┘
//!                 │                             │
//!                 └──────────┬──────────────────┘
//!                 ┌──────────┴─────────┐
//!                 │     HttpClient     │
//!                 │ cookie jar session │
//!                 └────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport with a session cookie jar
pub mod http;

/// Session authentication probe
pub mod auth;

/// Page traversal over server-driven pagination links
pub mod pagination;

/// Monitoring resource wrappers
pub mod monitoring;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::{AuthStatus, SessionAuthChecker, SessionMarker};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use monitoring::MonitoringClient;
pub use pagination::{Page, PageFetcher};
pub use types::RunMode;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
