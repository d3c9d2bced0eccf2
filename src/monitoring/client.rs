//! Monitoring service facade
//!
//! Thin wrappers over the page fetcher: each resource entry point computes
//! its initial URL from the endpoint path and the optional instant filter,
//! then delegates the traversal.

use super::endpoints;
use super::types::ResourceQuery;
use crate::auth::{self, AuthStatus, SessionAuthChecker};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::{Page, PageFetcher};
use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

/// Client for the monitoring service's paginated resources
pub struct MonitoringClient {
    http: Arc<HttpClient>,
    fetcher: PageFetcher,
    auth: SessionAuthChecker,
    base_url: String,
}

impl MonitoringClient {
    /// Build a client from a validated configuration.
    ///
    /// Malformed configuration is the one condition reported as a returned
    /// error; every runtime outcome flows through callbacks or status
    /// values.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let http_config = HttpClientConfig::builder()
            .base_url(&config.base_url)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .build();

        Ok(Self::with_http(
            Arc::new(HttpClient::with_config(http_config)),
            &config.base_url,
        ))
    }

    /// Build a client over an existing transport (used with fake servers in
    /// tests)
    pub fn with_http(http: Arc<HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher: PageFetcher::new(Arc::clone(&http)),
            auth: SessionAuthChecker::new(Arc::clone(&http)),
            http,
            base_url: base_url.into(),
        }
    }

    /// The transport this client issues requests through
    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }

    /// Check whether the current session is authenticated
    pub async fn check_session(&self) -> AuthStatus {
        self.auth.check_session().await
    }

    /// Target of a logout navigation (not an API call)
    pub fn logout_url(&self) -> String {
        auth::logout_url(&self.base_url)
    }

    /// Fetch all pages of regions
    pub async fn fetch_regions<P, E>(&self, time: Option<DateTime<Utc>>, on_page: P, on_error: E)
    where
        P: FnMut(Page<JsonValue>),
        E: FnOnce(Error),
    {
        self.fetch_resource(endpoints::REGIONS, time, on_page, on_error)
            .await;
    }

    /// Fetch all pages of region statistics
    pub async fn fetch_region_statistics<P, E>(
        &self,
        time: Option<DateTime<Utc>>,
        on_page: P,
        on_error: E,
    ) where
        P: FnMut(Page<JsonValue>),
        E: FnOnce(Error),
    {
        self.fetch_resource(endpoints::REGION_STATISTICS, time, on_page, on_error)
            .await;
    }

    /// Fetch all pages of valid parkings
    pub async fn fetch_valid_parkings<P, E>(
        &self,
        time: Option<DateTime<Utc>>,
        on_page: P,
        on_error: E,
    ) where
        P: FnMut(Page<JsonValue>),
        E: FnOnce(Error),
    {
        self.fetch_resource(endpoints::VALID_PARKINGS, time, on_page, on_error)
            .await;
    }

    async fn fetch_resource<P, E>(
        &self,
        endpoint: &str,
        time: Option<DateTime<Utc>>,
        on_page: P,
        on_error: E,
    ) where
        P: FnMut(Page<JsonValue>),
        E: FnOnce(Error),
    {
        let query = ResourceQuery::new(endpoint).with_time(time);
        self.fetcher
            .fetch_all(&query.initial_url(), on_page, on_error)
            .await;
    }
}

impl std::fmt::Debug for MonitoringClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitoringClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
