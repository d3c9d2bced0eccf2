//! Resource query construction

use chrono::{DateTime, SecondsFormat, Utc};

/// An endpoint path plus an optional point-in-time filter.
///
/// Immutable once constructed; determines the initial page URL of a
/// traversal. The instant renders as an ISO-8601 timestamp with millisecond
/// precision in UTC (`2024-05-01T12:00:00.000Z`), the format the service
/// filters on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceQuery {
    endpoint: String,
    time: Option<DateTime<Utc>>,
}

impl ResourceQuery {
    /// Query for an endpoint with no filter
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            time: None,
        }
    }

    /// Set the optional point-in-time filter
    pub fn with_time(mut self, time: Option<DateTime<Utc>>) -> Self {
        self.time = time;
        self
    }

    /// The endpoint path this query targets
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Compute the initial page URL
    pub fn initial_url(&self) -> String {
        match self.time {
            Some(time) => format!(
                "{}?time={}",
                self.endpoint,
                time.to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
            None => self.endpoint.clone(),
        }
    }
}
