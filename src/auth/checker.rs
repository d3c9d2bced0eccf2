//! Session probe implementation
//!
//! One GET against a fixed endpoint classifies the session. The probe never
//! returns an error: whatever goes wrong, the answer the caller needs is
//! "not authenticated".

use super::types::{AuthStatus, ProbeFailure, SessionMarker};
use crate::http::HttpClient;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Endpoint probed to determine session state
pub const AUTH_CHECK_ENDPOINT: &str = "/auth/v1/check/";

/// Auth check response body
#[derive(Debug, Deserialize)]
struct CheckResponse {
    /// Absent field is treated the same as an explicit `false`
    #[serde(default)]
    authenticated: bool,
    #[serde(default)]
    username: Option<String>,
}

/// Probes the session state of the transport's cookie jar
pub struct SessionAuthChecker {
    http: Arc<HttpClient>,
}

impl SessionAuthChecker {
    /// Create a checker over the given transport
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Check whether the current session is authenticated.
    ///
    /// Issues exactly one GET to [`AUTH_CHECK_ENDPOINT`] with session
    /// credentials attached by the transport. Returns
    /// [`AuthStatus::Authenticated`] only for a success response whose body
    /// carries `authenticated: true`. Error statuses, transport failures and
    /// undecodable bodies all collapse to [`AuthStatus::Unauthenticated`];
    /// the cause is logged, never thrown. Session state is never mutated.
    pub async fn check_session(&self) -> AuthStatus {
        match self.http.get_json::<CheckResponse>(AUTH_CHECK_ENDPOINT).await {
            Ok(body) if body.authenticated => {
                debug!(username = body.username.as_deref(), "Session authenticated");
                AuthStatus::Authenticated(SessionMarker::new(body.username))
            }
            Ok(_) => {
                debug!("Session not authenticated");
                AuthStatus::Unauthenticated
            }
            Err(err) => {
                match ProbeFailure::classify(&err) {
                    ProbeFailure::Status(status) => {
                        debug!("Auth check rejected with HTTP {status}");
                    }
                    ProbeFailure::NoResponse => {
                        warn!("Auth check failed - network error: {err}");
                    }
                    ProbeFailure::Other => {
                        warn!("Auth check failed: {err}");
                    }
                }
                AuthStatus::Unauthenticated
            }
        }
    }
}

impl std::fmt::Debug for SessionAuthChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionAuthChecker").finish_non_exhaustive()
    }
}

/// Target of a logout navigation.
///
/// Logout is not an API call: the consuming application navigates to this
/// URL and the identity provider terminates the session. No local cleanup
/// exists because no session state is held client-side.
pub fn logout_url(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!("{base}/logout/")
}
