//! Auth status types
//!
//! The probe result is deliberately two-state: the caller's only decision is
//! "show login or not", so every failure mode collapses to `Unauthenticated`.
//! The failure cause survives as [`ProbeFailure`] for diagnostics only.

use crate::error::Error;

/// Opaque evidence that the current session is authenticated.
///
/// This is not a credential. The session itself lives in the transport's
/// cookie jar; the marker only carries the server-reported username for
/// display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMarker {
    username: Option<String>,
}

impl SessionMarker {
    pub(crate) fn new(username: Option<String>) -> Self {
        Self { username }
    }

    /// Username reported by the auth check endpoint, if any
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

/// Result of a session probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    /// The session is authenticated
    Authenticated(SessionMarker),
    /// No authenticated session (covers explicit rejection, missing
    /// session, and probe failures alike)
    Unauthenticated,
}

impl AuthStatus {
    /// Whether the session is authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Diagnostic classification of a failed probe.
///
/// Never surfaced to callers. If finer-grained handling is ever needed,
/// widen [`AuthStatus`] to carry this instead of changing the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeFailure {
    /// The server responded with an error status (401, 403, ...)
    Status(u16),
    /// The request produced no response at all (network/DNS/timeout)
    NoResponse,
    /// Anything else (decode failure, unexpected error)
    Other,
}

impl ProbeFailure {
    /// Classify a probe error by its failure channel
    pub fn classify(err: &Error) -> Self {
        match err {
            Error::HttpStatus { status, .. } => Self::Status(*status),
            Error::Http(e) => match e.status() {
                Some(status) => Self::Status(status.as_u16()),
                None => Self::NoResponse,
            },
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_auth_status_predicates() {
        let status = AuthStatus::Authenticated(SessionMarker::new(Some("monitor".to_string())));
        assert!(status.is_authenticated());
        assert!(!AuthStatus::Unauthenticated.is_authenticated());
    }

    #[test]
    fn test_session_marker_username() {
        let marker = SessionMarker::new(Some("monitor".to_string()));
        assert_eq!(marker.username(), Some("monitor"));

        let marker = SessionMarker::new(None);
        assert_eq!(marker.username(), None);
    }

    #[test]
    fn test_probe_failure_classify() {
        assert_eq!(
            ProbeFailure::classify(&Error::http_status(401, "")),
            ProbeFailure::Status(401)
        );
        assert_eq!(
            ProbeFailure::classify(&Error::http_status(403, "forbidden")),
            ProbeFailure::Status(403)
        );
        assert_eq!(
            ProbeFailure::classify(&Error::config("bad")),
            ProbeFailure::Other
        );
        assert_eq!(
            ProbeFailure::classify(&Error::malformed_page("no items")),
            ProbeFailure::Other
        );
    }
}
