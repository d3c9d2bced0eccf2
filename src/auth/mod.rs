//! Session authentication module
//!
//! The session lives in the browser-style cookie jar owned by the transport;
//! this module only asks the server whether that session is valid. It never
//! reads, stores, or refreshes credentials.
//!
//! All probe outcomes are delivered as an [`AuthStatus`] value; the probe
//! never returns an error to its caller.

mod checker;
mod types;

pub use checker::{logout_url, SessionAuthChecker, AUTH_CHECK_ENDPOINT};
pub use types::{AuthStatus, ProbeFailure, SessionMarker};

#[cfg(test)]
mod tests;
