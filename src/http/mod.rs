//! HTTP transport module
//!
//! Session-aware HTTP client used by the auth probe and the page fetcher.
//!
//! # Features
//!
//! - **Cookie jar**: session credentials attached automatically to every
//!   request, never read or stored by this crate
//! - **Base URL joining**: endpoint paths resolved against a configurable
//!   base; absolute URLs (pagination links) pass through untouched
//! - **Error classification**: HTTP error statuses vs. no-response failures

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
