//! Client configuration: API root and request timeout.
//!
//! Defaults point at the local development backend; both values are
//! environment-specific and overridable via CLI flags or `NOTEHUB_*`
//! variables rather than compiled in.

use std::time::Duration;

use anyhow::{Result, bail};
use log::debug;
use reqwest::Client;

use crate::api::NoteHub;
use crate::http::HttpClient;

/// API root of the local development backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

/// Milliseconds before an in-flight request is aborted.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

const USER_AGENT: &str = "notehub-cli";

/// Built client handle shared by every command.
///
/// Constructed once at startup; base URL and timeout are fixed for the
/// lifetime of the process.
#[derive(Debug)]
pub struct Config {
    pub api: NoteHub,
}

impl Config {
    /// Resolves configuration overrides and builds the shared client.
    ///
    /// Performs no network I/O. Fails only on unusable configuration or if
    /// the underlying client cannot be constructed.
    #[tracing::instrument(skip(api_url, timeout_ms))]
    pub fn new(api_url: Option<String>, timeout_ms: Option<u64>) -> Result<Self> {
        let base_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout_ms = timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS);

        if base_url.trim().is_empty() {
            bail!("API URL cannot be empty. Set --api-url or NOTEHUB_API_URL.");
        }
        if timeout_ms == 0 {
            bail!("Request timeout must be at least 1 millisecond.");
        }

        debug!("Using API {} with {}ms timeout", base_url, timeout_ms);

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;

        Ok(Self {
            api: NoteHub::new(HttpClient::new(client, &base_url)),
        })
    }
}
