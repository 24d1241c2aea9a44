//! HTTP client pre-configured with the API base URL.

use anyhow::Result;
use log::debug;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::check_failure;

/// Reusable HTTP client bound to a fixed base URL.
///
/// All request methods take a path relative to that base URL. The client
/// holds no per-request state and is cheap to clone; clones share the
/// underlying connection pool, so one instance serves every concurrent
/// call site in the process.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a client for the given base URL.
    ///
    /// No network I/O happens here; connections are established lazily,
    /// per request.
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves a relative path against the base URL.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}...", url);

        let response = self.client.get(&url).send().await.map_err(check_failure)?;
        let response = response.error_for_status().map_err(check_failure)?;

        response.json::<T>().await.map_err(check_failure)
    }

    /// Performs a GET request with query parameters and deserializes the
    /// JSON response.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.url(path);
        debug!("GET {} with query {:?}...", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(check_failure)?;
        let response = response.error_for_status().map_err(check_failure)?;

        response.json::<T>().await.map_err(check_failure)
    }

    /// Performs a POST request with a JSON body and deserializes the JSON
    /// response.
    #[tracing::instrument(skip(self, body))]
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("POST {}...", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(check_failure)?;
        let response = response.error_for_status().map_err(check_failure)?;

        response.json::<T>().await.map_err(check_failure)
    }

    /// Performs a PUT request with a JSON body and deserializes the JSON
    /// response.
    #[tracing::instrument(skip(self, body))]
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("PUT {}...", url);

        let response = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(check_failure)?;
        let response = response.error_for_status().map_err(check_failure)?;

        response.json::<T>().await.map_err(check_failure)
    }

    /// Performs a DELETE request, discarding any response body.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        debug!("DELETE {}...", url);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(check_failure)?;
        response.error_for_status().map_err(check_failure)?;

        Ok(())
    }
}
