use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use super::types::{NoteStats, SearchResponse, StatField, User, UserUpdate};
use crate::http::HttpClient;

/// Operations the NoteHub backend exposes to this client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoteHubApi: Send + Sync {
    async fn search_notes(&self, keyword: &str) -> Result<SearchResponse>;
    async fn note_stats(&self, note_id: u64) -> Result<NoteStats>;
    async fn bump_stat(&self, note_id: u64, field: StatField, delta: i64) -> Result<NoteStats>;
    async fn user(&self, user_id: u64) -> Result<User>;
    async fn update_user(&self, user_id: u64, update: &UserUpdate) -> Result<User>;
    async fn delete_user(&self, user_id: u64) -> Result<()>;
    fn base_url(&self) -> &str;
}

/// Typed client for the NoteHub REST API.
///
/// All paths are relative; the configured base URL is applied by the
/// underlying [`HttpClient`].
#[derive(Debug)]
pub struct NoteHub {
    http: HttpClient,
}

impl NoteHub {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl NoteHubApi for NoteHub {
    #[tracing::instrument(skip(self))]
    async fn search_notes(&self, keyword: &str) -> Result<SearchResponse> {
        debug!("Searching notes for {:?}...", keyword);
        self.http
            .get_json_with_query("/notes/search", &[("keyword", keyword)])
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn note_stats(&self, note_id: u64) -> Result<NoteStats> {
        self.http
            .get_json(&format!("/notes/{}/stats", note_id))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn bump_stat(&self, note_id: u64, field: StatField, delta: i64) -> Result<NoteStats> {
        debug!("Bumping {} of note {} by {}...", field, note_id, delta);
        self.http
            .post_json(
                &format!("/notes/{}/stats/{}", note_id, field),
                &serde_json::json!({ "delta": delta }),
            )
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn user(&self, user_id: u64) -> Result<User> {
        self.http.get_json(&format!("/users/{}", user_id)).await
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_user(&self, user_id: u64, update: &UserUpdate) -> Result<User> {
        self.http
            .put_json(&format!("/admin/users/{}", user_id), update)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_user(&self, user_id: u64) -> Result<()> {
        self.http.delete(&format!("/admin/users/{}", user_id)).await
    }

    fn base_url(&self) -> &str {
        self.http.base_url()
    }
}
