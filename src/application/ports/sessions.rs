// src/application/ports/sessions.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Server-side session record keyed by an opaque bearer token. The token
/// itself carries no claims; everything is looked up per request.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub token: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(
        &self,
        user_id: i64,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> ApplicationResult<SessionRecord>;

    async fn find(&self, token: &str) -> ApplicationResult<Option<SessionRecord>>;

    async fn revoke(&self, token: &str) -> ApplicationResult<()>;
}
