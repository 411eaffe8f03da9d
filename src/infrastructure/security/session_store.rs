use crate::application::ApplicationResult;
use crate::application::ports::sessions::{SessionRecord, SessionStore};
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

/// Process-local session store. Tokens are random UUIDs; a record is the
/// only proof a session exists, so restarting the process logs everyone
/// out. Good enough for a single-node deployment.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, SessionRecord>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(
        &self,
        user_id: i64,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> ApplicationResult<SessionRecord> {
        let ttl = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
        let record = SessionRecord {
            token: Uuid::new_v4().to_string(),
            user_id,
            created_at: now,
            expires_at: now + ttl,
        };

        let mut guard = self.sessions.lock().unwrap();
        guard.insert(record.token.clone(), record.clone());
        Ok(record)
    }

    async fn find(&self, token: &str) -> ApplicationResult<Option<SessionRecord>> {
        let guard = self.sessions.lock().unwrap();
        Ok(guard.get(token).cloned())
    }

    async fn revoke(&self, token: &str) -> ApplicationResult<()> {
        let mut guard = self.sessions.lock().unwrap();
        guard.remove(token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn created_session_is_findable_until_revoked() {
        let store = InMemorySessionStore::new();
        let record = store
            .create(7, Utc::now(), Duration::from_secs(60))
            .await
            .unwrap();

        let found = store.find(&record.token).await.unwrap().unwrap();
        assert_eq!(found.user_id, 7);

        store.revoke(&record.token).await.unwrap();
        assert!(store.find(&record.token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn tokens_are_unique_per_session() {
        let store = InMemorySessionStore::new();
        let a = store
            .create(1, Utc::now(), Duration::from_secs(60))
            .await
            .unwrap();
        let b = store
            .create(1, Utc::now(), Duration::from_secs(60))
            .await
            .unwrap();
        assert_ne!(a.token, b.token);
    }
}
