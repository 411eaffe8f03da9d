// src/application/dto/auth.rs
use crate::application::ports::sessions::SessionRecord;
use crate::domain::{profile::ProfileId, user::UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The acting identity resolved from a session token, carried through
/// every command and query that needs authorization.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub profile_id: ProfileId,
    pub username: String,
    pub is_staff: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDto {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

impl SessionDto {
    pub fn from_record(record: SessionRecord, now: DateTime<Utc>) -> Self {
        let expires_in = record
            .expires_at
            .signed_duration_since(now)
            .num_seconds()
            .max(0);
        Self {
            token: record.token,
            expires_at: record.expires_at,
            expires_in,
        }
    }
}
