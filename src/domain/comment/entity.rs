// src/domain/comment/entity.rs
use crate::domain::dessert::DessertId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::ProfileId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub profile_id: ProfileId,
    pub dessert_id: DessertId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub text: String,
    pub profile_id: ProfileId,
    pub dessert_id: DessertId,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    pub fn new(
        text: impl Into<String>,
        profile_id: ProfileId,
        dessert_id: DessertId,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::validation("text", "comment cannot be empty"));
        }
        Ok(Self {
            text,
            profile_id,
            dessert_id,
            created_at,
        })
    }
}
