// src/application/dto/comments.rs
use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i64,
    pub text: String,
    pub profile_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            text: comment.text,
            profile_id: comment.profile_id.into(),
            created_at: comment.created_at,
        }
    }
}
