// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use crate::domain::dessert::DessertId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::ProfileId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    text: String,
    profile_id: i64,
    dessert_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId(row.id),
            text: row.text,
            profile_id: ProfileId::new(row.profile_id)?,
            dessert_id: DessertId::new(row.dessert_id)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (text, profile_id, dessert_id, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, text, profile_id, dessert_id, created_at",
        )
        .bind(&comment.text)
        .bind(i64::from(comment.profile_id))
        .bind(i64::from(comment.dessert_id))
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn list_for_dessert(&self, dessert_id: DessertId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, text, profile_id, dessert_id, created_at
             FROM comments WHERE dessert_id = $1 ORDER BY id",
        )
        .bind(i64::from(dessert_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
