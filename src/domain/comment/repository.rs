// src/domain/comment/repository.rs
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::dessert::DessertId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    /// Comments for one dessert, oldest first.
    async fn list_for_dessert(&self, dessert_id: DessertId) -> DomainResult<Vec<Comment>>;
}
