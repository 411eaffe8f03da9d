// src/domain/category/repository.rs
use crate::domain::category::entity::{Category, CategoryId, NewCategory};
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;

    /// All categories, ordered by name.
    async fn list(&self) -> DomainResult<Vec<Category>>;

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;

    /// Resolves a set of ids; unknown ids are simply absent from the
    /// result, the caller decides whether that is an error.
    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>>;
}
