// src/domain/dessert/repository.rs
use crate::domain::dessert::entity::{Dessert, DessertUpdate, NewDessert, NewRecipeStep, RecipeStep};
use crate::domain::dessert::value_objects::DessertId;
use crate::domain::errors::DomainResult;
use crate::domain::profile::ProfileId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct DessertListFilter {
    pub category_slug: Option<Slug>,
    pub author: Option<ProfileId>,
    pub published_only: bool,
}

#[async_trait]
pub trait DessertWriteRepository: Send + Sync {
    /// Inserts the dessert, its category links, and its steps in one
    /// transaction.
    async fn insert(&self, dessert: NewDessert, steps: Vec<NewRecipeStep>) -> DomainResult<Dessert>;

    /// Replaces every field, the category links, and the step collection
    /// in one transaction.
    async fn update(&self, update: DessertUpdate, steps: Vec<NewRecipeStep>)
    -> DomainResult<Dessert>;

    /// Steps and comments cascade with the dessert.
    async fn delete(&self, id: DessertId) -> DomainResult<()>;
}

#[async_trait]
pub trait DessertReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Dessert>>;

    /// Offset-paginated listing plus the total row count for the filter.
    async fn list_page(
        &self,
        filter: &DessertListFilter,
        limit: u32,
        offset: u32,
    ) -> DomainResult<(Vec<Dessert>, u64)>;

    async fn list_steps(&self, id: DessertId) -> DomainResult<Vec<RecipeStep>>;
}
