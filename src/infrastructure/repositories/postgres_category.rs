// src/infrastructure/repositories/postgres_category.rs
use super::map_sqlx;
use crate::domain::category::{Category, CategoryId, CategoryName, CategoryRepository, NewCategory};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: Slug::new(row.slug)?,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, slug) VALUES ($1, $2)
             RETURNING id, name, slug",
        )
        .bind(category.name.as_str())
        .bind(category.slug.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug FROM categories WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        let raw_ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug FROM categories WHERE id = ANY($1) ORDER BY name",
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
