// src/infrastructure/repositories/postgres_dessert.rs
use super::map_sqlx;
use crate::domain::category::CategoryId;
use crate::domain::dessert::{
    CookingTime, Dessert, DessertId, DessertListFilter, DessertReadRepository, DessertTitle,
    DessertUpdate, DessertWriteRepository, NewDessert, NewRecipeStep, RecipeStep, RecipeStepId,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::{PhotoRef, ProfileId};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};
use std::collections::HashMap;

const DESSERT_COLUMNS: &str = "id, title, slug, ingredients, description, photo, \
     cooking_time, published, profile_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresDessertRepository {
    pool: PgPool,
}

impl PostgresDessertRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DessertRow {
    id: i64,
    title: String,
    slug: String,
    ingredients: String,
    description: String,
    photo: String,
    cooking_time: i16,
    published: bool,
    profile_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn into_dessert(row: DessertRow, categories: Vec<CategoryId>) -> DomainResult<Dessert> {
    Ok(Dessert {
        id: DessertId::new(row.id)?,
        title: DessertTitle::new(row.title)?,
        slug: Slug::new(row.slug)?,
        ingredients: row.ingredients,
        description: row.description,
        photo: PhotoRef::new(row.photo)?,
        cooking_time: CookingTime::from_raw(i64::from(row.cooking_time))?,
        published: row.published,
        profile_id: ProfileId::new(row.profile_id)?,
        categories,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[derive(Debug, FromRow)]
struct StepRow {
    id: i64,
    dessert_id: i64,
    text: String,
    image: String,
}

impl TryFrom<StepRow> for RecipeStep {
    type Error = DomainError;

    fn try_from(row: StepRow) -> Result<Self, Self::Error> {
        Ok(RecipeStep {
            id: RecipeStepId(row.id),
            dessert_id: DessertId::new(row.dessert_id)?,
            text: row.text,
            image: PhotoRef::new(row.image)?,
        })
    }
}

async fn link_categories(
    tx: &mut Transaction<'_, Postgres>,
    dessert_id: i64,
    categories: &[CategoryId],
) -> DomainResult<()> {
    for category in categories {
        sqlx::query("INSERT INTO dessert_categories (dessert_id, category_id) VALUES ($1, $2)")
            .bind(dessert_id)
            .bind(i64::from(*category))
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

async fn insert_steps(
    tx: &mut Transaction<'_, Postgres>,
    dessert_id: i64,
    steps: &[NewRecipeStep],
) -> DomainResult<()> {
    for step in steps {
        sqlx::query("INSERT INTO recipe_steps (dessert_id, text, image) VALUES ($1, $2, $3)")
            .bind(dessert_id)
            .bind(&step.text)
            .bind(step.image.as_str())
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

fn push_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a DessertListFilter) {
    builder.push(" WHERE TRUE");
    if filter.published_only {
        builder.push(" AND d.published");
    }
    if let Some(author) = filter.author {
        builder.push(" AND d.profile_id = ").push_bind(i64::from(author));
    }
    if let Some(category) = &filter.category_slug {
        builder
            .push(
                " AND EXISTS (SELECT 1 FROM dessert_categories dc \
                 JOIN categories c ON c.id = dc.category_id \
                 WHERE dc.dessert_id = d.id AND c.slug = ",
            )
            .push_bind(category.as_str())
            .push(")");
    }
}

impl PostgresDessertRepository {
    async fn category_ids(&self, dessert_id: i64) -> DomainResult<Vec<CategoryId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT category_id FROM dessert_categories
             WHERE dessert_id = $1 ORDER BY category_id",
        )
        .bind(dessert_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(CategoryId::new).collect()
    }
}

#[async_trait]
impl DessertWriteRepository for PostgresDessertRepository {
    async fn insert(
        &self,
        dessert: NewDessert,
        steps: Vec<NewRecipeStep>,
    ) -> DomainResult<Dessert> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, DessertRow>(&format!(
            "INSERT INTO desserts (title, slug, ingredients, description, photo,
                                   cooking_time, published, profile_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {DESSERT_COLUMNS}"
        ))
        .bind(dessert.title.as_str())
        .bind(dessert.slug.as_str())
        .bind(&dessert.ingredients)
        .bind(&dessert.description)
        .bind(dessert.photo.as_str())
        .bind(i16::try_from(dessert.cooking_time.minutes()).unwrap_or(i16::MAX))
        .bind(dessert.published)
        .bind(i64::from(dessert.profile_id))
        .bind(dessert.created_at)
        .bind(dessert.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        link_categories(&mut tx, row.id, &dessert.categories).await?;
        insert_steps(&mut tx, row.id, &steps).await?;

        tx.commit().await.map_err(map_sqlx)?;

        into_dessert(row, dessert.categories)
    }

    async fn update(
        &self,
        update: DessertUpdate,
        steps: Vec<NewRecipeStep>,
    ) -> DomainResult<Dessert> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, DessertRow>(&format!(
            "UPDATE desserts
             SET title = $1, slug = $2, ingredients = $3, description = $4,
                 photo = $5, cooking_time = $6, updated_at = $7
             WHERE id = $8
             RETURNING {DESSERT_COLUMNS}"
        ))
        .bind(update.title.as_str())
        .bind(update.slug.as_str())
        .bind(&update.ingredients)
        .bind(&update.description)
        .bind(update.photo.as_str())
        .bind(i16::try_from(update.cooking_time.minutes()).unwrap_or(i16::MAX))
        .bind(update.updated_at)
        .bind(i64::from(update.id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("dessert not found".into()))?;

        // Category links and steps are replaced wholesale with the form data.
        sqlx::query("DELETE FROM dessert_categories WHERE dessert_id = $1")
            .bind(row.id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        link_categories(&mut tx, row.id, &update.categories).await?;

        sqlx::query("DELETE FROM recipe_steps WHERE dessert_id = $1")
            .bind(row.id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        insert_steps(&mut tx, row.id, &steps).await?;

        tx.commit().await.map_err(map_sqlx)?;

        into_dessert(row, update.categories)
    }

    async fn delete(&self, id: DessertId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM desserts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("dessert not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl DessertReadRepository for PostgresDessertRepository {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Dessert>> {
        let row = sqlx::query_as::<_, DessertRow>(&format!(
            "SELECT {DESSERT_COLUMNS} FROM desserts WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => {
                let categories = self.category_ids(row.id).await?;
                into_dessert(row, categories).map(Some)
            }
            None => Ok(None),
        }
    }

    async fn list_page(
        &self,
        filter: &DessertListFilter,
        limit: u32,
        offset: u32,
    ) -> DomainResult<(Vec<Dessert>, u64)> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(1) FROM desserts d");
        push_filter(&mut count_builder, filter);
        let total = count_builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT d.id, d.title, d.slug, d.ingredients, d.description, d.photo, \
             d.cooking_time, d.published, d.profile_id, d.created_at, d.updated_at \
             FROM desserts d",
        );
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY d.id DESC");
        builder.push(" LIMIT ").push_bind(i64::from(limit));
        builder.push(" OFFSET ").push_bind(i64::from(offset));

        let rows = builder
            .build_query_as::<DessertRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        // One pass over the join table for the whole page.
        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let links = sqlx::query_as::<_, (i64, i64)>(
            "SELECT dessert_id, category_id FROM dessert_categories
             WHERE dessert_id = ANY($1) ORDER BY category_id",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut by_dessert: HashMap<i64, Vec<CategoryId>> = HashMap::new();
        for (dessert_id, category_id) in links {
            by_dessert
                .entry(dessert_id)
                .or_default()
                .push(CategoryId::new(category_id)?);
        }

        let desserts = rows
            .into_iter()
            .map(|row| {
                let categories = by_dessert.remove(&row.id).unwrap_or_default();
                into_dessert(row, categories)
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok((desserts, total as u64))
    }

    async fn list_steps(&self, id: DessertId) -> DomainResult<Vec<RecipeStep>> {
        let rows = sqlx::query_as::<_, StepRow>(
            "SELECT id, dessert_id, text, image FROM recipe_steps
             WHERE dessert_id = $1 ORDER BY id",
        )
        .bind(i64::from(id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(RecipeStep::try_from).collect()
    }
}
