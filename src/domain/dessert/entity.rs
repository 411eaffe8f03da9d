// src/domain/dessert/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::dessert::value_objects::{CookingTime, DessertId, DessertTitle, RecipeStepId};
use crate::domain::profile::{PhotoRef, ProfileId};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Dessert {
    pub id: DessertId,
    pub title: DessertTitle,
    pub slug: Slug,
    pub ingredients: String,
    pub description: String,
    pub photo: PhotoRef,
    pub cooking_time: CookingTime,
    pub published: bool,
    pub profile_id: ProfileId,
    pub categories: Vec<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One instructional unit of a recipe, ordered by insertion id.
#[derive(Debug, Clone)]
pub struct RecipeStep {
    pub id: RecipeStepId,
    pub dessert_id: DessertId,
    pub text: String,
    pub image: PhotoRef,
}

#[derive(Debug, Clone)]
pub struct NewRecipeStep {
    pub text: String,
    pub image: PhotoRef,
}

#[derive(Debug, Clone)]
pub struct NewDessert {
    pub title: DessertTitle,
    pub slug: Slug,
    pub ingredients: String,
    pub description: String,
    pub photo: PhotoRef,
    pub cooking_time: CookingTime,
    pub published: bool,
    pub profile_id: ProfileId,
    pub categories: Vec<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full-field replacement, matching the edit form which posts every field.
/// The slug is regenerated on every save, so the public URL changes on
/// edit.
#[derive(Debug, Clone)]
pub struct DessertUpdate {
    pub id: DessertId,
    pub title: DessertTitle,
    pub slug: Slug,
    pub ingredients: String,
    pub description: String,
    pub photo: PhotoRef,
    pub cooking_time: CookingTime,
    pub categories: Vec<CategoryId>,
    pub updated_at: DateTime<Utc>,
}
