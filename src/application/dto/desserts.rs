// src/application/dto/desserts.rs
use crate::application::dto::{CategoryDto, CommentDto};
use crate::domain::dessert::{Dessert, RecipeStep};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DessertDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub ingredients: String,
    pub description: String,
    pub photo: String,
    pub cooking_time: u16,
    pub published: bool,
    pub profile_id: i64,
    pub categories: Vec<CategoryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DessertDto {
    pub fn from_parts(dessert: Dessert, categories: Vec<CategoryDto>) -> Self {
        Self {
            id: dessert.id.into(),
            title: dessert.title.into(),
            slug: dessert.slug.into(),
            ingredients: dessert.ingredients,
            description: dessert.description,
            photo: dessert.photo.as_str().to_owned(),
            cooking_time: dessert.cooking_time.minutes(),
            published: dessert.published,
            profile_id: dessert.profile_id.into(),
            categories,
            created_at: dessert.created_at,
            updated_at: dessert.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeStepDto {
    pub id: i64,
    pub text: String,
    pub image: String,
}

impl From<RecipeStep> for RecipeStepDto {
    fn from(step: RecipeStep) -> Self {
        Self {
            id: step.id.into(),
            text: step.text,
            image: step.image.as_str().to_owned(),
        }
    }
}

/// Detail page payload: the dessert plus its ordered steps and comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DessertDetailDto {
    #[serde(flatten)]
    pub dessert: DessertDto,
    pub steps: Vec<RecipeStepDto>,
    pub comments: Vec<CommentDto>,
}
