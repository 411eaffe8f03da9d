// src/application/dto/categories.rs
use crate::domain::category::Category;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.to_string(),
            slug: category.slug.into(),
        }
    }
}
