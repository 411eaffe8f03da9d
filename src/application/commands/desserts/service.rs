// src/application/commands/desserts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        category::{CategoryId, CategoryRepository},
        dessert::{DessertReadRepository, DessertWriteRepository, NewRecipeStep},
        profile::PhotoRef,
        slug::SlugService,
    },
};

pub struct DessertCommandService {
    pub(super) write_repo: Arc<dyn DessertWriteRepository>,
    pub(super) read_repo: Arc<dyn DessertReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

#[derive(Debug, Clone)]
pub struct RecipeStepInput {
    pub text: String,
    pub image: String,
}

impl DessertCommandService {
    pub fn new(
        write_repo: Arc<dyn DessertWriteRepository>,
        read_repo: Arc<dyn DessertReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slug_service,
            clock,
        }
    }

    /// Checks every referenced category exists before any write happens.
    pub(super) async fn resolve_categories(
        &self,
        ids: Vec<i64>,
    ) -> ApplicationResult<(Vec<CategoryId>, Vec<CategoryDto>)> {
        let mut category_ids = Vec::with_capacity(ids.len());
        for id in ids {
            category_ids.push(CategoryId::new(id)?);
        }

        let found = self.category_repo.find_by_ids(&category_ids).await?;
        if found.len() != category_ids.len() {
            return Err(ApplicationError::validation(
                "categories",
                "unknown category",
            ));
        }

        let dtos = found.into_iter().map(CategoryDto::from).collect();
        Ok((category_ids, dtos))
    }

    pub(super) fn build_steps(
        steps: Vec<RecipeStepInput>,
    ) -> ApplicationResult<Vec<NewRecipeStep>> {
        steps
            .into_iter()
            .map(|step| {
                let text = require_text("steps", step.text)?;
                let image = PhotoRef::new(step.image).map_err(ApplicationError::from)?;
                Ok(NewRecipeStep { text, image })
            })
            .collect()
    }
}

pub(super) fn require_text(field: &'static str, value: String) -> ApplicationResult<String> {
    if value.trim().is_empty() {
        Err(ApplicationError::validation(
            field,
            format!("{field} cannot be empty"),
        ))
    } else {
        Ok(value)
    }
}
