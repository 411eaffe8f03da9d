// src/application/commands/desserts/create.rs
use super::{DessertCommandService, RecipeStepInput, service::require_text};
use crate::{
    application::{
        dto::{AuthenticatedUser, DessertDto},
        error::ApplicationResult,
    },
    domain::{
        dessert::{CookingTime, DessertTitle, NewDessert},
        profile::PhotoRef,
    },
};

pub struct CreateDessertCommand {
    pub title: String,
    pub photo: String,
    pub ingredients: String,
    pub description: String,
    pub cooking_time: i64,
    pub categories: Vec<i64>,
    pub steps: Vec<RecipeStepInput>,
    pub published: bool,
}

impl DessertCommandService {
    pub async fn create_dessert(
        &self,
        actor: &AuthenticatedUser,
        command: CreateDessertCommand,
    ) -> ApplicationResult<DessertDto> {
        let title = DessertTitle::new(command.title)?;
        let photo = PhotoRef::new(command.photo)?;
        let ingredients = require_text("ingredients", command.ingredients)?;
        let description = require_text("description", command.description)?;
        let cooking_time = CookingTime::from_raw(command.cooking_time)?;

        let (category_ids, category_dtos) = self.resolve_categories(command.categories).await?;
        let steps = Self::build_steps(command.steps)?;

        let now = self.clock.now();
        let slug = self.slug_service.generate(title.as_str(), "dessert")?;

        let new_dessert = NewDessert {
            title,
            slug,
            ingredients,
            description,
            photo,
            cooking_time,
            published: command.published,
            profile_id: actor.profile_id,
            categories: category_ids,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_dessert, steps).await?;
        tracing::info!(slug = %created.slug, "dessert created");
        Ok(DessertDto::from_parts(created, category_dtos))
    }
}
