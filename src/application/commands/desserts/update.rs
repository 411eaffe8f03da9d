// src/application/commands/desserts/update.rs
use super::{DessertCommandService, RecipeStepInput, service::require_text};
use crate::{
    application::{
        dto::{AuthenticatedUser, DessertDto},
        error::{ApplicationError, ApplicationResult},
        guard,
    },
    domain::{
        dessert::{CookingTime, DessertTitle, DessertUpdate},
        profile::PhotoRef,
        slug::Slug,
    },
};

/// Edit posts the whole form again, so every field is replaced and the
/// step collection is rewritten. The slug is regenerated from the new
/// title, which means the public URL changes on every edit.
pub struct UpdateDessertCommand {
    pub slug: String,
    pub title: String,
    pub photo: String,
    pub ingredients: String,
    pub description: String,
    pub cooking_time: i64,
    pub categories: Vec<i64>,
    pub steps: Vec<RecipeStepInput>,
}

impl DessertCommandService {
    pub async fn update_dessert(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateDessertCommand,
    ) -> ApplicationResult<DessertDto> {
        let slug = Slug::new(command.slug)?;
        let dessert = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("dessert not found"))?;

        guard::ensure_owner(actor, dessert.profile_id)?;

        let title = DessertTitle::new(command.title)?;
        let photo = PhotoRef::new(command.photo)?;
        let ingredients = require_text("ingredients", command.ingredients)?;
        let description = require_text("description", command.description)?;
        let cooking_time = CookingTime::from_raw(command.cooking_time)?;

        let (category_ids, category_dtos) = self.resolve_categories(command.categories).await?;
        let steps = Self::build_steps(command.steps)?;

        let now = self.clock.now();
        let new_slug = self.slug_service.generate(title.as_str(), "dessert")?;

        let update = DessertUpdate {
            id: dessert.id,
            title,
            slug: new_slug,
            ingredients,
            description,
            photo,
            cooking_time,
            categories: category_ids,
            updated_at: now,
        };

        let updated = self.write_repo.update(update, steps).await?;
        tracing::info!(slug = %updated.slug, "dessert updated");
        Ok(DessertDto::from_parts(updated, category_dtos))
    }
}
