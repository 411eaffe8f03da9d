// src/application/commands/desserts/delete.rs
use super::DessertCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        guard,
    },
    domain::slug::Slug,
};

pub struct DeleteDessertCommand {
    pub slug: String,
}

impl DessertCommandService {
    pub async fn delete_dessert(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteDessertCommand,
    ) -> ApplicationResult<()> {
        let slug = Slug::new(command.slug)?;
        let dessert = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("dessert not found"))?;

        guard::ensure_owner(actor, dessert.profile_id)?;

        self.write_repo.delete(dessert.id).await?;
        tracing::info!(slug = %slug, "dessert deleted");
        Ok(())
    }
}
