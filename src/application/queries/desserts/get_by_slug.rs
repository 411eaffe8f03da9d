// src/application/queries/desserts/get_by_slug.rs
use super::DessertQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto, DessertDetailDto, DessertDto, RecipeStepDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{dessert::Dessert, slug::Slug},
};

pub struct GetDessertBySlugQuery {
    pub slug: String,
}

impl DessertQueryService {
    pub async fn get_dessert_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetDessertBySlugQuery,
    ) -> ApplicationResult<DessertDetailDto> {
        let slug = Slug::new(query.slug)?;
        let dessert = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("dessert not found"))?;

        Self::ensure_visible(actor, &dessert)?;

        let steps = self.read_repo.list_steps(dessert.id).await?;
        let comments = self.comment_repo.list_for_dessert(dessert.id).await?;

        let map = self.category_map(std::slice::from_ref(&dessert)).await?;
        let categories = Self::categories_for(&dessert, &map);

        Ok(DessertDetailDto {
            dessert: DessertDto::from_parts(dessert, categories),
            steps: steps.into_iter().map(RecipeStepDto::from).collect(),
            comments: comments.into_iter().map(CommentDto::from).collect(),
        })
    }

    // An unpublished dessert is indistinguishable from a missing one for
    // anybody but its owner.
    fn ensure_visible(actor: Option<&AuthenticatedUser>, dessert: &Dessert) -> ApplicationResult<()> {
        if dessert.published {
            return Ok(());
        }
        match actor {
            Some(actor) if actor.profile_id == dessert.profile_id => Ok(()),
            _ => Err(ApplicationError::not_found("dessert not found")),
        }
    }
}
