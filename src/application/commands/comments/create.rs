// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{comment::NewComment, slug::Slug},
};

pub struct CreateCommentCommand {
    pub dessert_slug: String,
    pub text: String,
}

impl CommentCommandService {
    /// Any authenticated profile may comment; unpublished desserts stay
    /// invisible to everyone but their owner.
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let slug = Slug::new(command.dessert_slug)?;
        let dessert = self
            .dessert_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("dessert not found"))?;

        if !dessert.published && dessert.profile_id != actor.profile_id {
            return Err(ApplicationError::not_found("dessert not found"));
        }

        let comment = NewComment::new(
            command.text,
            actor.profile_id,
            dessert.id,
            self.clock.now(),
        )?;

        let created = self.comment_repo.insert(comment).await?;
        Ok(CommentDto::from(created))
    }
}
