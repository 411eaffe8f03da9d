// src/application/commands/users/change_password.rs
use super::{UserCommandService, password::validate_new_password};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::PasswordHash,
};

pub struct ChangePasswordCommand {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirm: String,
}

impl UserCommandService {
    /// Changes the actor's own password. The bound profile is re-saved in
    /// the same transaction: it records the change time and, like every
    /// profile save, gets a freshly generated slug.
    pub async fn change_password(
        &self,
        actor: &AuthenticatedUser,
        command: ChangePasswordCommand,
    ) -> ApplicationResult<()> {
        let user = self
            .user_repo
            .find_by_id(actor.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        if self
            .password_hasher
            .verify(&command.current_password, user.password_hash.as_str())
            .await
            .is_err()
        {
            return Err(ApplicationError::validation(
                "current_password",
                "current password is incorrect",
            ));
        }

        validate_new_password(&command.new_password, &command.new_password_confirm)?;

        let hashed = self.password_hasher.hash(&command.new_password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let now = self.clock.now();
        let slug = self
            .slug_service
            .generate(user.username.as_str(), "user")?;

        self.user_repo
            .update_password(user.id, password_hash, slug, now)
            .await?;

        tracing::info!(user = %user.username, "password changed");
        Ok(())
    }
}
