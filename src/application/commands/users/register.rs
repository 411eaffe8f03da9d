// src/application/commands/users/register.rs
use super::{UserCommandService, login::LoginResult, password::validate_new_password};
use crate::{
    application::{
        dto::{SessionDto, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        profile::NewProfile,
        user::{Email, NewUser, PasswordHash, Username},
    },
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

impl UserCommandService {
    /// Creates the user and its profile in one transaction, then logs the
    /// new user in so the response carries a usable session.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<LoginResult> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        validate_new_password(&command.password, &command.password_confirm)?;

        if self.user_repo.email_exists(&email).await? {
            return Err(ApplicationError::validation(
                "email",
                "email already registered",
            ));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let now = self.clock.now();
        let slug = self.slug_service.generate(username.as_str(), "user")?;
        let new_user = NewUser::new(username, email, password_hash, now);
        let new_profile = NewProfile::empty(slug, now);

        // A concurrent registration can still slip past the pre-check;
        // the repository reports the unique violation with the offending
        // field attached, so it surfaces as the same validation error.
        let (user, _profile) = self
            .user_repo
            .insert_with_profile(new_user, new_profile)
            .await?;

        let record = self
            .session_store
            .create(user.id.into(), now, self.session_ttl)
            .await?;

        Ok(LoginResult {
            user: UserDto::from(user),
            session: SessionDto::from_record(record, now),
        })
    }
}
