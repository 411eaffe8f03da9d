// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{SessionDto, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

pub struct LoginResult {
    pub user: UserDto,
    pub session: SessionDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let username = Username::new(command.username)?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;

        let now = self.clock.now();
        let record = self
            .session_store
            .create(user.id.into(), now, self.session_ttl)
            .await?;

        tracing::info!(user = %user.username, "login");

        Ok(LoginResult {
            user: UserDto::from(user),
            session: SessionDto::from_record(record, now),
        })
    }
}
