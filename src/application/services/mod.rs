// src/application/services/mod.rs
use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::{
        commands::{
            categories::CategoryCommandService, comments::CommentCommandService,
            desserts::DessertCommandService, profiles::ProfileCommandService,
            users::UserCommandService,
        },
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::{
            security::PasswordHasher, sessions::SessionStore, time::Clock, util::SlugGenerator,
        },
        queries::{
            categories::CategoryQueryService, desserts::DessertQueryService,
            profiles::ProfileQueryService,
        },
    },
    domain::{
        category::CategoryRepository,
        comment::CommentRepository,
        dessert::{DessertReadRepository, DessertWriteRepository},
        profile::ProfileRepository,
        slug::SlugService,
        user::{UserId, UserRepository},
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub profile_commands: Arc<ProfileCommandService>,
    pub dessert_commands: Arc<DessertCommandService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub dessert_queries: Arc<DessertQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub profile_queries: Arc<ProfileQueryService>,
    user_repo: Arc<dyn UserRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    session_store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        dessert_write_repo: Arc<dyn DessertWriteRepository>,
        dessert_read_repo: Arc<dyn DessertReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        session_store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        session_ttl: Duration,
    ) -> Self {
        let slug_service = Arc::new(SlugService::new(Arc::clone(&slugger), Arc::clone(&clock)));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&session_store),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
            session_ttl,
        ));

        let profile_commands = Arc::new(ProfileCommandService::new(
            Arc::clone(&profile_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let dessert_commands = Arc::new(DessertCommandService::new(
            Arc::clone(&dessert_write_repo),
            Arc::clone(&dessert_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&slug_service),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&dessert_read_repo),
            Arc::clone(&clock),
        ));

        let dessert_queries = Arc::new(DessertQueryService::new(
            Arc::clone(&dessert_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&comment_repo),
            Arc::clone(&profile_repo),
        ));

        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));

        let profile_queries = Arc::new(ProfileQueryService::new(
            Arc::clone(&profile_repo),
            Arc::clone(&user_repo),
        ));

        Self {
            user_commands,
            profile_commands,
            dessert_commands,
            category_commands,
            comment_commands,
            dessert_queries,
            category_queries,
            profile_queries,
            user_repo,
            profile_repo,
            session_store,
            clock,
        }
    }

    /// Resolves a bearer token into the acting identity: live session,
    /// existing user, existing profile. The profile is guaranteed by the
    /// user/profile lifecycle invariant; a missing one means the store is
    /// corrupt and surfaces as an infrastructure failure.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let record = self
            .session_store
            .find(token)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid session"))?;

        if record.expires_at <= self.clock.now() {
            return Err(ApplicationError::unauthorized("session expired"));
        }

        let user_id = UserId::new(record.user_id)?;
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid session"))?;

        let profile = self
            .profile_repo
            .find_by_user_id(user.id)
            .await?
            .ok_or_else(|| {
                ApplicationError::infrastructure("user has no profile; store is inconsistent")
            })?;

        Ok(AuthenticatedUser {
            user_id: user.id,
            profile_id: profile.id,
            username: user.username.to_string(),
            is_staff: user.is_staff,
        })
    }
}
