// src/application/commands/users/service.rs
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    security::PasswordHasher, sessions::SessionStore, time::Clock,
};
use crate::domain::{slug::SlugService, user::UserRepository};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) session_store: Arc<dyn SessionStore>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) session_ttl: Duration,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        session_store: Arc<dyn SessionStore>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            session_store,
            slug_service,
            clock,
            session_ttl,
        }
    }
}
