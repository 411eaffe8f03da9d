// src/application/commands/profiles/service.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::{profile::ProfileRepository, slug::SlugService};

pub struct ProfileCommandService {
    pub(super) profile_repo: Arc<dyn ProfileRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProfileCommandService {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            profile_repo,
            slug_service,
            clock,
        }
    }
}
