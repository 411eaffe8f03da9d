// src/application/queries/profiles.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{profile::ProfileRepository, slug::Slug, user::UserRepository},
};

pub struct ProfileQueryService {
    profile_repo: Arc<dyn ProfileRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl ProfileQueryService {
    pub fn new(profile_repo: Arc<dyn ProfileRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            profile_repo,
            user_repo,
        }
    }

    pub async fn get_profile_by_slug(&self, slug: String) -> ApplicationResult<ProfileDto> {
        let slug = Slug::new(slug)?;
        let profile = self
            .profile_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;

        let user = self
            .user_repo
            .find_by_id(profile.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        Ok(ProfileDto::from_parts(profile, user.username.as_str()))
    }

    pub async fn current_profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<ProfileDto> {
        let profile = self
            .profile_repo
            .find_by_id(actor.profile_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;

        Ok(ProfileDto::from_parts(profile, &actor.username))
    }
}
