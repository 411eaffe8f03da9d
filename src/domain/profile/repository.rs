// src/domain/profile/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::profile::entity::{Profile, ProfileUpdate};
use crate::domain::profile::value_objects::ProfileId;
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>>;
    async fn find_by_user_id(&self, user_id: UserId) -> DomainResult<Option<Profile>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Profile>>;
    async fn update(&self, update: ProfileUpdate) -> DomainResult<Profile>;
}
