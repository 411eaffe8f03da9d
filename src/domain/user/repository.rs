// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::profile::{NewProfile, Profile};
use crate::domain::slug::Slug;
use crate::domain::user::entity::{NewUser, User};
use crate::domain::user::value_objects::{Email, PasswordHash, UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates the user together with its empty profile in one transaction.
    /// Every user has exactly one profile; if the profile insert fails the
    /// user row is rolled back rather than left dangling.
    async fn insert_with_profile(
        &self,
        user: NewUser,
        profile: NewProfile,
    ) -> DomainResult<(User, Profile)>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn email_exists(&self, email: &Email) -> DomainResult<bool>;

    /// Replaces the password hash and re-saves the bound profile in the
    /// same transaction: the profile records when the password changed and
    /// picks up a freshly generated slug, mirroring its lockstep lifecycle
    /// with the user.
    async fn update_password(
        &self,
        id: UserId,
        password_hash: PasswordHash,
        profile_slug: Slug,
        changed_at: DateTime<Utc>,
    ) -> DomainResult<()>;
}
