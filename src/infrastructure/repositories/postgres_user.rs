// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use super::postgres_profile::{PROFILE_COLUMNS, ProfileRow};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::{NewProfile, Profile};
use crate::domain::slug::Slug;
use crate::domain::user::{Email, NewUser, PasswordHash, User, UserId, UserRepository, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const USER_COLUMNS: &str = "id, username, email, password_hash, is_staff, created_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    is_staff: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            is_staff: row.is_staff,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert_with_profile(
        &self,
        user: NewUser,
        profile: NewProfile,
    ) -> DomainResult<(User, Profile)> {
        let NewUser {
            username,
            email,
            password_hash,
            is_staff,
            created_at,
        } = user;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let user_row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (username, email, password_hash, is_staff, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(username.as_str())
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(is_staff)
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let profile_row = sqlx::query_as::<_, ProfileRow>(&format!(
            "INSERT INTO profiles (user_id, slug, created_at, updated_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(user_row.id)
        .bind(profile.slug.as_str())
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        Ok((User::try_from(user_row)?, Profile::try_from(profile_row)?))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn email_exists(&self, email: &Email) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
            .bind(email.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn update_password(
        &self,
        id: UserId,
        password_hash: PasswordHash,
        profile_slug: Slug,
        changed_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let updated = sqlx::query("UPDATE users SET password_hash = $1 WHERE id = $2")
            .bind(password_hash.as_str())
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        if updated.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }

        // The profile is re-saved in lockstep: fresh slug, changed-at stamp.
        let updated = sqlx::query(
            "UPDATE profiles
             SET slug = $1, password_changed_at = $2, updated_at = $2
             WHERE user_id = $3",
        )
        .bind(profile_slug.as_str())
        .bind(changed_at)
        .bind(i64::from(id))
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if updated.rows_affected() == 0 {
            return Err(DomainError::NotFound("profile not found".into()));
        }

        tx.commit().await.map_err(map_sqlx)
    }
}
