// src/infrastructure/repositories/postgres_profile.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::{
    BirthDate, DisplayName, PhoneNumber, PhotoRef, Profile, ProfileId, ProfileRepository,
    ProfileUpdate, Sex,
};
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

pub(super) const PROFILE_COLUMNS: &str = "id, user_id, slug, display_name, photo, \
     date_of_birth, sex, phone, password_changed_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct ProfileRow {
    id: i64,
    user_id: i64,
    slug: String,
    display_name: Option<String>,
    photo: Option<String>,
    date_of_birth: Option<NaiveDate>,
    sex: Option<bool>,
    phone: Option<String>,
    password_changed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(Profile {
            id: ProfileId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            slug: Slug::new(row.slug)?,
            display_name: row.display_name.map(DisplayName::new).transpose()?,
            photo: row.photo.map(PhotoRef::new).transpose()?,
            date_of_birth: row.date_of_birth.map(BirthDate::from_stored),
            sex: row.sex.map(Sex::from_flag),
            phone: row.phone.map(PhoneNumber::from_stored),
            password_changed_at: row.password_changed_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Profile::try_from).transpose()
    }

    async fn find_by_user_id(&self, user_id: UserId) -> DomainResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1"
        ))
        .bind(i64::from(user_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Profile::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Profile::try_from).transpose()
    }

    async fn update(&self, update: ProfileUpdate) -> DomainResult<Profile> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE profiles SET slug = ");
        builder.push_bind(update.slug.as_str());
        builder.push(", updated_at = ").push_bind(update.updated_at);

        if let Some(display_name) = &update.display_name {
            builder
                .push(", display_name = ")
                .push_bind(display_name.as_str());
        }
        if let Some(photo) = &update.photo {
            builder.push(", photo = ").push_bind(photo.as_str());
        }
        if let Some(date_of_birth) = &update.date_of_birth {
            builder
                .push(", date_of_birth = ")
                .push_bind(date_of_birth.as_date());
        }
        if let Some(sex) = &update.sex {
            builder.push(", sex = ").push_bind(sex.as_flag());
        }
        if let Some(phone) = &update.phone {
            builder.push(", phone = ").push_bind(phone.as_str());
        }

        builder.push(" WHERE id = ").push_bind(i64::from(update.id));
        builder.push(format!(" RETURNING {PROFILE_COLUMNS}"));

        let row = builder
            .build_query_as::<ProfileRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Profile::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::NotFound("profile not found".into()))
    }
}
