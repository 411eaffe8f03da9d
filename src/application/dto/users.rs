// src/application/dto/users.rs
use crate::domain::profile::Profile;
use crate::domain::user::User;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
            email: user.email.to_string(),
            is_staff: user.is_staff,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDto {
    pub id: i64,
    pub slug: String,
    /// Display name when set, username otherwise.
    pub name: String,
    pub display_name: Option<String>,
    pub photo: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub sex: Option<String>,
    pub phone: Option<String>,
    pub password_changed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileDto {
    pub fn from_parts(profile: Profile, username: &str) -> Self {
        let name = profile.name_or(username).to_owned();
        Self {
            id: profile.id.into(),
            slug: profile.slug.into(),
            name,
            display_name: profile.display_name.map(|n| n.as_str().to_owned()),
            photo: profile.photo.map(|p| p.as_str().to_owned()),
            date_of_birth: profile.date_of_birth.map(|d| d.as_date()),
            sex: profile.sex.map(|s| {
                match s {
                    crate::domain::profile::Sex::Female => "female",
                    crate::domain::profile::Sex::Male => "male",
                }
                .to_owned()
            }),
            phone: profile.phone.map(|p| p.as_str().to_owned()),
            password_changed_at: profile.password_changed_at,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
