// src/domain/profile/entity.rs
use crate::domain::profile::value_objects::{
    BirthDate, DisplayName, PhoneNumber, PhotoRef, ProfileId, Sex,
};
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Profile {
    pub id: ProfileId,
    pub user_id: UserId,
    pub slug: Slug,
    pub display_name: Option<DisplayName>,
    pub photo: Option<PhotoRef>,
    pub date_of_birth: Option<BirthDate>,
    pub sex: Option<Sex>,
    pub phone: Option<PhoneNumber>,
    pub password_changed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// The public name: the display name when set, the username otherwise.
    pub fn name_or<'a>(&'a self, username: &'a str) -> &'a str {
        self.display_name
            .as_ref()
            .map_or(username, DisplayName::as_str)
    }
}

/// The empty profile created in lockstep with a new user.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewProfile {
    pub fn empty(slug: Slug, created_at: DateTime<Utc>) -> Self {
        Self {
            slug,
            created_at,
            updated_at: created_at,
        }
    }
}

/// Partial profile update. The slug is mandatory because every profile
/// save regenerates it.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub id: ProfileId,
    pub slug: Slug,
    pub display_name: Option<DisplayName>,
    pub photo: Option<PhotoRef>,
    pub date_of_birth: Option<BirthDate>,
    pub sex: Option<Sex>,
    pub phone: Option<PhoneNumber>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileUpdate {
    pub fn new(id: ProfileId, slug: Slug, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            slug,
            display_name: None,
            photo: None,
            date_of_birth: None,
            sex: None,
            phone: None,
            updated_at,
        }
    }

    pub fn with_display_name(mut self, display_name: DisplayName) -> Self {
        self.display_name = Some(display_name);
        self
    }

    pub fn with_photo(mut self, photo: PhotoRef) -> Self {
        self.photo = Some(photo);
        self
    }

    pub fn with_date_of_birth(mut self, date_of_birth: BirthDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    pub fn with_phone(mut self, phone: PhoneNumber) -> Self {
        self.phone = Some(phone);
        self
    }
}
