// src/application/commands/profiles/update.rs
use super::ProfileCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::profile::{BirthDate, DisplayName, PhoneNumber, PhotoRef, ProfileUpdate, Sex},
};
use chrono::NaiveDate;

/// Per-field profile edits. The command accepts any subset of fields and
/// validates each present one, failing closed on the first violation.
#[derive(Default)]
pub struct UpdateProfileCommand {
    pub display_name: Option<String>,
    pub photo: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub sex: Option<Sex>,
    pub phone: Option<String>,
}

impl ProfileCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<ProfileDto> {
        let profile = self
            .profile_repo
            .find_by_id(actor.profile_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;

        let now = self.clock.now();
        // Every profile save regenerates the slug.
        let slug = self.slug_service.generate(&actor.username, "user")?;
        let mut update = ProfileUpdate::new(profile.id, slug, now);

        if let Some(display_name) = command.display_name {
            update = update.with_display_name(DisplayName::new(display_name)?);
        }
        if let Some(photo) = command.photo {
            update = update.with_photo(PhotoRef::new(photo)?);
        }
        if let Some(date) = command.date_of_birth {
            update = update.with_date_of_birth(BirthDate::new(date, now.date_naive())?);
        }
        if let Some(sex) = command.sex {
            update = update.with_sex(sex);
        }
        if let Some(phone) = command.phone {
            update = update.with_phone(PhoneNumber::parse(&phone)?);
        }

        let updated = self.profile_repo.update(update).await?;
        Ok(ProfileDto::from_parts(updated, &actor.username))
    }
}
