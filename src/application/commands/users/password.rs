// src/application/commands/users/password.rs
use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

pub(super) fn validate_new_password(password: &str, confirm: &str) -> ApplicationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::validation(
            "password",
            format!("password must be at least {MIN_PASSWORD_LENGTH} characters long"),
        ));
    }
    if password != confirm {
        return Err(ApplicationError::validation(
            "password_confirm",
            "password confirmation does not match",
        ));
    }
    Ok(())
}
