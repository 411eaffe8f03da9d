// src/application/guard.rs
//! The authorization predicate, in one place.
//!
//! Every mutating command funnels through these checks instead of
//! re-deriving them per handler: an authenticated actor may mutate a
//! dessert only through the profile that owns it, and only staff may
//! create categories. Ownership mismatches are Forbidden, never a
//! silent redirect or a 404.

use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::profile::ProfileId;

pub fn ensure_owner(actor: &AuthenticatedUser, owner: ProfileId) -> ApplicationResult<()> {
    if actor.profile_id == owner {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "only the owner may modify this dessert",
        ))
    }
}

pub fn ensure_staff(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    if actor.is_staff {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "staff privileges are required",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{profile::ProfileId, user::UserId};

    fn actor(profile_id: i64, is_staff: bool) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: UserId(1),
            profile_id: ProfileId(profile_id),
            username: "tester".into(),
            is_staff,
        }
    }

    #[test]
    fn owner_passes_the_ownership_check() {
        assert!(ensure_owner(&actor(7, false), ProfileId(7)).is_ok());
    }

    #[test]
    fn foreign_profile_is_forbidden() {
        let err = ensure_owner(&actor(7, false), ProfileId(8)).unwrap_err();
        assert!(matches!(err, ApplicationError::Forbidden(_)));
    }

    #[test]
    fn staff_check_follows_the_flag() {
        assert!(ensure_staff(&actor(1, true)).is_ok());
        assert!(matches!(
            ensure_staff(&actor(1, false)),
            Err(ApplicationError::Forbidden(_))
        ));
    }
}
