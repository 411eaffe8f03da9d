use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_PROFILE_USER: &str = "profiles_user_id_key";
const CNT_PROFILE_SLUG: &str = "profiles_slug_key";
const CNT_CATEGORY_NAME: &str = "categories_name_key";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_DESSERT_SLUG: &str = "desserts_slug_key";
const CNT_DESSERT_COOKING_TIME: &str = "desserts_cooking_time_check";
const CNT_DESSERT_AUTHOR: &str = "desserts_profile_id_fkey";
const CNT_COMMENT_DESSERT: &str = "comments_dessert_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "comments_profile_id_fkey";

/// Translates a storage error into a domain error by constraint name.
/// Unique violations on user-supplied fields carry that field, so a
/// racing insert surfaces the same validation error the pre-checks
/// produce; conflicts with no user-editable field stay conflicts.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_USERNAME => {
                        DomainError::validation("username", "username already exists")
                    }
                    CNT_USER_EMAIL => DomainError::validation("email", "email already registered"),
                    CNT_CATEGORY_NAME => {
                        DomainError::validation("name", "category name already exists")
                    }
                    CNT_PROFILE_USER => {
                        DomainError::Conflict("user already has a profile".into())
                    }
                    CNT_PROFILE_SLUG | CNT_CATEGORY_SLUG | CNT_DESSERT_SLUG => {
                        DomainError::Conflict("slug already exists".into())
                    }
                    CNT_DESSERT_COOKING_TIME => DomainError::validation(
                        "cooking_time",
                        "cooking time must be between 1 and 240 minutes",
                    ),
                    CNT_DESSERT_AUTHOR | CNT_COMMENT_AUTHOR => {
                        DomainError::NotFound("author not found".into())
                    }
                    CNT_COMMENT_DESSERT => DomainError::NotFound("dessert not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::validation("record", "check constraint violated");
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    struct FakeDbError {
        constraint: Option<&'static str>,
        code: Option<&'static str>,
    }

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("duplicate key value violates unique constraint")
        }
    }

    impl StdError for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            self.code.map(Cow::Borrowed)
        }

        fn constraint(&self) -> Option<&str> {
            self.constraint
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }
    }

    fn db_error(constraint: Option<&'static str>, code: Option<&'static str>) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError { constraint, code }))
    }

    #[test]
    fn duplicate_email_constraint_carries_the_field() {
        let err = map_sqlx(db_error(Some("users_email_key"), Some("23505")));
        assert!(matches!(err, DomainError::Validation { field, .. } if field == "email"));
    }

    #[test]
    fn duplicate_username_constraint_carries_the_field() {
        let err = map_sqlx(db_error(Some("users_username_key"), Some("23505")));
        assert!(matches!(err, DomainError::Validation { field, .. } if field == "username"));
    }

    #[test]
    fn duplicate_category_name_constraint_carries_the_field() {
        let err = map_sqlx(db_error(Some("categories_name_key"), Some("23505")));
        assert!(matches!(err, DomainError::Validation { field, .. } if field == "name"));
    }

    #[test]
    fn slug_collision_stays_a_conflict() {
        let err = map_sqlx(db_error(Some("desserts_slug_key"), Some("23505")));
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn unrecognized_unique_violation_falls_back_to_a_conflict() {
        let err = map_sqlx(db_error(None, Some("23505")));
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn cooking_time_check_constraint_carries_the_field() {
        let err = map_sqlx(db_error(Some("desserts_cooking_time_check"), Some("23514")));
        assert!(matches!(err, DomainError::Validation { field, .. } if field == "cooking_time"));
    }
}
