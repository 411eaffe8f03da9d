// src/domain/profile/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_AGE_YEARS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileId(pub i64);

impl ProfileId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation(
                "id",
                "profile id must be positive",
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ProfileId> for i64 {
    fn from(value: ProfileId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation(
                "display_name",
                "display name cannot be empty",
            ));
        }
        if value.chars().count() > 50 {
            return Err(DomainError::validation(
                "display_name",
                "display name must be at most 50 characters long",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to a stored photo. The core never handles image bytes, only
/// the path handed back by blob storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRef(String);

impl PhotoRef {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation(
                "photo",
                "photo reference cannot be empty",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Date of birth, validated at submission time: strictly in the past and
/// at least twelve years before `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub fn new(date: NaiveDate, today: NaiveDate) -> DomainResult<Self> {
        if date >= today {
            return Err(DomainError::validation(
                "date_of_birth",
                "date of birth must be in the past",
            ));
        }
        if today.years_since(date).unwrap_or(0) < MIN_AGE_YEARS {
            return Err(DomainError::validation(
                "date_of_birth",
                format!("you must be at least {MIN_AGE_YEARS} years old"),
            ));
        }
        Ok(Self(date))
    }

    /// For rows already persisted; the age rule only gates new submissions.
    pub fn from_stored(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn from_flag(flag: bool) -> Self {
        if flag { Sex::Female } else { Sex::Male }
    }

    pub fn as_flag(&self) -> bool {
        matches!(self, Sex::Female)
    }
}

/// Russian phone number normalized to `8 (XXX) XXX-XX-XX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(value: &str) -> DomainResult<Self> {
        let digits = value.strip_prefix('+').unwrap_or(value);

        if digits.chars().any(|c| !c.is_ascii_digit()) {
            return Err(DomainError::validation(
                "phone",
                "phone number may contain digits only",
            ));
        }
        if digits.len() > 11 {
            return Err(DomainError::validation(
                "phone",
                "phone number has more than 11 digits",
            ));
        }
        if digits.len() < 11 {
            return Err(DomainError::validation(
                "phone",
                "phone number has fewer than 11 digits",
            ));
        }

        let mut chars = digits.chars();
        let country = chars.next().unwrap_or_default();
        if country != '7' && country != '8' {
            return Err(DomainError::validation(
                "phone",
                "phone number must start with 7 or 8",
            ));
        }

        let d: Vec<char> = chars.collect();
        Ok(Self(format!(
            "8 ({}{}{}) {}{}{}-{}{}-{}{}",
            d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7], d[8], d[9]
        )))
    }

    /// For rows already persisted in normalized form.
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
