// src/domain/dessert/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MAX_TITLE_CHARS: usize = 60;
// Everything the title form rejects, backslash included.
const FORBIDDEN_TITLE_CHARS: &str = "!()[]{};?@#$%:'\\./^&*_";

const MIN_COOKING_MINUTES: u16 = 1;
const MAX_COOKING_MINUTES: u16 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DessertId(pub i64);

impl DessertId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation(
                "id",
                "dessert id must be positive",
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<DessertId> for i64 {
    fn from(value: DessertId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecipeStepId(pub i64);

impl From<RecipeStepId> for i64 {
    fn from(value: RecipeStepId) -> Self {
        value.0
    }
}

/// Dessert title: at most 60 characters, with a fixed set of punctuation
/// rejected character by character so the error can name the offender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DessertTitle(String);

impl DessertTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("title", "title cannot be empty"));
        }
        if value.chars().count() > MAX_TITLE_CHARS {
            return Err(DomainError::validation(
                "title",
                format!("title must be at most {MAX_TITLE_CHARS} characters long"),
            ));
        }
        for c in value.chars() {
            if FORBIDDEN_TITLE_CHARS.contains(c) {
                return Err(DomainError::validation(
                    "title",
                    format!("character '{c}' is not allowed in the title"),
                ));
            }
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DessertTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DessertTitle> for String {
    fn from(value: DessertTitle) -> Self {
        value.0
    }
}

/// Cooking time in whole minutes, 1 through 240.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookingTime(u16);

impl CookingTime {
    pub fn new(minutes: u16) -> DomainResult<Self> {
        if !(MIN_COOKING_MINUTES..=MAX_COOKING_MINUTES).contains(&minutes) {
            return Err(DomainError::validation(
                "cooking_time",
                format!(
                    "cooking time must be between {MIN_COOKING_MINUTES} and {MAX_COOKING_MINUTES} minutes"
                ),
            ));
        }
        Ok(Self(minutes))
    }

    pub fn from_raw(minutes: i64) -> DomainResult<Self> {
        let minutes = u16::try_from(minutes).map_err(|_| {
            DomainError::validation(
                "cooking_time",
                format!(
                    "cooking time must be between {MIN_COOKING_MINUTES} and {MAX_COOKING_MINUTES} minutes"
                ),
            )
        })?;
        Self::new(minutes)
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }
}
