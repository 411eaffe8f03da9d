// src/domain/category/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation(
                "category",
                "category id must be positive",
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation(
                "name",
                "category name cannot be empty",
            ));
        }
        if value.chars().count() > 100 {
            return Err(DomainError::validation(
                "name",
                "category name must be at most 100 characters long",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: Slug,
}
