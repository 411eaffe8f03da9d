// src/domain/slug.rs
use std::fmt;
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("slug", "slug cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Domain service that derives URL slugs from human-readable sources.
///
/// The slug is stamped with the current Unix second, so two saves of the
/// same source within one second can still collide. That weakness is
/// inherited from the product and left in place; the unique index on every
/// slug column is the real guarantee.
pub struct SlugService {
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl SlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { generator, clock }
    }

    pub fn generate(&self, source: &str, fallback: &str) -> DomainResult<Slug> {
        let base = self.generator.slugify(source);
        let base = if base.is_empty() {
            fallback.to_owned()
        } else {
            base
        };
        Slug::new(format!("{}-{}", base, self.clock.now().timestamp()))
    }
}
