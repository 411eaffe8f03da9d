// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::domain::{category::CategoryRepository, slug::SlugService};

pub struct CategoryCommandService {
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<SlugService>,
}

impl CategoryCommandService {
    pub fn new(category_repo: Arc<dyn CategoryRepository>, slug_service: Arc<SlugService>) -> Self {
        Self {
            category_repo,
            slug_service,
        }
    }
}
