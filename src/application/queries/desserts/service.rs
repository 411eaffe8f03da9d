// src/application/queries/desserts/service.rs
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::{
        category::{CategoryId, CategoryRepository},
        comment::CommentRepository,
        dessert::{Dessert, DessertReadRepository},
        profile::ProfileRepository,
    },
};

pub struct DessertQueryService {
    pub(super) read_repo: Arc<dyn DessertReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) profile_repo: Arc<dyn ProfileRepository>,
}

impl DessertQueryService {
    pub fn new(
        read_repo: Arc<dyn DessertReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            read_repo,
            category_repo,
            comment_repo,
            profile_repo,
        }
    }

    /// One bulk lookup for the categories of a whole page of desserts.
    pub(super) async fn category_map(
        &self,
        desserts: &[Dessert],
    ) -> ApplicationResult<HashMap<CategoryId, CategoryDto>> {
        let mut ids: Vec<CategoryId> = desserts
            .iter()
            .flat_map(|d| d.categories.iter().copied())
            .collect();
        ids.sort_by_key(|id| i64::from(*id));
        ids.dedup();

        let categories = self.category_repo.find_by_ids(&ids).await?;
        Ok(categories
            .into_iter()
            .map(|c| (c.id, CategoryDto::from(c)))
            .collect())
    }

    pub(super) fn categories_for(
        dessert: &Dessert,
        map: &HashMap<CategoryId, CategoryDto>,
    ) -> Vec<CategoryDto> {
        dessert
            .categories
            .iter()
            .filter_map(|id| map.get(id).cloned())
            .collect()
    }
}
