// src/application/queries/desserts/list.rs
use super::DessertQueryService;
use crate::{
    application::{
        dto::{DessertDto, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{dessert::DessertListFilter, slug::Slug},
};

const DEFAULT_PER_PAGE: u32 = 12;
const MAX_PER_PAGE: u32 = 50;

pub struct ListDessertsQuery {
    pub page: u32,
    pub per_page: u32,
    /// Category slug filter.
    pub category: Option<String>,
    /// Author profile slug filter.
    pub author: Option<String>,
}

impl DessertQueryService {
    pub async fn list_desserts(
        &self,
        query: ListDessertsQuery,
    ) -> ApplicationResult<Page<DessertDto>> {
        let page = query.page.max(1);
        let per_page = if query.per_page == 0 {
            DEFAULT_PER_PAGE
        } else {
            query.per_page.min(MAX_PER_PAGE)
        };

        let mut filter = DessertListFilter {
            published_only: true,
            ..DessertListFilter::default()
        };

        if let Some(category) = query.category {
            let slug = Slug::new(category)?;
            // Unknown category slug is a 404, not an empty page.
            self.category_repo
                .find_by_slug(&slug)
                .await?
                .ok_or_else(|| ApplicationError::not_found("category not found"))?;
            filter.category_slug = Some(slug);
        }

        if let Some(author) = query.author {
            let slug = Slug::new(author)?;
            let profile = self
                .profile_repo
                .find_by_slug(&slug)
                .await?
                .ok_or_else(|| ApplicationError::not_found("profile not found"))?;
            filter.author = Some(profile.id);
        }

        let offset = (page - 1).saturating_mul(per_page);
        let (desserts, total) = self.read_repo.list_page(&filter, per_page, offset).await?;

        let map = self.category_map(&desserts).await?;
        let items = desserts
            .into_iter()
            .map(|dessert| {
                let categories = Self::categories_for(&dessert, &map);
                DessertDto::from_parts(dessert, categories)
            })
            .collect();

        Ok(Page::new(items, page, per_page, total))
    }
}
