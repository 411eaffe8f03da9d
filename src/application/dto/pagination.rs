// src/application/dto/pagination.rs
use serde::{Deserialize, Serialize};

/// Plain page-number pagination for the listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32, per_page: u32, total_items: u64) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            total_items.div_ceil(u64::from(per_page)) as u32
        };
        Self {
            items,
            page,
            per_page,
            total_items,
            total_pages,
        }
    }
}
