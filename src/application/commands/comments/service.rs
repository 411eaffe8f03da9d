// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::{comment::CommentRepository, dessert::DessertReadRepository};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) dessert_repo: Arc<dyn DessertReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        dessert_repo: Arc<dyn DessertReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            dessert_repo,
            clock,
        }
    }
}
