// src/presentation/http/controllers/categories.rs
use crate::application::{commands::categories::CreateCategoryCommand, dto::CategoryDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let created = state
        .services
        .category_commands
        .create_category(&user, CreateCategoryCommand { name: payload.name })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}
