// src/presentation/http/controllers/desserts.rs
use crate::application::{
    commands::{
        comments::CreateCommentCommand,
        desserts::{
            CreateDessertCommand, DeleteDessertCommand, RecipeStepInput, UpdateDessertCommand,
        },
    },
    dto::{CommentDto, DessertDetailDto, DessertDto, Page},
    queries::desserts::{GetDessertBySlugQuery, ListDessertsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

fn default_page() -> u32 {
    1
}

fn default_published() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct DessertListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    /// Zero means the server default.
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecipeStepRequest {
    pub text: String,
    pub image: String,
}

impl From<RecipeStepRequest> for RecipeStepInput {
    fn from(step: RecipeStepRequest) -> Self {
        Self {
            text: step.text,
            image: step.image,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateDessertRequest {
    pub title: String,
    pub photo: String,
    pub ingredients: String,
    pub description: String,
    pub cooking_time: i64,
    #[serde(default)]
    pub categories: Vec<i64>,
    #[serde(default)]
    pub steps: Vec<RecipeStepRequest>,
    #[serde(default = "default_published")]
    pub published: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDessertRequest {
    pub title: String,
    pub photo: String,
    pub ingredients: String,
    pub description: String,
    pub cooking_time: i64,
    #[serde(default)]
    pub categories: Vec<i64>,
    #[serde(default)]
    pub steps: Vec<RecipeStepRequest>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

pub async fn list_desserts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<DessertListParams>,
) -> HttpResult<Json<Page<DessertDto>>> {
    let query = ListDessertsQuery {
        page: params.page,
        per_page: params.per_page,
        category: params.category,
        author: params.author,
    };

    state
        .services
        .dessert_queries
        .list_desserts(query)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_dessert(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<DessertDetailDto>> {
    state
        .services
        .dessert_queries
        .get_dessert_by_slug(actor.0.as_ref(), GetDessertBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_dessert(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateDessertRequest>,
) -> HttpResult<(StatusCode, Json<DessertDto>)> {
    let command = CreateDessertCommand {
        title: payload.title,
        photo: payload.photo,
        ingredients: payload.ingredients,
        description: payload.description,
        cooking_time: payload.cooking_time,
        categories: payload.categories,
        steps: payload.steps.into_iter().map(Into::into).collect(),
        published: payload.published,
    };

    let created = state
        .services
        .dessert_commands
        .create_dessert(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_dessert(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateDessertRequest>,
) -> HttpResult<Json<DessertDto>> {
    let command = UpdateDessertCommand {
        slug,
        title: payload.title,
        photo: payload.photo,
        ingredients: payload.ingredients,
        description: payload.description,
        cooking_time: payload.cooking_time,
        categories: payload.categories,
        steps: payload.steps.into_iter().map(Into::into).collect(),
    };

    state
        .services
        .dessert_commands
        .update_dessert(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_dessert(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .dessert_commands
        .delete_dessert(&user, DeleteDessertCommand { slug })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = CreateCommentCommand {
        dessert_slug: slug,
        text: payload.text,
    };

    let created = state
        .services
        .comment_commands
        .create_comment(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}
