// src/presentation/http/controllers/profiles.rs
use crate::application::{commands::profiles::UpdateProfileCommand, dto::ProfileDto};
use crate::domain::profile::Sex;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use chrono::NaiveDate;
use serde::Deserialize;

/// Any subset of fields; absent fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub photo: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub sex: Option<Sex>,
    pub phone: Option<String>,
}

pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ProfileDto>> {
    state
        .services
        .profile_queries
        .get_profile_by_slug(slug)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<UpdateProfileRequest>,
) -> HttpResult<Json<ProfileDto>> {
    let command = UpdateProfileCommand {
        display_name: payload.display_name,
        photo: payload.photo,
        date_of_birth: payload.date_of_birth,
        sex: payload.sex,
        phone: payload.phone,
    };

    state
        .services
        .profile_commands
        .update_profile(&user, command)
        .await
        .into_http()
        .map(Json)
}
