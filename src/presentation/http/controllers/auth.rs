// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{
        ChangePasswordCommand, LoginResult, LoginUserCommand, RegisterUserCommand,
    },
    dto::{ProfileDto, SessionDto, UserDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, BearerToken};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirm: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserDto,
    pub session: SessionDto,
}

impl From<LoginResult> for AuthResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            user: result.user,
            session: result.session,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub username: String,
    pub is_staff: bool,
    pub profile: ProfileDto,
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<AuthResponse>)> {
    let command = RegisterUserCommand {
        username: payload.username,
        email: payload.email,
        password: payload.password,
        password_confirm: payload.password_confirm,
    };

    let result = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(result.into())))
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<AuthResponse>> {
    let command = LoginUserCommand {
        username: payload.username,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()
        .map(|result| Json(result.into()))
}

pub async fn logout(
    Extension(state): Extension<HttpState>,
    BearerToken(token): BearerToken,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .logout(&token)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn me(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<MeResponse>> {
    let profile = state
        .services
        .profile_queries
        .current_profile(&user)
        .await
        .into_http()?;

    Ok(Json(MeResponse {
        username: user.username,
        is_staff: user.is_staff,
        profile,
    }))
}

pub async fn change_password(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ChangePasswordRequest>,
) -> HttpResult<StatusCode> {
    let command = ChangePasswordCommand {
        current_password: payload.current_password,
        new_password: payload.new_password,
        new_password_confirm: payload.new_password_confirm,
    };

    state
        .services
        .user_commands
        .change_password(&user, command)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
