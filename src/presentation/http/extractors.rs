// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Rejects the request unless a live session token is presented.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// Resolves the session when a token is presented, passes `None` otherwise.
/// A token that is present but invalid is still a rejection.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

/// The raw bearer token, for endpoints that act on the session itself.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

async fn state_from(parts: &mut Parts) -> Result<HttpState, HttpError> {
    Extension::<HttpState>::from_request_parts(parts, &())
        .await
        .map(|Extension(state)| state)
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_owned())
}

impl<S: Send + Sync> FromRequestParts<S> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let state = state_from(parts).await?;
        let token = bearer_token(parts).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized(
                "missing Authorization header",
            ))
        })?;

        let user = state
            .services
            .authenticate(&token)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for MaybeAuthenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let state = state_from(parts).await?;

        match bearer_token(parts) {
            Some(token) => {
                let user = state
                    .services
                    .authenticate(&token)
                    .await
                    .map_err(HttpError::from_error)?;
                Ok(Self(Some(user)))
            }
            None => Ok(Self(None)),
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bearer_token(parts).map(Self).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized(
                "missing Authorization header",
            ))
        })
    }
}
