// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{auth, categories, desserts, profiles};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method},
    routing::{get, patch, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// An empty `allowed_origins` list opens the API to any origin.
pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let cors = cors_layer(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::me))
        .route("/api/v1/auth/change-password", post(auth::change_password))
        .route("/api/v1/profile", patch(profiles::update_profile))
        .route("/api/v1/profiles/{slug}", get(profiles::get_profile))
        .route(
            "/api/v1/desserts",
            get(desserts::list_desserts).post(desserts::create_dessert),
        )
        .route(
            "/api/v1/desserts/{slug}",
            get(desserts::get_dessert)
                .put(desserts::update_dessert)
                .delete(desserts::delete_dessert),
        )
        .route(
            "/api/v1/desserts/{slug}/comments",
            post(desserts::create_comment),
        )
        .route(
            "/api/v1/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new().allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "skipping unparsable allowed origin");
                None
            }
        })
        .collect();
    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
