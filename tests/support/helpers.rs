// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{
    Request, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::util::ServiceExt;

use sweetrecipe::application::ports::{
    security::PasswordHasher, sessions::SessionStore, time::Clock, util::SlugGenerator,
};
use sweetrecipe::application::services::ApplicationServices;
use sweetrecipe::domain::{
    category::CategoryRepository,
    comment::CommentRepository,
    dessert::{DessertReadRepository, DessertWriteRepository},
    profile::ProfileRepository,
    user::UserRepository,
};
use sweetrecipe::infrastructure::{
    security::InMemorySessionStore, time::SystemClock, util::TransliteratingSlugGenerator,
};
use sweetrecipe::presentation::http::{routes::build_router, state::HttpState};

use super::memory::{FakeHasher, MemoryStore};

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

pub fn make_test_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());

    let user_repo: Arc<dyn UserRepository> = store.clone();
    let profile_repo: Arc<dyn ProfileRepository> = store.clone();
    let dessert_write_repo: Arc<dyn DessertWriteRepository> = store.clone();
    let dessert_read_repo: Arc<dyn DessertReadRepository> = store.clone();
    let category_repo: Arc<dyn CategoryRepository> = store.clone();
    let comment_repo: Arc<dyn CommentRepository> = store.clone();
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(FakeHasher);
    let session_store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(TransliteratingSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        profile_repo,
        dessert_write_repo,
        dessert_read_repo,
        category_repo,
        comment_repo,
        password_hasher,
        session_store,
        clock,
        slugger,
        Duration::from_secs(3600),
    ));

    TestApp {
        router: build_router(HttpState::new(services), &[]),
        store,
    }
}

pub async fn request(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let req = match body {
        Some(payload) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

pub async fn get(router: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    request(router, "GET", uri, token, None).await
}

pub async fn post(
    router: &Router,
    uri: &str,
    token: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    request(router, "POST", uri, token, Some(body)).await
}

/// Registers a user and returns the fresh session token.
pub async fn register(router: &Router, username: &str, email: &str, password: &str) -> String {
    let (status, body) = post(
        router,
        "/api/v1/auth/register",
        None,
        json!({
            "username": username,
            "email": email,
            "password": password,
            "password_confirm": password,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    body["session"]["token"].as_str().unwrap().to_owned()
}

/// Creates a published dessert and returns its slug.
pub async fn create_dessert(router: &Router, token: &str, title: &str) -> String {
    let (status, body) = post(
        router,
        "/api/v1/desserts",
        Some(token),
        json!({
            "title": title,
            "photo": "photos/cake.jpg",
            "ingredients": "flour, sugar, eggs",
            "description": "bake it",
            "cooking_time": 45,
            "steps": [
                {"text": "mix everything", "image": "steps/mix.jpg"},
                {"text": "bake at 180C", "image": "steps/bake.jpg"},
            ],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create dessert failed: {body}");
    body["slug"].as_str().unwrap().to_owned()
}
