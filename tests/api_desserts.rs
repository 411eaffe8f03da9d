// tests/api_desserts.rs
use axum::http::StatusCode;
use serde_json::json;

mod support;

#[tokio::test]
async fn created_dessert_is_served_back_by_slug() {
    let app = support::make_test_app();
    let token = support::register(&app.router, "alice", "alice@example.com", "s3cretpass").await;

    let (status, body) = support::post(
        &app.router,
        "/api/v1/desserts",
        Some(&token),
        json!({
            "title": "Торт Наполеон",
            "photo": "photos/napoleon.jpg",
            "ingredients": "puff pastry, custard",
            "description": "layered classic",
            "cooking_time": 120,
            "steps": [
                {"text": "bake the layers", "image": "steps/layers.jpg"},
                {"text": "whip the custard", "image": "steps/custard.jpg"},
            ],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let slug = body["slug"].as_str().unwrap();
    assert!(slug.starts_with("tort-napoleon-"), "unexpected slug {slug}");
    assert_eq!(body["published"], true);

    let (status, body) =
        support::get(&app.router, &format!("/api/v1/desserts/{slug}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Торт Наполеон");
    assert_eq!(body["cooking_time"], 120);
    let steps = body["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0]["text"], "bake the layers");
    assert_eq!(body["comments"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn forbidden_title_character_is_rejected_with_field() {
    let app = support::make_test_app();
    let token = support::register(&app.router, "alice", "alice@example.com", "s3cretpass").await;

    let (status, body) = support::post(
        &app.router,
        "/api/v1/desserts",
        Some(&token),
        json!({
            "title": "Cake (v2)",
            "photo": "photos/cake.jpg",
            "ingredients": "flour",
            "description": "d",
            "cooking_time": 30,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "title");
}

#[tokio::test]
async fn cooking_time_outside_bounds_is_rejected() {
    let app = support::make_test_app();
    let token = support::register(&app.router, "alice", "alice@example.com", "s3cretpass").await;

    for minutes in [0, 241] {
        let (status, body) = support::post(
            &app.router,
            "/api/v1/desserts",
            Some(&token),
            json!({
                "title": "Cake",
                "photo": "photos/cake.jpg",
                "ingredients": "flour",
                "description": "d",
                "cooking_time": minutes,
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{minutes} accepted");
        assert_eq!(body["field"], "cooking_time");
    }
}

#[tokio::test]
async fn unknown_category_id_is_rejected() {
    let app = support::make_test_app();
    let token = support::register(&app.router, "alice", "alice@example.com", "s3cretpass").await;

    let (status, body) = support::post(
        &app.router,
        "/api/v1/desserts",
        Some(&token),
        json!({
            "title": "Cake",
            "photo": "photos/cake.jpg",
            "ingredients": "flour",
            "description": "d",
            "cooking_time": 30,
            "categories": [999],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "categories");
}

#[tokio::test]
async fn unpublished_dessert_is_hidden_from_everyone_but_its_owner() {
    let app = support::make_test_app();
    let owner = support::register(&app.router, "alice", "alice@example.com", "s3cretpass").await;
    let other = support::register(&app.router, "bob", "bob@example.com", "s3cretpass").await;

    let (status, body) = support::post(
        &app.router,
        "/api/v1/desserts",
        Some(&owner),
        json!({
            "title": "Secret Draft",
            "photo": "photos/draft.jpg",
            "ingredients": "tbd",
            "description": "tbd",
            "cooking_time": 10,
            "published": false,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let slug = body["slug"].as_str().unwrap().to_owned();
    let uri = format!("/api/v1/desserts/{slug}");

    let (status, _) = support::get(&app.router, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = support::get(&app.router, &uri, Some(&other)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = support::get(&app.router, &uri, Some(&owner)).await;
    assert_eq!(status, StatusCode::OK);

    // Drafts never show up in the public listing either.
    let (status, body) = support::get(&app.router, "/api/v1/desserts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_items"], 0);
}

#[tokio::test]
async fn editing_someone_elses_dessert_is_forbidden_not_hidden() {
    let app = support::make_test_app();
    let owner = support::register(&app.router, "alice", "alice@example.com", "s3cretpass").await;
    let intruder = support::register(&app.router, "bob", "bob@example.com", "s3cretpass").await;
    let slug = support::create_dessert(&app.router, &owner, "Cheesecake").await;

    let payload = json!({
        "title": "Hijacked",
        "photo": "photos/x.jpg",
        "ingredients": "x",
        "description": "x",
        "cooking_time": 5,
    });

    let (status, _) = support::request(
        &app.router,
        "PUT",
        &format!("/api/v1/desserts/{slug}"),
        Some(&intruder),
        Some(payload),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = support::request(
        &app.router,
        "DELETE",
        &format!("/api/v1/desserts/{slug}"),
        Some(&intruder),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn edit_replaces_fields_steps_and_slug() {
    let app = support::make_test_app();
    let token = support::register(&app.router, "alice", "alice@example.com", "s3cretpass").await;
    let slug = support::create_dessert(&app.router, &token, "Cheesecake").await;

    let (status, body) = support::request(
        &app.router,
        "PUT",
        &format!("/api/v1/desserts/{slug}"),
        Some(&token),
        Some(json!({
            "title": "Медовик",
            "photo": "photos/medovik.jpg",
            "ingredients": "honey, flour",
            "description": "honey cake",
            "cooking_time": 90,
            "steps": [{"text": "one big step", "image": "steps/one.jpg"}],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let new_slug = body["slug"].as_str().unwrap().to_owned();
    // The slug is regenerated from the new title, so the URL moves.
    assert!(new_slug.starts_with("medovik-"), "unexpected slug {new_slug}");

    let (status, body) =
        support::get(&app.router, &format!("/api/v1/desserts/{new_slug}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Медовик");
    assert_eq!(body["steps"].as_array().unwrap().len(), 1);
    assert_eq!(app.store.step_count(), 1);
}

#[tokio::test]
async fn delete_removes_the_dessert_and_its_children() {
    let app = support::make_test_app();
    let token = support::register(&app.router, "alice", "alice@example.com", "s3cretpass").await;
    let slug = support::create_dessert(&app.router, &token, "Cheesecake").await;

    let (status, _) = support::request(
        &app.router,
        "DELETE",
        &format!("/api/v1/desserts/{slug}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(app.store.dessert_count(), 0);
    assert_eq!(app.store.step_count(), 0);

    let (status, _) =
        support::get(&app.router, &format!("/api/v1/desserts/{slug}"), Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_paginates_newest_first() {
    let app = support::make_test_app();
    let token = support::register(&app.router, "alice", "alice@example.com", "s3cretpass").await;
    for i in 1..=5 {
        support::create_dessert(&app.router, &token, &format!("Cake {i}")).await;
    }

    let (status, body) =
        support::get(&app.router, "/api/v1/desserts?page=1&per_page=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_items"], 5);
    assert_eq!(body["total_pages"], 3);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Cake 5");

    let (status, body) =
        support::get(&app.router, "/api/v1/desserts?page=3&per_page=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["title"], "Cake 1");
}

#[tokio::test]
async fn listing_filters_by_author_and_unknown_filter_slugs_404() {
    let app = support::make_test_app();
    let alice = support::register(&app.router, "alice", "alice@example.com", "s3cretpass").await;
    let bob = support::register(&app.router, "bob", "bob@example.com", "s3cretpass").await;
    support::create_dessert(&app.router, &alice, "Alice Cake").await;
    support::create_dessert(&app.router, &bob, "Bob Cake").await;

    let (_, me) = support::get(&app.router, "/api/v1/auth/me", Some(&alice)).await;
    let profile_slug = me["profile"]["slug"].as_str().unwrap();

    let (status, body) = support::get(
        &app.router,
        &format!("/api/v1/desserts?author={profile_slug}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_items"], 1);
    assert_eq!(body["items"][0]["title"], "Alice Cake");

    let (status, _) =
        support::get(&app.router, "/api/v1/desserts?author=no-such-profile", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) =
        support::get(&app.router, "/api/v1/desserts?category=no-such-category", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn comments_require_a_session_and_land_on_the_detail_page() {
    let app = support::make_test_app();
    let owner = support::register(&app.router, "alice", "alice@example.com", "s3cretpass").await;
    let reader = support::register(&app.router, "bob", "bob@example.com", "s3cretpass").await;
    let slug = support::create_dessert(&app.router, &owner, "Cheesecake").await;
    let uri = format!("/api/v1/desserts/{slug}/comments");

    let (status, _) = support::post(&app.router, &uri, None, json!({"text": "yum"})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) =
        support::post(&app.router, &uri, Some(&reader), json!({"text": "   "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "text");

    let (status, body) =
        support::post(&app.router, &uri, Some(&reader), json!({"text": "looks great"})).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    let (status, body) =
        support::get(&app.router, &format!("/api/v1/desserts/{slug}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["text"], "looks great");
}
