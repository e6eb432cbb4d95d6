use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use campusmate::{api, config::Settings, integrations::ChatService, storage::SqliteBlobStore, store::StoreContext};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::util::ServiceExt;

async fn test_app() -> anyhow::Result<Router> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let blobs = Arc::new(SqliteBlobStore::new(pool));
    let stores = Arc::new(StoreContext::load(blobs).await?);
    let chat = Arc::new(ChatService::new(None));

    Ok(api::create_app(stores, chat, Arc::new(Settings::default())))
}

async fn body_json(response: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn json_request(method: &str, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// Logs in with the given role and returns the session cookie pair.
async fn login(app: &Router, role: &str, email: &str) -> anyhow::Result<String> {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            None,
            json!({ "role": role, "email": email }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login sets the session cookie")
        .to_str()?
        .to_string();

    // "session=<id>; Path=/; ..." -> "session=<id>"
    Ok(set_cookie.split(';').next().unwrap().to_string())
}

#[tokio::test]
async fn test_routes_are_gated_by_session() -> anyhow::Result<()> {
    let app = test_app().await?;

    let response = app
        .clone()
        .oneshot(get_request("/api/announcements", None))
        .await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let cookie = login(&app, "student", "surya.student@aditya.edu").await?;

    let response = app
        .clone()
        .oneshot(get_request("/api/announcements", Some(&cookie)))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(response).await?;
    assert_eq!(listed.as_array().unwrap().len(), 3);

    Ok(())
}

#[tokio::test]
async fn test_faculty_only_mutations() -> anyhow::Result<()> {
    let app = test_app().await?;

    let student_cookie = login(&app, "student", "surya.student@aditya.edu").await?;
    let announcement = json!({
        "title": "Bus schedule change",
        "category": "Other",
        "date": "Just now"
    });

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/announcements",
            Some(&student_cookie),
            announcement.clone(),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Re-login as faculty (one session at a time)
    let faculty_cookie = login(&app, "faculty", "a.sharma@aditya.edu").await?;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/announcements",
            Some(&faculty_cookie),
            announcement,
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
async fn test_calendar_duplicate_outcome_over_http() -> anyhow::Result<()> {
    let app = test_app().await?;
    let cookie = login(&app, "student", "surya.student@aditya.edu").await?;

    let event = json!({
        "id": "ev1",
        "title": "Annual Cultural Fest: AARAMBH",
        "kind": "Campus Event",
        "date": "2024-08-20",
        "time": "5:00 PM onwards",
        "location": "Main Auditorium"
    });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/calendar", Some(&cookie), event.clone()))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await?["outcome"], "added");

    // Adding the same catalog event again is reported, not duplicated
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/calendar", Some(&cookie), event))
        .await?;
    assert_eq!(body_json(response).await?["outcome"], "duplicate");

    Ok(())
}

#[tokio::test]
async fn test_outpass_flow_over_http() -> anyhow::Result<()> {
    let app = test_app().await?;

    let student_cookie = login(&app, "student", "surya.student@aditya.edu").await?;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/outpass",
            Some(&student_cookie),
            json!({
                "kind": "Home",
                "reason": "Festival at home",
                "from_date": "2024-06-10",
                "to_date": "2024-06-14"
            }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await?;
    assert_eq!(created["status"], "Pending");
    let id = created["id"].as_str().unwrap().to_string();

    // Faculty approves it
    let faculty_cookie = login(&app, "faculty", "a.sharma@aditya.edu").await?;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/outpass/{}/approve", id),
            Some(&faculty_cookie),
            json!({}),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await?["status"], "Approved");

    // A second resolution conflicts
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/outpass/{}/reject", id),
            Some(&faculty_cookie),
            json!({}),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    Ok(())
}
