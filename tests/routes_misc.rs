mod common;

use anyhow::Result;
use axum::{
    body::Body,
    http::{self, Request, StatusCode},
};
use common::{read_json, setup_app};
use serde_json::json;
use tower::ServiceExt;

async fn post_json(
    app: &axum::Router,
    uri: &str,
    payload: serde_json::Value,
) -> Result<axum::response::Response> {
    Ok(app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload)?))
                .unwrap(),
        )
        .await?)
}

async fn get(app: &axum::Router, uri: &str) -> Result<axum::response::Response> {
    Ok(app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await?)
}

#[tokio::test]
async fn footer_crud_and_active_selection() -> Result<()> {
    let (pg_container, s3_container, app, _) = setup_app().await?;

    let response = get(&app, "/footer").await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let created = read_json(
        post_json(
            &app,
            "/admin/footer",
            json!({
                "description": "Industrial weighing systems",
                "email": "info@example.com",
                "facebook": "https://facebook.com/example",
            }),
        )
        .await?,
    )
    .await?;
    assert_eq!(created["success"], true);
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/admin/footer/{}", id))
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json!({
                    "phone": "+1 555 0100"
                }))?))
                .unwrap(),
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = read_json(response).await?;
    // Merge semantics: untouched fields survive the patch.
    assert_eq!(updated["data"]["description"], "Industrial weighing systems");
    assert_eq!(updated["data"]["phone"], "+1 555 0100");

    let active = read_json(get(&app, "/footer").await?).await?;
    assert_eq!(active["data"]["id"], id.as_str());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/admin/footer/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, format!("/admin/footer/{}", id).as_str()).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    pg_container.stop().await.ok();
    s3_container.stop().await.ok();

    Ok(())
}

#[tokio::test]
async fn addresses_validate_and_filter_active() -> Result<()> {
    let (pg_container, s3_container, app, _) = setup_app().await?;

    let response = post_json(&app, "/admin/addresses", json!({ "title": "HQ" })).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await?;
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e == "Name is required"));
    assert!(errors.iter().any(|e| e == "Email is invalid"));

    let response = post_json(
        &app,
        "/admin/addresses",
        json!({
            "title": "HQ",
            "name": "Head Office",
            "address": "1 Factory Road",
            "phone": "+1 555 0100",
            "email": "hq@example.com",
        }),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        &app,
        "/admin/addresses",
        json!({
            "title": "Old depot",
            "name": "Depot",
            "address": "2 Old Road",
            "phone": "+1 555 0101",
            "email": "depot@example.com",
            "status": "inactive",
        }),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let all = read_json(get(&app, "/admin/addresses").await?).await?;
    assert_eq!(all["data"].as_array().unwrap().len(), 2);

    let active = read_json(get(&app, "/addresses").await?).await?;
    let active = active["data"].as_array().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["title"], "HQ");

    pg_container.stop().await.ok();
    s3_container.stop().await.ok();

    Ok(())
}

#[tokio::test]
async fn enquiry_lifecycle() -> Result<()> {
    let (pg_container, s3_container, app, _) = setup_app().await?;

    let response = post_json(&app, "/enquiries", json!({ "fullName": "Ada" })).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let created = read_json(
        post_json(
            &app,
            "/enquiries",
            json!({
                "fullName": "Ada Lovelace",
                "email": "ada@example.com",
                "company": "Analytical Engines",
                "country": "UK",
                "comments": "Interested in the crane scale.",
            }),
        )
        .await?,
    )
    .await?;
    assert_eq!(created["success"], true);
    let id = created["enquiryId"].as_str().unwrap().to_string();

    let fetched = read_json(get(&app, format!("/admin/enquiries/{}", id).as_str()).await?).await?;
    assert_eq!(fetched["data"]["status"], "new");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/admin/enquiries/{}/status", id))
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json!({ "status": "escalated" }))?))
                .unwrap(),
        )
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/admin/enquiries/{}/status", id))
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json!({ "status": "contacted" }))?))
                .unwrap(),
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = read_json(get(&app, format!("/admin/enquiries/{}", id).as_str()).await?).await?;
    assert_eq!(fetched["data"]["status"], "contacted");

    let count = read_json(get(&app, "/admin/enquiries/count").await?).await?;
    assert_eq!(count["data"]["count"], 1);

    let recent = read_json(get(&app, "/admin/enquiries/recent").await?).await?;
    assert_eq!(recent["data"].as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/admin/enquiries/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, format!("/admin/enquiries/{}", id).as_str()).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    pg_container.stop().await.ok();
    s3_container.stop().await.ok();

    Ok(())
}

#[tokio::test]
async fn distributor_application_lifecycle() -> Result<()> {
    let (pg_container, s3_container, app, _) = setup_app().await?;

    let response = post_json(&app, "/distributor", json!({ "company": "Only Co" })).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let created = read_json(
        post_json(
            &app,
            "/distributor",
            json!({
                "company": "Scales R Us",
                "contactName": "Grace Hopper",
                "email": "grace@example.com",
                "phone": "+1 555 0102",
                "channels": "Retail, Online",
                "title": "CEO",
            }),
        )
        .await?,
    )
    .await?;
    let id = created["applicationId"].as_str().unwrap().to_string();

    let fetched =
        read_json(get(&app, format!("/admin/distributor/{}", id).as_str()).await?).await?;
    assert_eq!(fetched["data"]["status"], "pending");

    // Status input is case-insensitive.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/admin/distributor/{}/status", id))
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json!({ "status": "Approved" }))?))
                .unwrap(),
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched =
        read_json(get(&app, format!("/admin/distributor/{}", id).as_str()).await?).await?;
    assert_eq!(fetched["data"]["status"], "approved");

    let count = read_json(get(&app, "/admin/distributor/count").await?).await?;
    assert_eq!(count["data"]["count"], 1);

    pg_container.stop().await.ok();
    s3_container.stop().await.ok();

    Ok(())
}

#[tokio::test]
async fn duplicate_subscription_conflicts() -> Result<()> {
    let (pg_container, s3_container, app, _) = setup_app().await?;

    let response = post_json(&app, "/subscribe", json!({ "email": "not-an-email" })).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(&app, "/subscribe", json!({ "email": "news@example.com" })).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(&app, "/subscribe", json!({ "email": "news@example.com" })).await?;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = read_json(response).await?;
    assert_eq!(body["error"], "Email already subscribed");

    pg_container.stop().await.ok();
    s3_container.stop().await.ok();

    Ok(())
}
