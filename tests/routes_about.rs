mod common;

use anyhow::Result;
use axum::{
    body::Body,
    http::{self, Request, StatusCode},
};
use common::{
    list_bucket_keys, multipart_body, multipart_content_type, read_json, setup_app, Part,
};
use tower::ServiceExt;

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfakelogodata";

fn scalar_parts() -> Vec<Part<'static>> {
    vec![
        Part::Text("tagline", "Precision instruments since 1998"),
        Part::Text("companyProfile", "We build industrial weighing systems."),
        Part::Text("profileTitle", "Our story"),
        Part::Text("profileDescription", "Founded by two engineers."),
        Part::Text("stats", r#"[{"value": 25, "label": "Years in business"}]"#),
    ]
}

async fn put_about(app: &axum::Router, parts: &[Part<'_>]) -> Result<axum::response::Response> {
    Ok(app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/admin/about")
                .header(http::header::CONTENT_TYPE, multipart_content_type())
                .body(Body::from(multipart_body(parts)))
                .unwrap(),
        )
        .await?)
}

#[tokio::test]
async fn about_starts_empty() -> Result<()> {
    let (pg_container, s3_container, app, _) = setup_app().await?;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/about")
                .body(Body::empty())
                .unwrap(),
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await?;
    assert!(body["data"].is_null());

    pg_container.stop().await.ok();
    s3_container.stop().await.ok();

    Ok(())
}

#[tokio::test]
async fn missing_scalars_fail_validation_and_clean_up_uploads() -> Result<()> {
    let (pg_container, s3_container, app, s3_client) = setup_app().await?;

    let parts = vec![Part::File {
        field: "logo",
        filename: "logo.png",
        content_type: "image/png",
        data: PNG_BYTES,
    }];
    let response = put_about(&app, &parts).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await?;
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e == "Tagline is required"));
    assert!(errors.iter().any(|e| e == "Stats are required"));

    assert!(list_bucket_keys(&s3_client).await?.is_empty());

    pg_container.stop().await.ok();
    s3_container.stop().await.ok();

    Ok(())
}

#[tokio::test]
async fn logo_round_trip_create_keep_then_clear() -> Result<()> {
    let (pg_container, s3_container, app, s3_client) = setup_app().await?;

    // Create the singleton with a logo.
    let mut parts = scalar_parts();
    parts.push(Part::File {
        field: "logo",
        filename: "logo.png",
        content_type: "image/png",
        data: PNG_BYTES,
    });
    let response = put_about(&app, &parts).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let saved = read_json(response).await?;
    let logo_key = saved["data"]["logoData"]["key"].as_str().unwrap().to_string();
    assert!(logo_key.starts_with("logo/"));
    assert_eq!(list_bucket_keys(&s3_client).await?, vec![logo_key.clone()]);

    // Fetch returns the stored key.
    let fetched = read_json(
        app.clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/admin/about")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await?,
    )
    .await?;
    assert_eq!(fetched["data"]["logoData"]["key"], logo_key.as_str());

    // keepExistingLogo=true leaves the slot untouched.
    let mut parts = scalar_parts();
    parts.push(Part::Text("keepExistingLogo", "true"));
    let response = put_about(&app, &parts).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let kept = read_json(response).await?;
    assert_eq!(kept["data"]["logoData"]["key"], logo_key.as_str());
    assert_eq!(list_bucket_keys(&s3_client).await?, vec![logo_key.clone()]);

    // No upload, no keep flag: the slot clears and the blob is deleted.
    let response = put_about(&app, &scalar_parts()).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let cleared = read_json(response).await?;
    assert!(cleared["data"]["logoData"].is_null());
    assert_eq!(cleared["data"]["logo"], "");
    assert!(list_bucket_keys(&s3_client).await?.is_empty());

    // The cleared slot is durable.
    let fetched = read_json(
        app.clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/about")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await?,
    )
    .await?;
    assert!(fetched["data"]["logoData"].is_null());

    pg_container.stop().await.ok();
    s3_container.stop().await.ok();

    Ok(())
}

#[tokio::test]
async fn replacing_one_slot_leaves_other_slots_alone() -> Result<()> {
    let (pg_container, s3_container, app, s3_client) = setup_app().await?;

    let mut parts = scalar_parts();
    parts.push(Part::File {
        field: "bannerImage",
        filename: "banner.png",
        content_type: "image/png",
        data: PNG_BYTES,
    });
    parts.push(Part::File {
        field: "logo",
        filename: "logo.png",
        content_type: "image/png",
        data: PNG_BYTES,
    });
    let saved = read_json(put_about(&app, &parts).await?).await?;
    let banner_key = saved["data"]["bannerImageData"]["key"]
        .as_str()
        .unwrap()
        .to_string();
    let logo_key = saved["data"]["logoData"]["key"].as_str().unwrap().to_string();

    // Replace only the logo, keeping the banner.
    let mut parts = scalar_parts();
    parts.push(Part::Text("keepExistingBannerImage", "true"));
    parts.push(Part::File {
        field: "logo",
        filename: "logo-v2.png",
        content_type: "image/png",
        data: PNG_BYTES,
    });
    let updated = read_json(put_about(&app, &parts).await?).await?;

    assert_eq!(updated["data"]["bannerImageData"]["key"], banner_key.as_str());
    let new_logo_key = updated["data"]["logoData"]["key"]
        .as_str()
        .unwrap()
        .to_string();
    assert_ne!(new_logo_key, logo_key);

    let mut keys = list_bucket_keys(&s3_client).await?;
    keys.sort();
    let mut expected = vec![banner_key, new_logo_key];
    expected.sort();
    assert_eq!(keys, expected);

    pg_container.stop().await.ok();
    s3_container.stop().await.ok();

    Ok(())
}
