use crate::utils::forms::{FileKind, FileRule, Form, MAX_ABOUT_IMAGE_BYTES};
use crate::{errors, services, AppState};
use axum::extract::Multipart;
use axum::{extract, routing, Json, Router};
use serde_json::{json, Value as JsonValue};

const UPLOAD_RULES: [FileRule; 4] = [
    FileRule {
        field: "bannerImage",
        kind: FileKind::Image,
        max_count: 1,
        max_bytes: MAX_ABOUT_IMAGE_BYTES,
    },
    FileRule {
        field: "companyImage",
        kind: FileKind::Image,
        max_count: 1,
        max_bytes: MAX_ABOUT_IMAGE_BYTES,
    },
    FileRule {
        field: "profileImage",
        kind: FileKind::Image,
        max_count: 1,
        max_bytes: MAX_ABOUT_IMAGE_BYTES,
    },
    FileRule {
        field: "logo",
        kind: FileKind::Image,
        max_count: 1,
        max_bytes: MAX_ABOUT_IMAGE_BYTES,
    },
];

pub async fn get_about(
    extract::State(state): extract::State<AppState>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let about = services::about::get_about(&state.docs).await?;

    Ok(Json(json!({ "success": true, "data": about })))
}

pub async fn update_about(
    extract::State(state): extract::State<AppState>,
    multipart: Multipart,
) -> Result<Json<JsonValue>, errors::AppError> {
    let form = Form::from_multipart(multipart, &UPLOAD_RULES).await?;
    let about = services::about::update_about(&state.docs, &state.uploads, &form).await?;

    Ok(Json(json!({
        "success": true,
        "message": "About data updated successfully",
        "data": about,
    })))
}

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/admin/about", routing::get(get_about))
        .route("/admin/about", routing::put(update_about))
        .route("/about", routing::get(get_about))
}
