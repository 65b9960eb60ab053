use crate::models::home::Section;
use crate::utils::forms::{FileKind, FileRule, Form, MAX_IMAGE_BYTES};
use crate::{errors, services, AppState};
use axum::extract::Multipart;
use axum::{extract, http, routing, Json, Router};
use serde_json::{json, Value as JsonValue};

const UPLOAD_RULES: [FileRule; 1] = [FileRule {
    field: "image",
    kind: FileKind::Image,
    max_count: 1,
    max_bytes: MAX_IMAGE_BYTES,
}];

fn parse_section(section: &str) -> Result<Section, errors::AppError> {
    Section::parse(section)
        .ok_or_else(|| errors::AppError::bad_request(format!("Invalid section '{}'", section)))
}

pub async fn create_item(
    extract::State(state): extract::State<AppState>,
    extract::Path(section): extract::Path<String>,
    multipart: Multipart,
) -> Result<(http::StatusCode, Json<JsonValue>), errors::AppError> {
    let section = parse_section(&section)?;
    let form = Form::from_multipart(multipart, &UPLOAD_RULES).await?;
    let item = services::home::create_item(&state.docs, &state.uploads, section, &form).await?;

    Ok((
        http::StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": format!("Item created successfully in {}", section),
            "data": item,
        })),
    ))
}

pub async fn get_all_items(
    extract::State(state): extract::State<AppState>,
    extract::Path(section): extract::Path<String>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let section = parse_section(&section)?;
    let items = services::home::list_items(&state.docs, section).await?;

    Ok(Json(json!({ "success": true, "data": items })))
}

pub async fn get_item_by_id(
    extract::State(state): extract::State<AppState>,
    extract::Path((section, id)): extract::Path<(String, String)>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let section = parse_section(&section)?;
    let item = services::home::get_item(&state.docs, section, &id).await?;

    Ok(Json(json!({ "success": true, "data": item })))
}

pub async fn update_item(
    extract::State(state): extract::State<AppState>,
    extract::Path((section, id)): extract::Path<(String, String)>,
    multipart: Multipart,
) -> Result<Json<JsonValue>, errors::AppError> {
    let section = parse_section(&section)?;
    let form = Form::from_multipart(multipart, &UPLOAD_RULES).await?;
    let item = services::home::update_item(&state.docs, &state.uploads, section, &id, &form).await?;

    Ok(Json(json!({
        "success": true,
        "message": format!("Item updated successfully in {}", section),
        "data": item,
    })))
}

pub async fn delete_item(
    extract::State(state): extract::State<AppState>,
    extract::Path((section, id)): extract::Path<(String, String)>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let section = parse_section(&section)?;
    services::home::delete_item(&state.docs, &state.uploads, section, &id).await?;

    Ok(Json(json!({
        "success": true,
        "message": format!("Item {} deleted successfully from {}", id, section),
    })))
}

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/admin/home/:section", routing::post(create_item))
        .route("/admin/home/:section", routing::get(get_all_items))
        .route("/admin/home/:section/:id", routing::get(get_item_by_id))
        .route("/admin/home/:section/:id", routing::patch(update_item))
        .route("/admin/home/:section/:id", routing::delete(delete_item))
        .route("/home/:section", routing::get(get_all_items))
}
