use crate::{errors, services, AppState};
use axum::{extract, http, routing, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    #[serde(default)]
    pub status: String,
}

pub async fn submit_application(
    extract::State(state): extract::State<AppState>,
    Json(payload): Json<JsonValue>,
) -> Result<(http::StatusCode, Json<JsonValue>), errors::AppError> {
    let application = services::distributors::submit_application(&state.docs, payload).await?;

    Ok((
        http::StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Application submitted successfully",
            "applicationId": application.id,
        })),
    ))
}

pub async fn get_all_applications(
    extract::State(state): extract::State<AppState>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let applications = services::distributors::list_applications(&state.docs).await?;

    Ok(Json(json!({ "success": true, "data": applications })))
}

pub async fn get_application(
    extract::State(state): extract::State<AppState>,
    extract::Path(id): extract::Path<String>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let application = services::distributors::get_application(&state.docs, &id).await?;

    Ok(Json(json!({ "success": true, "data": application })))
}

pub async fn update_status(
    extract::State(state): extract::State<AppState>,
    extract::Path(id): extract::Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> Result<Json<JsonValue>, errors::AppError> {
    services::distributors::update_status(&state.docs, &id, &payload.status).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Status updated successfully",
    })))
}

pub async fn delete_application(
    extract::State(state): extract::State<AppState>,
    extract::Path(id): extract::Path<String>,
) -> Result<Json<JsonValue>, errors::AppError> {
    services::distributors::delete_application(&state.docs, &id).await?;

    Ok(Json(json!({
        "success": true,
        "message": format!("Application {} deleted successfully", id),
    })))
}

pub async fn get_application_count(
    extract::State(state): extract::State<AppState>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let count = services::distributors::count_applications(&state.docs).await?;

    Ok(Json(json!({ "success": true, "data": { "count": count } })))
}

pub async fn get_recent_applications(
    extract::State(state): extract::State<AppState>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let applications = services::distributors::recent_applications(&state.docs, 5).await?;

    Ok(Json(json!({ "success": true, "data": applications })))
}

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/distributor", routing::post(submit_application))
        .route("/admin/distributor", routing::get(get_all_applications))
        .route(
            "/admin/distributor/count",
            routing::get(get_application_count),
        )
        .route(
            "/admin/distributor/recent",
            routing::get(get_recent_applications),
        )
        .route("/admin/distributor/:id", routing::get(get_application))
        .route(
            "/admin/distributor/:id/status",
            routing::patch(update_status),
        )
        .route("/admin/distributor/:id", routing::delete(delete_application))
}
