use crate::{errors, services, AppState};
use axum::{extract, http, routing, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    #[serde(default)]
    pub status: String,
}

pub async fn create_enquiry(
    extract::State(state): extract::State<AppState>,
    Json(payload): Json<JsonValue>,
) -> Result<(http::StatusCode, Json<JsonValue>), errors::AppError> {
    let enquiry = services::enquiries::create_enquiry(&state.docs, payload).await?;

    Ok((
        http::StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Enquiry submitted successfully",
            "enquiryId": enquiry.id,
        })),
    ))
}

pub async fn get_all_enquiries(
    extract::State(state): extract::State<AppState>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let enquiries = services::enquiries::list_enquiries(&state.docs).await?;

    Ok(Json(json!({ "success": true, "data": enquiries })))
}

pub async fn get_enquiry(
    extract::State(state): extract::State<AppState>,
    extract::Path(id): extract::Path<String>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let enquiry = services::enquiries::get_enquiry(&state.docs, &id).await?;

    Ok(Json(json!({ "success": true, "data": enquiry })))
}

pub async fn update_status(
    extract::State(state): extract::State<AppState>,
    extract::Path(id): extract::Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> Result<Json<JsonValue>, errors::AppError> {
    services::enquiries::update_status(&state.docs, &id, &payload.status).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Status updated successfully",
    })))
}

pub async fn delete_enquiry(
    extract::State(state): extract::State<AppState>,
    extract::Path(id): extract::Path<String>,
) -> Result<Json<JsonValue>, errors::AppError> {
    services::enquiries::delete_enquiry(&state.docs, &id).await?;

    Ok(Json(json!({
        "success": true,
        "message": format!("Enquiry {} deleted successfully", id),
    })))
}

pub async fn get_enquiry_count(
    extract::State(state): extract::State<AppState>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let count = services::enquiries::count_enquiries(&state.docs).await?;

    Ok(Json(json!({ "success": true, "data": { "count": count } })))
}

pub async fn get_recent_enquiries(
    extract::State(state): extract::State<AppState>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let enquiries = services::enquiries::recent_enquiries(&state.docs, 5).await?;

    Ok(Json(json!({ "success": true, "data": enquiries })))
}

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/enquiries", routing::post(create_enquiry))
        .route("/admin/enquiries", routing::get(get_all_enquiries))
        .route("/admin/enquiries/count", routing::get(get_enquiry_count))
        .route("/admin/enquiries/recent", routing::get(get_recent_enquiries))
        .route("/admin/enquiries/:id", routing::get(get_enquiry))
        .route("/admin/enquiries/:id/status", routing::patch(update_status))
        .route("/admin/enquiries/:id", routing::delete(delete_enquiry))
}
