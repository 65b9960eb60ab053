use crate::{errors, services, AppState};
use axum::{extract, http, routing, Json, Router};
use serde_json::{json, Value as JsonValue};

pub async fn get_all_footer_details(
    extract::State(state): extract::State<AppState>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let details = services::footer::list_footer(&state.docs).await?;

    Ok(Json(json!({ "success": true, "data": details })))
}

pub async fn get_footer_detail(
    extract::State(state): extract::State<AppState>,
    extract::Path(id): extract::Path<String>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let detail = services::footer::get_footer(&state.docs, &id).await?;

    Ok(Json(json!({ "success": true, "data": detail })))
}

pub async fn create_footer_detail(
    extract::State(state): extract::State<AppState>,
    Json(payload): Json<JsonValue>,
) -> Result<(http::StatusCode, Json<JsonValue>), errors::AppError> {
    let detail = services::footer::create_footer(&state.docs, payload).await?;

    Ok((
        http::StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Footer detail created successfully",
            "data": detail,
        })),
    ))
}

pub async fn update_footer_detail(
    extract::State(state): extract::State<AppState>,
    extract::Path(id): extract::Path<String>,
    Json(payload): Json<JsonValue>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let detail = services::footer::update_footer(&state.docs, &id, payload).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Footer detail updated successfully",
        "data": detail,
    })))
}

pub async fn delete_footer_detail(
    extract::State(state): extract::State<AppState>,
    extract::Path(id): extract::Path<String>,
) -> Result<Json<JsonValue>, errors::AppError> {
    services::footer::delete_footer(&state.docs, &id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Footer detail deleted successfully",
    })))
}

pub async fn get_active_footer(
    extract::State(state): extract::State<AppState>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let detail = services::footer::active_footer(&state.docs).await?;

    Ok(Json(json!({ "success": true, "data": detail })))
}

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/admin/footer", routing::get(get_all_footer_details))
        .route("/admin/footer", routing::post(create_footer_detail))
        .route("/admin/footer/:id", routing::get(get_footer_detail))
        .route("/admin/footer/:id", routing::put(update_footer_detail))
        .route("/admin/footer/:id", routing::delete(delete_footer_detail))
        .route("/footer", routing::get(get_active_footer))
}
