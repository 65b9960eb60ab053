use crate::{errors, services, AppState};
use axum::{extract, http, routing, Json, Router};
use serde_json::{json, Value as JsonValue};

pub async fn get_all_addresses(
    extract::State(state): extract::State<AppState>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let addresses = services::addresses::list_addresses(&state.docs).await?;

    Ok(Json(json!({ "success": true, "data": addresses })))
}

pub async fn get_address_by_id(
    extract::State(state): extract::State<AppState>,
    extract::Path(id): extract::Path<String>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let address = services::addresses::get_address(&state.docs, &id).await?;

    Ok(Json(json!({ "success": true, "data": address })))
}

pub async fn create_address(
    extract::State(state): extract::State<AppState>,
    Json(payload): Json<JsonValue>,
) -> Result<(http::StatusCode, Json<JsonValue>), errors::AppError> {
    let address = services::addresses::create_address(&state.docs, payload).await?;

    Ok((
        http::StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Address created successfully",
            "addressId": address.id,
        })),
    ))
}

pub async fn update_address(
    extract::State(state): extract::State<AppState>,
    extract::Path(id): extract::Path<String>,
    Json(payload): Json<JsonValue>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let address = services::addresses::update_address(&state.docs, &id, payload).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Address updated successfully",
        "data": address,
    })))
}

pub async fn delete_address(
    extract::State(state): extract::State<AppState>,
    extract::Path(id): extract::Path<String>,
) -> Result<Json<JsonValue>, errors::AppError> {
    services::addresses::delete_address(&state.docs, &id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Address deleted successfully",
    })))
}

pub async fn get_active_addresses(
    extract::State(state): extract::State<AppState>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let addresses = services::addresses::active_addresses(&state.docs).await?;

    Ok(Json(json!({ "success": true, "data": addresses })))
}

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/admin/addresses", routing::get(get_all_addresses))
        .route("/admin/addresses", routing::post(create_address))
        .route("/admin/addresses/:id", routing::get(get_address_by_id))
        .route("/admin/addresses/:id", routing::put(update_address))
        .route("/admin/addresses/:id", routing::delete(delete_address))
        .route("/addresses", routing::get(get_active_addresses))
}
