use crate::models::subscription::SubscribeRequest;
use crate::{errors, services, AppState};
use axum::{extract, routing, Json, Router};
use serde_json::{json, Value as JsonValue};

pub async fn create_subscription(
    extract::State(state): extract::State<AppState>,
    Json(payload): Json<JsonValue>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let request = SubscribeRequest {
        email: payload
            .get("email")
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
            .to_string(),
    };
    services::subscriptions::subscribe(&state.docs, request).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Subscribed successfully",
    })))
}

pub fn create_route() -> Router<AppState> {
    Router::new().route("/subscribe", routing::post(create_subscription))
}
