use crate::utils::forms::{FileKind, FileRule, Form, MAX_DOCUMENT_BYTES, MAX_IMAGE_BYTES};
use crate::{errors, services, AppState};
use axum::extract::Multipart;
use axum::{extract, http, routing, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};

const UPLOAD_RULES: [FileRule; 2] = [
    FileRule {
        field: "images",
        kind: FileKind::Image,
        max_count: 5,
        max_bytes: MAX_IMAGE_BYTES,
    },
    FileRule {
        field: "downloads",
        kind: FileKind::Document,
        max_count: 3,
        max_bytes: MAX_DOCUMENT_BYTES,
    },
];

pub async fn create_product(
    extract::State(state): extract::State<AppState>,
    multipart: Multipart,
) -> Result<(http::StatusCode, Json<JsonValue>), errors::AppError> {
    let form = Form::from_multipart(multipart, &UPLOAD_RULES).await?;
    let product = services::products::create_product(&state.docs, &state.uploads, &form).await?;

    Ok((
        http::StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Product created successfully",
            "productId": product.id,
            "product": product,
        })),
    ))
}

pub async fn get_all_products(
    extract::State(state): extract::State<AppState>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let products = services::products::list_products(&state.docs).await?;

    Ok(Json(json!({ "success": true, "data": products })))
}

pub async fn get_product_by_id(
    extract::State(state): extract::State<AppState>,
    extract::Path(id): extract::Path<String>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let product = services::products::get_product(&state.docs, &id).await?;

    Ok(Json(json!({ "success": true, "data": product })))
}

pub async fn update_product(
    extract::State(state): extract::State<AppState>,
    extract::Path(id): extract::Path<String>,
    multipart: Multipart,
) -> Result<Json<JsonValue>, errors::AppError> {
    let form = Form::from_multipart(multipart, &UPLOAD_RULES).await?;
    let product =
        services::products::update_product(&state.docs, &state.uploads, &id, &form).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Product updated successfully",
        "product": product,
    })))
}

pub async fn delete_product(
    extract::State(state): extract::State<AppState>,
    extract::Path(id): extract::Path<String>,
) -> Result<Json<JsonValue>, errors::AppError> {
    services::products::delete_product(&state.docs, &state.uploads, &id).await?;

    Ok(Json(json!({
        "success": true,
        "message": format!("Product {} deleted successfully", id),
    })))
}

pub async fn get_product_count(
    extract::State(state): extract::State<AppState>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let count = services::products::count_products(&state.docs).await?;

    Ok(Json(json!({ "success": true, "data": { "count": count } })))
}

pub async fn get_public_product(
    extract::State(state): extract::State<AppState>,
    extract::Path(id): extract::Path<String>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let product = services::products::get_public_product(&state.docs, &id).await?;

    Ok(Json(json!({ "success": true, "data": product })))
}

pub async fn get_showcase_products(
    extract::State(state): extract::State<AppState>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let products = services::products::showcase_products(&state.docs, Some(5)).await?;

    Ok(Json(json!({ "success": true, "data": products })))
}

pub async fn get_showcase_all_products(
    extract::State(state): extract::State<AppState>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let products = services::products::showcase_products(&state.docs, None).await?;

    Ok(Json(json!({ "success": true, "data": products })))
}

pub async fn get_featured_products(
    extract::State(state): extract::State<AppState>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let products = services::products::featured_products(&state.docs).await?;

    Ok(Json(json!({ "success": true, "data": products })))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
}

pub async fn search_products(
    extract::State(state): extract::State<AppState>,
    extract::Query(query): extract::Query<SearchQuery>,
) -> Result<Json<JsonValue>, errors::AppError> {
    let term = query.name.unwrap_or_default();
    if term.trim().is_empty() {
        return Err(errors::AppError::bad_request("Search term is required"));
    }

    let matches = services::products::search_products(&state.docs, &term).await?;

    Ok(Json(json!({ "success": true, "data": matches })))
}

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/admin/products", routing::get(get_all_products))
        .route("/admin/products", routing::post(create_product))
        .route("/admin/products/count", routing::get(get_product_count))
        .route("/admin/products/:id", routing::get(get_product_by_id))
        .route("/admin/products/:id", routing::patch(update_product))
        .route("/admin/products/:id", routing::delete(delete_product))
        .route("/products/showcase", routing::get(get_showcase_products))
        .route(
            "/products/showcaseall",
            routing::get(get_showcase_all_products),
        )
        .route("/products/featured", routing::get(get_featured_products))
        .route("/products/search", routing::get(search_products))
        .route("/products/public/:id", routing::get(get_public_product))
        .route("/products/:id", routing::get(get_public_product))
}
