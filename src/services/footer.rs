use crate::db::{DocStore, Document};
use crate::errors::AppError;
use crate::models::footer::FooterDetail;
use crate::utils::json;
use chrono::Utc;
use serde_json::Value as JsonValue;

pub const COLLECTION: &str = "footer";

fn decode(doc: Document) -> Result<FooterDetail, AppError> {
    let mut detail: FooterDetail = serde_json::from_value(doc.data).map_err(|e| {
        AppError::internal(anyhow::anyhow!("Failed to decode footer record: {}", e))
    })?;
    detail.id = doc.id;
    Ok(detail)
}

fn require_object(payload: &JsonValue) -> Result<(), AppError> {
    if payload.is_object() {
        Ok(())
    } else {
        Err(AppError::bad_request("Expected a JSON object"))
    }
}

pub async fn create_footer(docs: &DocStore, payload: JsonValue) -> Result<FooterDetail, AppError> {
    require_object(&payload)?;

    let mut detail: FooterDetail = serde_json::from_value(payload)
        .map_err(|e| AppError::bad_request(format!("Invalid footer payload: {}", e)))?;
    let now = Utc::now();
    detail.id = String::new();
    detail.created_at = now;
    detail.updated_at = now;

    let data = serde_json::to_value(&detail)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to encode footer record: {}", e)))?;
    detail.id = docs.create(COLLECTION, &data).await?;

    Ok(detail)
}

pub async fn update_footer(
    docs: &DocStore,
    id: &str,
    payload: JsonValue,
) -> Result<FooterDetail, AppError> {
    require_object(&payload)?;

    let mut existing = docs
        .get(COLLECTION, id)
        .await?
        .ok_or_else(|| AppError::not_found("Footer detail not found"))?;

    let mut patch = payload;
    patch["updatedAt"] = serde_json::json!(Utc::now());

    json::shallow_merge(&mut existing, &patch);
    let mut detail: FooterDetail = serde_json::from_value(existing)
        .map_err(|e| AppError::bad_request(format!("Invalid footer payload: {}", e)))?;
    detail.id = id.to_string();

    if !docs.update(COLLECTION, id, &patch).await? {
        return Err(AppError::not_found("Footer detail not found"));
    }

    Ok(detail)
}

pub async fn delete_footer(docs: &DocStore, id: &str) -> Result<(), AppError> {
    if !docs.delete(COLLECTION, id).await? {
        return Err(AppError::not_found("Footer detail not found"));
    }
    Ok(())
}

pub async fn get_footer(docs: &DocStore, id: &str) -> Result<FooterDetail, AppError> {
    let data = docs
        .get(COLLECTION, id)
        .await?
        .ok_or_else(|| AppError::not_found("Footer detail not found"))?;
    decode(Document {
        id: id.to_string(),
        data,
    })
}

pub async fn list_footer(docs: &DocStore) -> Result<Vec<FooterDetail>, AppError> {
    docs.list(COLLECTION)
        .await?
        .into_iter()
        .map(decode)
        .collect()
}

/// The footer the public site renders: the first configured detail.
pub async fn active_footer(docs: &DocStore) -> Result<FooterDetail, AppError> {
    list_footer(docs)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::not_found("No footer details found"))
}
