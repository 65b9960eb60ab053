use crate::db::{DocStore, Document};
use crate::errors::{validation_messages, AppError};
use crate::models::address::Address;
use crate::utils::json;
use chrono::Utc;
use serde_json::Value as JsonValue;
use validator::Validate;

pub const COLLECTION: &str = "addresses";

fn decode(doc: Document) -> Result<Address, AppError> {
    let mut address: Address = serde_json::from_value(doc.data).map_err(|e| {
        AppError::internal(anyhow::anyhow!("Failed to decode address record: {}", e))
    })?;
    address.id = doc.id;
    Ok(address)
}

fn validate(address: &Address) -> Result<(), AppError> {
    if let Err(errors) = address.validate() {
        return Err(AppError::validation(validation_messages(&errors)));
    }
    Ok(())
}

pub async fn create_address(docs: &DocStore, payload: JsonValue) -> Result<Address, AppError> {
    let mut address: Address = serde_json::from_value(payload)
        .map_err(|e| AppError::bad_request(format!("Invalid address payload: {}", e)))?;
    let now = Utc::now();
    address.id = String::new();
    address.created_at = now;
    address.updated_at = now;

    validate(&address)?;

    let data = serde_json::to_value(&address).map_err(|e| {
        AppError::internal(anyhow::anyhow!("Failed to encode address record: {}", e))
    })?;
    address.id = docs.create(COLLECTION, &data).await?;

    Ok(address)
}

pub async fn update_address(
    docs: &DocStore,
    id: &str,
    payload: JsonValue,
) -> Result<Address, AppError> {
    if !payload.is_object() {
        return Err(AppError::bad_request("Expected a JSON object"));
    }

    let mut merged = docs
        .get(COLLECTION, id)
        .await?
        .ok_or_else(|| AppError::not_found("Address not found"))?;

    let mut patch = payload;
    patch["updatedAt"] = serde_json::json!(Utc::now());
    json::shallow_merge(&mut merged, &patch);

    let mut address: Address = serde_json::from_value(merged)
        .map_err(|e| AppError::bad_request(format!("Invalid address payload: {}", e)))?;
    address.id = id.to_string();
    validate(&address)?;

    if !docs.update(COLLECTION, id, &patch).await? {
        return Err(AppError::not_found("Address not found"));
    }

    Ok(address)
}

pub async fn delete_address(docs: &DocStore, id: &str) -> Result<(), AppError> {
    if !docs.delete(COLLECTION, id).await? {
        return Err(AppError::not_found("Address not found"));
    }
    Ok(())
}

pub async fn get_address(docs: &DocStore, id: &str) -> Result<Address, AppError> {
    let data = docs
        .get(COLLECTION, id)
        .await?
        .ok_or_else(|| AppError::not_found("Address not found"))?;
    decode(Document {
        id: id.to_string(),
        data,
    })
}

pub async fn list_addresses(docs: &DocStore) -> Result<Vec<Address>, AppError> {
    docs.list(COLLECTION)
        .await?
        .into_iter()
        .map(decode)
        .collect()
}

pub async fn active_addresses(docs: &DocStore) -> Result<Vec<Address>, AppError> {
    Ok(list_addresses(docs)
        .await?
        .into_iter()
        .filter(Address::is_active)
        .collect())
}
