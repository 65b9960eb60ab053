use crate::db::{DocStore, Document};
use crate::errors::{validation_messages, AppError};
use crate::models::enquiry::{Enquiry, EnquiryStatus};
use chrono::Utc;
use serde_json::Value as JsonValue;
use validator::Validate;

pub const COLLECTION: &str = "enquiries";

fn decode(doc: Document) -> Result<Enquiry, AppError> {
    let mut enquiry: Enquiry = serde_json::from_value(doc.data).map_err(|e| {
        AppError::internal(anyhow::anyhow!("Failed to decode enquiry record: {}", e))
    })?;
    enquiry.id = doc.id;
    Ok(enquiry)
}

pub async fn create_enquiry(docs: &DocStore, payload: JsonValue) -> Result<Enquiry, AppError> {
    let mut enquiry: Enquiry = serde_json::from_value(payload)
        .map_err(|e| AppError::bad_request(format!("Invalid enquiry payload: {}", e)))?;
    let now = Utc::now();
    enquiry.id = String::new();
    enquiry.status = EnquiryStatus::New;
    enquiry.created_at = now;
    enquiry.updated_at = now;

    if let Err(errors) = enquiry.validate() {
        return Err(AppError::validation(validation_messages(&errors)));
    }

    let data = serde_json::to_value(&enquiry).map_err(|e| {
        AppError::internal(anyhow::anyhow!("Failed to encode enquiry record: {}", e))
    })?;
    enquiry.id = docs.create(COLLECTION, &data).await?;

    Ok(enquiry)
}

pub async fn update_status(docs: &DocStore, id: &str, status: &str) -> Result<(), AppError> {
    let status =
        EnquiryStatus::parse(status).ok_or_else(|| AppError::bad_request("Invalid status value"))?;

    let patch = serde_json::json!({ "status": status, "updatedAt": Utc::now() });
    if !docs.update(COLLECTION, id, &patch).await? {
        return Err(AppError::not_found(format!(
            "Enquiry with ID {} not found",
            id
        )));
    }

    Ok(())
}

pub async fn delete_enquiry(docs: &DocStore, id: &str) -> Result<(), AppError> {
    if docs.get(COLLECTION, id).await?.is_none() {
        return Err(AppError::not_found(format!(
            "Enquiry with ID {} not found",
            id
        )));
    }
    docs.delete(COLLECTION, id).await?;

    Ok(())
}

pub async fn get_enquiry(docs: &DocStore, id: &str) -> Result<Enquiry, AppError> {
    let data = docs
        .get(COLLECTION, id)
        .await?
        .ok_or_else(|| AppError::not_found("Enquiry not found"))?;
    decode(Document {
        id: id.to_string(),
        data,
    })
}

pub async fn list_enquiries(docs: &DocStore) -> Result<Vec<Enquiry>, AppError> {
    docs.list(COLLECTION)
        .await?
        .into_iter()
        .map(decode)
        .collect()
}

pub async fn recent_enquiries(docs: &DocStore, limit: usize) -> Result<Vec<Enquiry>, AppError> {
    let mut enquiries = list_enquiries(docs).await?;
    enquiries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    enquiries.truncate(limit);

    Ok(enquiries)
}

pub async fn count_enquiries(docs: &DocStore) -> Result<usize, AppError> {
    Ok(docs.list(COLLECTION).await?.len())
}
