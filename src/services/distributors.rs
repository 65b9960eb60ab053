use crate::db::{DocStore, Document};
use crate::errors::{validation_messages, AppError};
use crate::models::distributor::{ApplicationStatus, DistributorApplication};
use chrono::Utc;
use serde_json::Value as JsonValue;
use validator::Validate;

pub const COLLECTION: &str = "distributors";

fn decode(doc: Document) -> Result<DistributorApplication, AppError> {
    let mut application: DistributorApplication =
        serde_json::from_value(doc.data).map_err(|e| {
            AppError::internal(anyhow::anyhow!(
                "Failed to decode distributor application record: {}",
                e
            ))
        })?;
    application.id = doc.id;
    Ok(application)
}

pub async fn submit_application(
    docs: &DocStore,
    payload: JsonValue,
) -> Result<DistributorApplication, AppError> {
    let mut application: DistributorApplication = serde_json::from_value(payload)
        .map_err(|e| AppError::bad_request(format!("Invalid application payload: {}", e)))?;
    let now = Utc::now();
    application.id = String::new();
    application.status = ApplicationStatus::Pending;
    application.date = now;
    application.created_at = now;
    application.updated_at = now;

    if let Err(errors) = application.validate() {
        return Err(AppError::validation(validation_messages(&errors)));
    }

    let data = serde_json::to_value(&application).map_err(|e| {
        AppError::internal(anyhow::anyhow!(
            "Failed to encode distributor application record: {}",
            e
        ))
    })?;
    application.id = docs.create(COLLECTION, &data).await?;

    Ok(application)
}

pub async fn update_status(docs: &DocStore, id: &str, status: &str) -> Result<(), AppError> {
    let status = ApplicationStatus::parse(status)
        .ok_or_else(|| AppError::bad_request("Invalid status value"))?;

    let patch = serde_json::json!({ "status": status, "updatedAt": Utc::now() });
    if !docs.update(COLLECTION, id, &patch).await? {
        return Err(AppError::not_found("Application not found"));
    }

    Ok(())
}

pub async fn delete_application(docs: &DocStore, id: &str) -> Result<(), AppError> {
    if !docs.delete(COLLECTION, id).await? {
        return Err(AppError::not_found("Application not found"));
    }
    Ok(())
}

pub async fn get_application(
    docs: &DocStore,
    id: &str,
) -> Result<DistributorApplication, AppError> {
    let data = docs
        .get(COLLECTION, id)
        .await?
        .ok_or_else(|| AppError::not_found("Application not found"))?;
    decode(Document {
        id: id.to_string(),
        data,
    })
}

pub async fn list_applications(docs: &DocStore) -> Result<Vec<DistributorApplication>, AppError> {
    docs.list(COLLECTION)
        .await?
        .into_iter()
        .map(decode)
        .collect()
}

pub async fn recent_applications(
    docs: &DocStore,
    limit: usize,
) -> Result<Vec<DistributorApplication>, AppError> {
    let mut applications = list_applications(docs).await?;
    applications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    applications.truncate(limit);

    Ok(applications)
}

pub async fn count_applications(docs: &DocStore) -> Result<usize, AppError> {
    Ok(docs.list(COLLECTION).await?.len())
}
