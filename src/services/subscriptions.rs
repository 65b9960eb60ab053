use crate::db::DocStore;
use crate::errors::{validation_messages, AppError};
use crate::models::subscription::{SubscribeRequest, Subscription};
use chrono::Utc;
use validator::Validate;

pub const COLLECTION: &str = "subscriptions";

pub async fn subscribe(docs: &DocStore, request: SubscribeRequest) -> Result<Subscription, AppError> {
    if let Err(errors) = request.validate() {
        return Err(AppError::validation(validation_messages(&errors)));
    }

    if docs
        .find_by_field(COLLECTION, "email", &request.email)
        .await?
        .is_some()
    {
        return Err(AppError::conflict("Email already subscribed"));
    }

    let mut subscription = Subscription {
        id: String::new(),
        email: request.email,
        subscribed_at: Utc::now(),
    };

    let data = serde_json::to_value(&subscription).map_err(|e| {
        AppError::internal(anyhow::anyhow!(
            "Failed to encode subscription record: {}",
            e
        ))
    })?;
    subscription.id = docs.create(COLLECTION, &data).await?;

    Ok(subscription)
}
