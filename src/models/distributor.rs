use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "pending" => Some(ApplicationStatus::Pending),
            "approved" => Some(ApplicationStatus::Approved),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DistributorApplication {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "Company is required"))]
    #[serde(default)]
    pub company: String,
    #[validate(length(min = 1, message = "Contact name is required"))]
    #[serde(default)]
    pub contact_name: String,
    #[validate(email(message = "Email is invalid"))]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    #[serde(default)]
    pub phone: String,
    #[validate(length(min = 1, message = "Channels are required"))]
    #[serde(default)]
    pub channels: String,
    #[validate(length(min = 1, message = "Title is required"))]
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}
