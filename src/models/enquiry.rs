use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryStatus {
    #[default]
    New,
    Contacted,
    Closed,
}

impl EnquiryStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "new" => Some(EnquiryStatus::New),
            "contacted" => Some(EnquiryStatus::Contacted),
            "closed" => Some(EnquiryStatus::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "Full name is required"))]
    #[serde(default)]
    pub full_name: String,
    #[validate(email(message = "Email is invalid"))]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1, message = "Company is required"))]
    #[serde(default)]
    pub company: String,
    #[validate(length(min = 1, message = "Country is required"))]
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub phone: String,
    #[validate(length(min = 1, message = "Comments are required"))]
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub status: EnquiryStatus,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}
