use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressStatus {
    #[default]
    Active,
    Inactive,
}

impl AddressStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(AddressStatus::Active),
            "inactive" => Some(AddressStatus::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "Title is required"))]
    #[serde(default)]
    pub title: String,
    #[validate(length(min = 1, message = "Name is required"))]
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1, message = "Address is required"))]
    #[serde(default)]
    pub address: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    #[serde(default)]
    pub phone: String,
    #[validate(email(message = "Email is invalid"))]
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub status: AddressStatus,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Address {
    pub fn is_active(&self) -> bool {
        self.status == AddressStatus::Active
    }
}
