use crate::models::Attachment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub label: String,
}

/// Singleton about-page record. Four single-slot attachment roles; each
/// keeps a convenience URL next to the full attachment reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub company_profile: String,
    #[serde(default)]
    pub profile_title: String,
    #[serde(default)]
    pub profile_description: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub banner_image: String,
    #[serde(default)]
    pub banner_image_data: Option<Attachment>,
    #[serde(default)]
    pub company_image: String,
    #[serde(default)]
    pub company_image_data: Option<Attachment>,
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub profile_image_data: Option<Attachment>,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub logo_data: Option<Attachment>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Default for AboutContent {
    fn default() -> Self {
        AboutContent {
            tagline: String::new(),
            company_profile: String::new(),
            profile_title: String::new(),
            profile_description: String::new(),
            stats: Vec::new(),
            banner_image: String::new(),
            banner_image_data: None,
            company_image: String::new(),
            company_image_data: None,
            profile_image: String::new(),
            profile_image_data: None,
            logo: String::new(),
            logo_data: None,
            updated_at: Utc::now(),
        }
    }
}

pub fn validate_about(content: &AboutContent) -> Vec<String> {
    let mut errors = Vec::new();

    if content.tagline.trim().is_empty() {
        errors.push("Tagline is required".to_string());
    }
    if content.company_profile.trim().is_empty() {
        errors.push("Company profile is required".to_string());
    }
    if content.profile_title.trim().is_empty() {
        errors.push("Profile title is required".to_string());
    }
    if content.profile_description.trim().is_empty() {
        errors.push("Profile description is required".to_string());
    }

    if content.stats.is_empty() {
        errors.push("Stats are required".to_string());
    } else {
        for (index, stat) in content.stats.iter().enumerate() {
            if stat.value < 0.0 || !stat.value.is_finite() {
                errors.push(format!("Stat {} value must be a positive number", index + 1));
            }
            if stat.label.trim().is_empty() {
                errors.push(format!("Stat {} label is required", index + 1));
            }
        }
    }

    errors
}

#[cfg(test)]
#[path = "about_tests.rs"]
mod tests;
