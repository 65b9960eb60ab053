use crate::models::Attachment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Homepage section a content item belongs to. Each section is its own
/// collection in the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Carousel,
    TopImages,
    BottomImages,
}

impl Section {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "carousel" => Some(Section::Carousel),
            "topImages" => Some(Section::TopImages),
            "bottomImages" => Some(Section::BottomImages),
            _ => None,
        }
    }

    pub fn collection(&self) -> &'static str {
        match self {
            Section::Carousel => "carousel",
            Section::TopImages => "topImages",
            Section::BottomImages => "bottomImages",
        }
    }

    // Only carousel slides carry a caption.
    pub fn requires_title(&self) -> bool {
        matches!(self, Section::Carousel)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub image_data: Option<Attachment>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

pub fn validate_item(section: Section, item: &HomeItem) -> Vec<String> {
    let mut errors = Vec::new();

    if section.requires_title() && item.title.trim().is_empty() {
        errors.push("Title is required for carousel items".to_string());
    }
    if item.image_data.is_none() {
        errors.push("Image is required".to_string());
    }

    errors
}

#[cfg(test)]
#[path = "home_tests.rs"]
mod tests;
