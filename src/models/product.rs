use crate::models::Attachment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

impl ProductStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(ProductStatus::Active),
            "inactive" => Some(ProductStatus::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "Product name is required"))]
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1, message = "Category is required"))]
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0, message = "Valid price is required"))]
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub show_price: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub specifications: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub images: Vec<Attachment>,
    #[serde(default)]
    pub main_image: String,
    #[serde(default)]
    pub downloads: Vec<Attachment>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }
}

/// Projection served to public visitors; the price is withheld unless the
/// product opts into showing it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProduct {
    pub id: String,
    pub name: String,
    pub main_image: String,
    pub images: Vec<Attachment>,
    pub description: String,
    pub highlights: Vec<String>,
    pub specifications: Vec<String>,
    pub category: String,
    pub price: Option<f64>,
    pub downloads: Vec<Attachment>,
    pub status: ProductStatus,
}

impl From<Product> for PublicProduct {
    fn from(product: Product) -> Self {
        let price = product.show_price.then_some(product.price);
        PublicProduct {
            id: product.id,
            name: product.name,
            main_image: product.main_image,
            images: product.images,
            description: product.description,
            highlights: product.highlights,
            specifications: product.specifications,
            category: product.category,
            price,
            downloads: product.downloads,
            status: product.status,
        }
    }
}

/// Compact card used by the homepage showcase strips.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseProduct {
    pub id: String,
    pub name: String,
    pub category: String,
    pub main_image: String,
    pub highlight: String,
    pub description: String,
}

impl From<Product> for ShowcaseProduct {
    fn from(product: Product) -> Self {
        let highlight = product
            .highlights
            .first()
            .cloned()
            .unwrap_or_else(|| "No highlights available".to_string());
        let category = if product.category.is_empty() {
            "Uncategorized".to_string()
        } else {
            product.category
        };

        ShowcaseProduct {
            id: product.id,
            name: product.name,
            category,
            main_image: product.main_image,
            highlight,
            description: product.description,
        }
    }
}

#[cfg(test)]
#[path = "product_tests.rs"]
mod tests;
