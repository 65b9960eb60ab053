use crate::db::{DocStore, Document};
use crate::errors::{validation_messages, AppError};
use crate::models::product::{Product, ProductStatus, PublicProduct, ShowcaseProduct};
use crate::services::attachments::{self, StagedUploads};
use crate::storage::ObjectStore;
use crate::utils::{forms::Form, json};
use chrono::Utc;
use validator::Validate;

pub const COLLECTION: &str = "products";

const IMAGES_ROLE: &str = "images";
const DOWNLOADS_ROLE: &str = "downloads";

fn decode(doc: Document) -> Result<Product, AppError> {
    let mut product: Product = serde_json::from_value(doc.data)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to decode product record: {}", e)))?;
    product.id = doc.id;
    Ok(product)
}

fn decode_value(id: &str, data: serde_json::Value) -> Result<Product, AppError> {
    decode(Document {
        id: id.to_string(),
        data,
    })
}

/// Uploads both attachment roles of one request concurrently. If either
/// role fails, the blobs the other role managed to store are cleaned up
/// before the error is surfaced.
async fn upload_files(
    store: &ObjectStore,
    form: &Form,
) -> Result<(Vec<crate::models::Attachment>, Vec<crate::models::Attachment>), AppError> {
    let (images, downloads) = tokio::join!(
        attachments::upload_all(store, form.files("images"), IMAGES_ROLE),
        attachments::upload_all(store, form.files("downloads"), DOWNLOADS_ROLE),
    );

    match (images, downloads) {
        (Ok(images), Ok(downloads)) => Ok((images, downloads)),
        (Ok(images), Err(err)) => {
            store.cleanup(&images).await;
            Err(err)
        }
        (Err(err), Ok(downloads)) => {
            store.cleanup(&downloads).await;
            Err(err)
        }
        (Err(err), Err(_)) => Err(err),
    }
}

fn parse_price(raw: Option<&str>, errors: &mut Vec<String>) -> f64 {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => match raw.parse::<f64>() {
            Ok(price) => price,
            Err(_) => {
                errors.push("Valid price is required".to_string());
                0.0
            }
        },
        None => {
            errors.push("Valid price is required".to_string());
            0.0
        }
    }
}

fn parse_status(raw: Option<&str>, errors: &mut Vec<String>) -> ProductStatus {
    match raw {
        Some(raw) => ProductStatus::parse(raw).unwrap_or_else(|| {
            errors.push("Invalid status value".to_string());
            ProductStatus::default()
        }),
        None => ProductStatus::default(),
    }
}

fn validation_errors(product: &Product, mut extra: Vec<String>) -> Vec<String> {
    let mut errors = match product.validate() {
        Ok(()) => Vec::new(),
        Err(e) => validation_messages(&e),
    };
    errors.append(&mut extra);
    errors
}

fn main_image_url(images: &[crate::models::Attachment]) -> String {
    images.first().map(|a| a.url.clone()).unwrap_or_default()
}

pub async fn create_product(
    docs: &DocStore,
    store: &ObjectStore,
    form: &Form,
) -> Result<Product, AppError> {
    let (images, downloads) = upload_files(store, form).await?;
    let mut staged = StagedUploads::new();
    staged.extend(images.iter().cloned());
    staged.extend(downloads.iter().cloned());

    let mut extra_errors = Vec::new();
    let price = parse_price(form.text("price"), &mut extra_errors);
    let status = parse_status(form.text("status"), &mut extra_errors);
    let now = Utc::now();

    let mut product = Product {
        id: String::new(),
        name: form.text_or_default("name"),
        category: form.text_or_default("category"),
        description: form.text_or_default("description"),
        price,
        show_price: form.flag("showPrice"),
        is_featured: form.flag("isFeatured"),
        specifications: json::lenient_string_list(form.text("specifications")),
        highlights: json::lenient_string_list(form.text("highlights")),
        status,
        main_image: main_image_url(&images),
        images,
        downloads,
        created_at: now,
        updated_at: now,
    };

    let errors = validation_errors(&product, extra_errors);
    if !errors.is_empty() {
        staged.discard(store).await;
        return Err(AppError::validation(errors));
    }

    let data = match serde_json::to_value(&product) {
        Ok(data) => data,
        Err(e) => {
            staged.discard(store).await;
            return Err(AppError::internal(anyhow::anyhow!(
                "Failed to encode product record: {}",
                e
            )));
        }
    };

    match docs.create(COLLECTION, &data).await {
        Ok(id) => {
            product.id = id;
            Ok(product)
        }
        Err(err) => {
            staged.discard(store).await;
            Err(AppError::Persistence(err))
        }
    }
}

pub async fn update_product(
    docs: &DocStore,
    store: &ObjectStore,
    id: &str,
    form: &Form,
) -> Result<Product, AppError> {
    let (images, downloads) = upload_files(store, form).await?;
    let mut staged = StagedUploads::new();
    staged.extend(images.iter().cloned());
    staged.extend(downloads.iter().cloned());

    let existing = match docs.get(COLLECTION, id).await {
        Ok(Some(data)) => match decode_value(id, data) {
            Ok(product) => product,
            Err(err) => {
                staged.discard(store).await;
                return Err(err);
            }
        },
        Ok(None) => {
            staged.discard(store).await;
            return Err(AppError::not_found(format!(
                "Product with ID {} not found",
                id
            )));
        }
        Err(err) => {
            staged.discard(store).await;
            return Err(AppError::Persistence(err));
        }
    };

    let images_plan = attachments::reconcile_set(
        existing.images.clone(),
        images,
        form.flag("keepExistingImages"),
    );
    let downloads_plan = attachments::reconcile_set(
        existing.downloads.clone(),
        downloads,
        form.flag("keepExistingDownloads"),
    );

    let mut extra_errors = Vec::new();
    let mut updated = existing;
    updated.id = id.to_string();

    if let Some(name) = form.text("name") {
        updated.name = name.to_string();
    }
    if let Some(category) = form.text("category") {
        updated.category = category.to_string();
    }
    if let Some(description) = form.text("description") {
        updated.description = description.to_string();
    }
    if form.text("price").is_some() {
        updated.price = parse_price(form.text("price"), &mut extra_errors);
    }
    if let Some(raw) = form.text("showPrice") {
        updated.show_price = raw == "true";
    }
    if let Some(raw) = form.text("isFeatured") {
        updated.is_featured = raw == "true";
    }
    if form.text("status").is_some() {
        updated.status = parse_status(form.text("status"), &mut extra_errors);
    }
    if form.text("specifications").is_some() {
        updated.specifications = json::lenient_string_list(form.text("specifications"));
    }
    if form.text("highlights").is_some() {
        updated.highlights = json::lenient_string_list(form.text("highlights"));
    }
    updated.main_image = main_image_url(&images_plan.value);
    updated.images = images_plan.value;
    updated.downloads = downloads_plan.value;
    updated.updated_at = Utc::now();

    let errors = validation_errors(&updated, extra_errors);
    if !errors.is_empty() {
        staged.discard(store).await;
        return Err(AppError::validation(errors));
    }

    let data = match serde_json::to_value(&updated) {
        Ok(data) => data,
        Err(e) => {
            staged.discard(store).await;
            return Err(AppError::internal(anyhow::anyhow!(
                "Failed to encode product record: {}",
                e
            )));
        }
    };

    match docs.update(COLLECTION, id, &data).await {
        Ok(true) => {}
        Ok(false) => {
            staged.discard(store).await;
            return Err(AppError::not_found(format!(
                "Product with ID {} not found",
                id
            )));
        }
        Err(err) => {
            staged.discard(store).await;
            return Err(AppError::Persistence(err));
        }
    }

    // Old blobs are only retired once the record referencing their
    // replacements is durable.
    let mut stale = images_plan.stale;
    stale.extend(downloads_plan.stale);
    store.cleanup(&stale).await;

    Ok(updated)
}

pub async fn delete_product(
    docs: &DocStore,
    store: &ObjectStore,
    id: &str,
) -> Result<(), AppError> {
    let data = docs
        .get(COLLECTION, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product with ID {} not found", id)))?;
    let product = decode_value(id, data)?;

    // Blob cleanup runs before the record delete; if the record delete
    // then fails, the stored product keeps referencing removed blobs.
    let mut owned = product.images;
    owned.extend(product.downloads);
    store.cleanup(&owned).await;

    if !docs.delete(COLLECTION, id).await? {
        return Err(AppError::not_found(format!(
            "Product with ID {} not found",
            id
        )));
    }

    Ok(())
}

pub async fn get_product(docs: &DocStore, id: &str) -> Result<Product, AppError> {
    let data = docs
        .get(COLLECTION, id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;
    decode_value(id, data)
}

pub async fn list_products(docs: &DocStore) -> Result<Vec<Product>, AppError> {
    docs.list(COLLECTION)
        .await?
        .into_iter()
        .map(decode)
        .collect()
}

pub async fn count_products(docs: &DocStore) -> Result<usize, AppError> {
    Ok(docs.list(COLLECTION).await?.len())
}

pub async fn get_public_product(docs: &DocStore, id: &str) -> Result<PublicProduct, AppError> {
    Ok(get_product(docs, id).await?.into())
}

pub async fn showcase_products(
    docs: &DocStore,
    limit: Option<usize>,
) -> Result<Vec<ShowcaseProduct>, AppError> {
    let products = list_products(docs).await?;
    let mut showcase: Vec<ShowcaseProduct> = products
        .into_iter()
        .filter(Product::is_active)
        .map(ShowcaseProduct::from)
        .collect();

    if let Some(limit) = limit {
        showcase.truncate(limit);
    }

    Ok(showcase)
}

pub async fn featured_products(docs: &DocStore) -> Result<Vec<ShowcaseProduct>, AppError> {
    let products = list_products(docs).await?;

    Ok(products
        .into_iter()
        .filter(|p| p.is_active() && p.is_featured)
        .map(ShowcaseProduct::from)
        .collect())
}

/// Case-insensitive name search over active products, returning the id
/// and name pairs the storefront search box needs.
pub async fn search_products(
    docs: &DocStore,
    term: &str,
) -> Result<Vec<serde_json::Value>, AppError> {
    let needle = term.trim().to_lowercase();
    let products = list_products(docs).await?;

    Ok(products
        .into_iter()
        .filter(|p| p.is_active() && p.name.to_lowercase().contains(&needle))
        .map(|p| serde_json::json!({ "id": p.id, "name": p.name }))
        .collect())
}
