use crate::db::{DocStore, Document};
use crate::errors::AppError;
use crate::models::home::{validate_item, HomeItem, Section};
use crate::services::attachments::{self, StagedUploads};
use crate::storage::ObjectStore;
use crate::utils::forms::Form;
use chrono::Utc;

const IMAGE_ROLE: &str = "home";

fn decode(doc: Document) -> Result<HomeItem, AppError> {
    let mut item: HomeItem = serde_json::from_value(doc.data).map_err(|e| {
        AppError::internal(anyhow::anyhow!("Failed to decode home item record: {}", e))
    })?;
    item.id = doc.id;
    Ok(item)
}

fn decode_value(id: &str, data: serde_json::Value) -> Result<HomeItem, AppError> {
    decode(Document {
        id: id.to_string(),
        data,
    })
}

pub async fn create_item(
    docs: &DocStore,
    store: &ObjectStore,
    section: Section,
    form: &Form,
) -> Result<HomeItem, AppError> {
    let upload = attachments::upload_first(store, form.files("image"), IMAGE_ROLE).await?;
    let mut staged = StagedUploads::new();
    staged.extend(upload.iter().cloned());

    let now = Utc::now();
    let mut item = HomeItem {
        id: String::new(),
        title: form.text_or_default("title"),
        image_url: upload.as_ref().map(|a| a.url.clone()).unwrap_or_default(),
        image_data: upload,
        created_at: now,
        updated_at: now,
    };

    let errors = validate_item(section, &item);
    if !errors.is_empty() {
        staged.discard(store).await;
        return Err(AppError::validation(errors));
    }

    let data = match serde_json::to_value(&item) {
        Ok(data) => data,
        Err(e) => {
            staged.discard(store).await;
            return Err(AppError::internal(anyhow::anyhow!(
                "Failed to encode home item record: {}",
                e
            )));
        }
    };

    match docs.create(section.collection(), &data).await {
        Ok(id) => {
            item.id = id;
            Ok(item)
        }
        Err(err) => {
            staged.discard(store).await;
            Err(AppError::Persistence(err))
        }
    }
}

pub async fn update_item(
    docs: &DocStore,
    store: &ObjectStore,
    section: Section,
    id: &str,
    form: &Form,
) -> Result<HomeItem, AppError> {
    let upload = attachments::upload_first(store, form.files("image"), IMAGE_ROLE).await?;
    let mut staged = StagedUploads::new();
    staged.extend(upload.iter().cloned());

    let existing = match docs.get(section.collection(), id).await {
        Ok(Some(data)) => match decode_value(id, data) {
            Ok(item) => item,
            Err(err) => {
                staged.discard(store).await;
                return Err(err);
            }
        },
        Ok(None) => {
            staged.discard(store).await;
            return Err(AppError::not_found(format!(
                "Item with ID {} not found in {}",
                id, section
            )));
        }
        Err(err) => {
            staged.discard(store).await;
            return Err(AppError::Persistence(err));
        }
    };

    let plan = attachments::reconcile_slot(
        existing.image_data.clone(),
        upload,
        form.flag("keepExistingImage"),
    );

    let mut updated = existing;
    updated.id = id.to_string();
    if let Some(title) = form.text("title") {
        updated.title = title.to_string();
    }
    updated.image_url = plan.value.as_ref().map(|a| a.url.clone()).unwrap_or_default();
    updated.image_data = plan.value.clone();
    updated.updated_at = Utc::now();

    let errors = validate_item(section, &updated);
    if !errors.is_empty() {
        staged.discard(store).await;
        return Err(AppError::validation(errors));
    }

    let data = match serde_json::to_value(&updated) {
        Ok(data) => data,
        Err(e) => {
            staged.discard(store).await;
            return Err(AppError::internal(anyhow::anyhow!(
                "Failed to encode home item record: {}",
                e
            )));
        }
    };

    match docs.update(section.collection(), id, &data).await {
        Ok(true) => {}
        Ok(false) => {
            staged.discard(store).await;
            return Err(AppError::not_found(format!(
                "Item with ID {} not found in {}",
                id, section
            )));
        }
        Err(err) => {
            staged.discard(store).await;
            return Err(AppError::Persistence(err));
        }
    }

    store.cleanup(&plan.stale).await;

    Ok(updated)
}

pub async fn delete_item(
    docs: &DocStore,
    store: &ObjectStore,
    section: Section,
    id: &str,
) -> Result<(), AppError> {
    let data = docs.get(section.collection(), id).await?.ok_or_else(|| {
        AppError::not_found(format!("Item with ID {} not found in {}", id, section))
    })?;
    let item = decode_value(id, data)?;

    // Cleanup precedes the record delete; a failed delete leaves a stale
    // record pointing at a removed blob.
    let owned: Vec<_> = item.image_data.into_iter().collect();
    store.cleanup(&owned).await;

    if !docs.delete(section.collection(), id).await? {
        return Err(AppError::not_found(format!(
            "Item with ID {} not found in {}",
            id, section
        )));
    }

    Ok(())
}

pub async fn get_item(docs: &DocStore, section: Section, id: &str) -> Result<HomeItem, AppError> {
    let data = docs
        .get(section.collection(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Item not found in {}", section)))?;
    decode_value(id, data)
}

pub async fn list_items(docs: &DocStore, section: Section) -> Result<Vec<HomeItem>, AppError> {
    docs.list(section.collection())
        .await?
        .into_iter()
        .map(decode)
        .collect()
}
