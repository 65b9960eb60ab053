use crate::db::DocStore;
use crate::errors::AppError;
use crate::models::about::{validate_about, AboutContent};
use crate::models::Attachment;
use crate::services::attachments::{reconcile_slot, StagedUploads};
use crate::storage::{ObjectStore, StorageError};
use crate::utils::{forms::Form, json};
use chrono::Utc;
use futures::future::join_all;

pub const COLLECTION: &str = "about";
pub const DOC_ID: &str = "about";

/// The four single-slot roles of the about page, with the multipart file
/// field and keep-existing flag each one answers to.
const SLOTS: [(&str, &str); 4] = [
    ("bannerImage", "keepExistingBannerImage"),
    ("companyImage", "keepExistingCompanyImage"),
    ("profileImage", "keepExistingProfileImage"),
    ("logo", "keepExistingLogo"),
];

fn decode(data: serde_json::Value) -> Result<AboutContent, AppError> {
    serde_json::from_value(data).map_err(|e| {
        AppError::internal(anyhow::anyhow!("Failed to decode about record: {}", e))
    })
}

pub async fn get_about(docs: &DocStore) -> Result<Option<AboutContent>, AppError> {
    match docs.get(COLLECTION, DOC_ID).await? {
        Some(data) => Ok(Some(decode(data)?)),
        None => Ok(None),
    }
}

/// Uploads every provided slot file concurrently. On a partial failure
/// the slots that did upload are cleaned up before the error surfaces.
async fn upload_slots(
    store: &ObjectStore,
    form: &Form,
) -> Result<Vec<Option<Attachment>>, AppError> {
    let uploads = SLOTS.iter().map(|(role, _)| async move {
        match form.first_file(role) {
            Some(file) => Some(store.upload(file, role).await),
            None => None,
        }
    });
    let results: Vec<Option<Result<Attachment, StorageError>>> = join_all(uploads).await;

    let mut uploaded = Vec::with_capacity(results.len());
    let mut failure = None;
    for result in results {
        match result {
            None => uploaded.push(None),
            Some(Ok(attachment)) => uploaded.push(Some(attachment)),
            Some(Err(err)) => {
                if failure.is_none() {
                    failure = Some(err);
                }
                uploaded.push(None);
            }
        }
    }

    if let Some(err) = failure {
        let succeeded: Vec<Attachment> = uploaded.into_iter().flatten().collect();
        store.cleanup(&succeeded).await;
        return Err(AppError::Upload(err));
    }

    Ok(uploaded)
}

pub async fn update_about(
    docs: &DocStore,
    store: &ObjectStore,
    form: &Form,
) -> Result<AboutContent, AppError> {
    let mut uploaded = upload_slots(store, form).await?;
    let mut staged = StagedUploads::new();
    staged.extend(uploaded.iter().flatten().cloned());

    let existing = match docs.get(COLLECTION, DOC_ID).await {
        Ok(Some(data)) => match decode(data) {
            Ok(content) => content,
            Err(err) => {
                staged.discard(store).await;
                return Err(err);
            }
        },
        Ok(None) => AboutContent::default(),
        Err(err) => {
            staged.discard(store).await;
            return Err(AppError::Persistence(err));
        }
    };

    let logo_plan = reconcile_slot(
        existing.logo_data.clone(),
        uploaded.pop().flatten(),
        form.flag(SLOTS[3].1),
    );
    let profile_plan = reconcile_slot(
        existing.profile_image_data.clone(),
        uploaded.pop().flatten(),
        form.flag(SLOTS[2].1),
    );
    let company_plan = reconcile_slot(
        existing.company_image_data.clone(),
        uploaded.pop().flatten(),
        form.flag(SLOTS[1].1),
    );
    let banner_plan = reconcile_slot(
        existing.banner_image_data.clone(),
        uploaded.pop().flatten(),
        form.flag(SLOTS[0].1),
    );

    let slot_url = |value: &Option<Attachment>| {
        value.as_ref().map(|a| a.url.clone()).unwrap_or_default()
    };

    let content = AboutContent {
        tagline: form.text_or_default("tagline"),
        company_profile: form.text_or_default("companyProfile"),
        profile_title: form.text_or_default("profileTitle"),
        profile_description: form.text_or_default("profileDescription"),
        stats: json::lenient_json_list(form.text("stats")),
        banner_image: slot_url(&banner_plan.value),
        banner_image_data: banner_plan.value,
        company_image: slot_url(&company_plan.value),
        company_image_data: company_plan.value,
        profile_image: slot_url(&profile_plan.value),
        profile_image_data: profile_plan.value,
        logo: slot_url(&logo_plan.value),
        logo_data: logo_plan.value,
        updated_at: Utc::now(),
    };

    let errors = validate_about(&content);
    if !errors.is_empty() {
        staged.discard(store).await;
        return Err(AppError::validation(errors));
    }

    let data = match serde_json::to_value(&content) {
        Ok(data) => data,
        Err(e) => {
            staged.discard(store).await;
            return Err(AppError::internal(anyhow::anyhow!(
                "Failed to encode about record: {}",
                e
            )));
        }
    };

    if let Err(err) = docs.merge(COLLECTION, DOC_ID, &data).await {
        staged.discard(store).await;
        return Err(AppError::Persistence(err));
    }

    let mut stale = banner_plan.stale;
    stale.extend(company_plan.stale);
    stale.extend(profile_plan.stale);
    stale.extend(logo_plan.stale);
    store.cleanup(&stale).await;

    Ok(content)
}
