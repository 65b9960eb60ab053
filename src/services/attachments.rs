use crate::errors::AppError;
use crate::models::Attachment;
use crate::storage::ObjectStore;
use crate::utils::forms::UploadedFile;
use futures::future::join_all;

/// Outcome of reconciling a single-slot attachment role: the value the
/// persisted record should carry, and the old blobs that become stale
/// once the write commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotPlan {
    pub value: Option<Attachment>,
    pub stale: Vec<Attachment>,
}

/// Decides a single-slot role. A new upload always wins and retires the
/// old blob; without one the keep-existing flag decides between leaving
/// the slot untouched and clearing it.
///
/// The plan is computed before the persistence write; `stale` must only
/// be deleted after that write succeeds, otherwise a failed write leaves
/// the stored record pointing at removed blobs.
pub fn reconcile_slot(
    existing: Option<Attachment>,
    upload: Option<Attachment>,
    keep_existing: bool,
) -> SlotPlan {
    match (upload, keep_existing) {
        (Some(new), _) => SlotPlan {
            value: Some(new),
            stale: existing.into_iter().collect(),
        },
        (None, true) => SlotPlan {
            value: existing,
            stale: Vec::new(),
        },
        (None, false) => SlotPlan {
            value: None,
            stale: existing.into_iter().collect(),
        },
    }
}

/// Outcome of reconciling an array attachment role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetPlan {
    pub value: Vec<Attachment>,
    pub stale: Vec<Attachment>,
}

/// Decides an array role: keep-existing appends new uploads to the stored
/// set, otherwise the uploads (possibly none) replace it wholesale.
pub fn reconcile_set(
    existing: Vec<Attachment>,
    uploads: Vec<Attachment>,
    keep_existing: bool,
) -> SetPlan {
    if uploads.is_empty() {
        if keep_existing {
            SetPlan {
                value: existing,
                stale: Vec::new(),
            }
        } else {
            SetPlan {
                value: Vec::new(),
                stale: existing,
            }
        }
    } else if keep_existing {
        let mut value = existing;
        value.extend(uploads);
        SetPlan {
            value,
            stale: Vec::new(),
        }
    } else {
        SetPlan {
            value: uploads,
            stale: existing,
        }
    }
}

/// Blobs uploaded by the current request. Nothing persisted references
/// them until the coordinator commits, so discarding them on any failure
/// path is unconditionally safe.
#[derive(Default)]
pub struct StagedUploads {
    staged: Vec<Attachment>,
}

impl StagedUploads {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, attachment: Attachment) {
        self.staged.push(attachment);
    }

    pub fn extend(&mut self, attachments: impl IntoIterator<Item = Attachment>) {
        self.staged.extend(attachments);
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    pub async fn discard(self, store: &ObjectStore) {
        if !self.staged.is_empty() {
            store.cleanup(&self.staged).await;
        }
    }
}

/// Uploads every file for one role concurrently. If any upload fails the
/// ones that did succeed are cleaned up before the error is reported.
pub async fn upload_all(
    store: &ObjectStore,
    files: &[UploadedFile],
    role: &str,
) -> Result<Vec<Attachment>, AppError> {
    let results = join_all(files.iter().map(|file| store.upload(file, role))).await;

    let mut uploaded = Vec::with_capacity(results.len());
    let mut failure = None;
    for result in results {
        match result {
            Ok(attachment) => uploaded.push(attachment),
            Err(err) if failure.is_none() => failure = Some(err),
            Err(_) => {}
        }
    }

    if let Some(err) = failure {
        store.cleanup(&uploaded).await;
        return Err(AppError::Upload(err));
    }

    Ok(uploaded)
}

/// Single-slot convenience: uploads the first file for the role, if one
/// was sent.
pub async fn upload_first(
    store: &ObjectStore,
    files: &[UploadedFile],
    role: &str,
) -> Result<Option<Attachment>, AppError> {
    match files.first() {
        Some(file) => Ok(Some(store.upload(file, role).await?)),
        None => Ok(None),
    }
}

#[cfg(test)]
#[path = "attachments_tests.rs"]
mod tests;
