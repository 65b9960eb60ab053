use crate::models::Attachment;
use crate::utils::forms::UploadedFile;
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::{primitives::ByteStream, Client};
use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object store unreachable: {0}")]
    Unavailable(String),

    #[error("upload of '{name}' failed: {message}")]
    UploadFailed { name: String, message: String },

    #[error("delete of '{key}' failed: {message}")]
    DeleteFailed { key: String, message: String },
}

/// Adapter over the S3 bucket holding every uploaded asset. Keys are
/// namespaced by role; the returned URL stays valid for the lifetime of
/// the blob (no rotation or signing).
#[derive(Clone)]
pub struct ObjectStore {
    client: Client,
    bucket: String,
    public_url_base: String,
}

/// Collision-resistant object key: role prefix, upload instant, random
/// suffix, original extension.
pub fn object_key(role: &str, original_name: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    let extension = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();

    format!(
        "{}/{}-{}{}",
        role,
        Utc::now().timestamp_millis(),
        suffix,
        extension
    )
}

pub fn object_url(public_url_base: &str, bucket: &str, key: &str) -> String {
    format!("{}/{}/{}", public_url_base.trim_end_matches('/'), bucket, key)
}

impl ObjectStore {
    pub fn new(
        client: Client,
        bucket: impl Into<String>,
        public_url_base: impl Into<String>,
    ) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            public_url_base: public_url_base.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Stores the blob under a fresh key scoped to `role` and returns the
    /// durable reference to it.
    pub async fn upload(
        &self,
        file: &UploadedFile,
        role: &str,
    ) -> Result<Attachment, StorageError> {
        let key = object_key(role, &file.original_name);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(&file.content_type)
            .body(ByteStream::from(file.bytes.clone()))
            .send()
            .await
            .map_err(|err| {
                let message = DisplayErrorContext(&err).to_string();
                if is_unreachable(&err) {
                    StorageError::Unavailable(message)
                } else {
                    StorageError::UploadFailed {
                        name: file.original_name.clone(),
                        message,
                    }
                }
            })?;

        Ok(Attachment {
            role: role.to_string(),
            key: key.clone(),
            original_name: file.original_name.clone(),
            url: object_url(&self.public_url_base, &self.bucket, &key),
        })
    }

    /// Deletes the referenced blob. Returns `false` when the blob is
    /// already gone; absence is never an error so that cleanup paths can
    /// call this without an existence pre-check.
    pub async fn delete(&self, attachment: &Attachment) -> Result<bool, StorageError> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(&attachment.key)
            .send()
            .await
        {
            Ok(_) => {}
            Err(SdkError::ServiceError(err)) if err.err().is_not_found() => {
                return Ok(false);
            }
            Err(err) => {
                let message = DisplayErrorContext(&err).to_string();
                return Err(if is_unreachable(&err) {
                    StorageError::Unavailable(message)
                } else {
                    StorageError::DeleteFailed {
                        key: attachment.key.clone(),
                        message,
                    }
                });
            }
        }

        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(&attachment.key)
            .send()
            .await
            .map_err(|err| {
                let message = DisplayErrorContext(&err).to_string();
                if is_unreachable(&err) {
                    StorageError::Unavailable(message)
                } else {
                    StorageError::DeleteFailed {
                        key: attachment.key.clone(),
                        message,
                    }
                }
            })?;

        Ok(true)
    }

    /// Best-effort parallel delete. Failures are logged and swallowed:
    /// this runs inside error-handling paths and must never raise itself.
    pub async fn cleanup(&self, attachments: &[Attachment]) {
        let deletions = attachments.iter().map(|a| self.delete(a));
        for (attachment, result) in attachments.iter().zip(
            futures::future::join_all(deletions).await,
        ) {
            match result {
                Ok(true) => {}
                Ok(false) => {
                    tracing::debug!(key = %attachment.key, "cleanup: blob already absent");
                }
                Err(err) => {
                    tracing::warn!(key = %attachment.key, error = %err, "cleanup: failed to delete blob");
                }
            }
        }
    }
}

fn is_unreachable<E, R>(err: &SdkError<E, R>) -> bool {
    matches!(err, SdkError::DispatchFailure(_) | SdkError::TimeoutError(_))
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
