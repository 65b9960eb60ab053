use crate::errors::AppError;
use axum::extract::Multipart;
use bytes::Bytes;
use std::collections::HashMap;

pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
pub const MAX_ABOUT_IMAGE_BYTES: usize = 15 * 1024 * 1024;
pub const MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

const IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
];
const DOCUMENT_TYPES: &[&str] = &["application/pdf", "application/zip"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Document,
}

impl FileKind {
    pub fn accepts(&self, content_type: &str) -> bool {
        match self {
            FileKind::Image => IMAGE_TYPES.contains(&content_type),
            FileKind::Document => DOCUMENT_TYPES.contains(&content_type),
        }
    }
}

/// Acceptance rule for one file field of a multipart form. File count,
/// size, and content type are enforced here at the parse boundary, before
/// anything reaches the object store.
pub struct FileRule {
    pub field: &'static str,
    pub kind: FileKind,
    pub max_count: usize,
    pub max_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub original_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

#[derive(Default)]
pub struct Form {
    fields: HashMap<String, String>,
    files: HashMap<String, Vec<UploadedFile>>,
}

impl Form {
    pub async fn from_multipart(
        mut multipart: Multipart,
        rules: &[FileRule],
    ) -> Result<Self, AppError> {
        let mut form = Form::default();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            AppError::bad_request(format!("Malformed multipart request: {}", e))
        })? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match rules.iter().find(|r| r.field == name) {
                Some(rule) => {
                    let original_name = field
                        .file_name()
                        .filter(|n| !n.is_empty())
                        .unwrap_or("upload")
                        .to_string();
                    let content_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();

                    if !rule.kind.accepts(&content_type) {
                        return Err(AppError::bad_request(format!(
                            "Invalid file type '{}' for field '{}'",
                            content_type, name
                        )));
                    }

                    let bytes = field.bytes().await.map_err(|e| {
                        AppError::bad_request(format!("Failed to read file '{}': {}", name, e))
                    })?;

                    if bytes.len() > rule.max_bytes {
                        return Err(AppError::bad_request(format!(
                            "File '{}' exceeds the {} MiB limit",
                            original_name,
                            rule.max_bytes / (1024 * 1024)
                        )));
                    }

                    let entry = form.files.entry(name.clone()).or_default();
                    if entry.len() >= rule.max_count {
                        return Err(AppError::bad_request(format!(
                            "Too many files for field '{}' (max {})",
                            name, rule.max_count
                        )));
                    }
                    entry.push(UploadedFile {
                        original_name,
                        content_type,
                        bytes,
                    });
                }
                None if field.file_name().is_some() => {
                    return Err(AppError::bad_request(format!(
                        "Unexpected file field '{}'",
                        name
                    )));
                }
                None => {
                    let value = field.text().await.map_err(|e| {
                        AppError::bad_request(format!("Failed to read field '{}': {}", name, e))
                    })?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn text_or_default(&self, name: &str) -> String {
        self.text(name).unwrap_or_default().to_string()
    }

    /// Keep-existing flags arrive as form string literals; only the exact
    /// literal "true" counts, everything else (including absence) is false.
    pub fn flag(&self, name: &str) -> bool {
        self.text(name) == Some("true")
    }

    pub fn files(&self, name: &str) -> &[UploadedFile] {
        self.files.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn first_file(&self, name: &str) -> Option<&UploadedFile> {
        self.files(name).first()
    }

    #[cfg(test)]
    pub fn from_parts(
        fields: HashMap<String, String>,
        files: HashMap<String, Vec<UploadedFile>>,
    ) -> Self {
        Self { fields, files }
    }
}

#[cfg(test)]
#[path = "forms_tests.rs"]
mod tests;
