use serde::{Deserialize, Serialize};

/// Reference to one uploaded binary object: the storage key it lives
/// under, the display URL, and the semantic role it fills on its owning
/// entity. Attachments are exclusively owned by exactly one entity field
/// and are never shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub role: String,
    pub key: String,
    pub original_name: String,
    pub url: String,
}
