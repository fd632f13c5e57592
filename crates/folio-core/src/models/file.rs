use serde::{Deserialize, Serialize};

use super::RecordId;

/// Entry in the backend's uploaded-file library
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredFile {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default, alias = "filename")]
    pub name: Option<String>,
    #[serde(default, alias = "file_url")]
    pub url: Option<String>,
    #[serde(default, alias = "mimetype")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}
