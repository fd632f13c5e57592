use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::api::upload::{FileUpload, FormBuilder};
use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }

    /// Infer from an upload's MIME type, defaulting to image
    pub fn from_mime(mime: Option<&str>) -> Self {
        match mime {
            Some(m) if m.starts_with("video/") => MediaType::Video,
            _ => MediaType::Image,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowcaseItem {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

impl ShowcaseItem {
    pub fn media_type(&self) -> MediaType {
        match self.media_type.as_deref() {
            Some(t) if t.eq_ignore_ascii_case("video") => MediaType::Video,
            _ => MediaType::Image,
        }
    }
}

/// Create/update payload for a showcase entry; `media` is the uploaded file
#[derive(Debug, Clone, Default)]
pub struct ShowcaseForm {
    pub title: String,
    pub category: String,
    pub media_type: Option<MediaType>,
    pub media: Option<FileUpload>,
}

impl ShowcaseForm {
    pub fn into_form(self) -> Result<Form, ApiError> {
        let media_type = self
            .media_type
            .unwrap_or_else(|| MediaType::from_mime(self.media.as_ref().and_then(|m| m.mime.as_deref())));
        Ok(FormBuilder::new()
            .text("title", self.title)
            .text("category", self.category)
            .text("media_type", media_type.as_str())
            .file("media", self.media)?
            .build())
    }
}
