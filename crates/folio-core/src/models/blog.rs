use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::api::upload::{FileUpload, FormBuilder};
use crate::api::ApiError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Blog {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

impl Blog {
    pub fn tag_list(&self) -> Vec<String> {
        self.tags.as_deref().map(super::split_list).unwrap_or_default()
    }
}

/// Create/update payload for a blog post, sent as multipart with an
/// optional cover image
#[derive(Debug, Clone, Default)]
pub struct BlogForm {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub tags: Option<String>,
    pub image: Option<FileUpload>,
}

impl BlogForm {
    pub fn into_form(self) -> Result<Form, ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::invalid_input("Blog title is required"));
        }
        Ok(FormBuilder::new()
            .text("title", self.title)
            .text("content", self.content)
            .opt_text("author", self.author)
            .opt_text("tags", self.tags)
            .file("image", self.image)?
            .build())
    }
}
