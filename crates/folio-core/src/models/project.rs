use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use super::{string_or_list, RecordId};
use crate::api::upload::{FileUpload, FormBuilder};
use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Published,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Published => "published",
        }
    }

    /// Unknown values fall back to draft
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("published") {
            ProjectStatus::Published
        } else {
            ProjectStatus::Draft
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, alias = "_id", alias = "project_id")]
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "tech", alias = "technologies", deserialize_with = "string_or_list")]
    pub tech_stack: Vec<String>,
    #[serde(default, alias = "github", alias = "repo")]
    pub github_link: Option<String>,
    #[serde(default, alias = "liveUrl", alias = "url")]
    pub live_link: Option<String>,
    #[serde(default, alias = "thumbnail")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

impl Project {
    pub fn title_display(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled Project")
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
            .as_deref()
            .map(ProjectStatus::parse)
            .unwrap_or(ProjectStatus::Published)
    }
}

/// Create/update payload for a project, sent as multipart
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    pub title: String,
    pub description: Option<String>,
    pub tech_stack: Vec<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub status: Option<ProjectStatus>,
    pub image: Option<FileUpload>,
}

impl ProjectForm {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::invalid_input("Project title is required"));
        }
        Ok(())
    }

    pub fn into_form(self) -> Result<Form, ApiError> {
        self.validate()?;
        Ok(FormBuilder::new()
            .text("title", self.title)
            .text("description", self.description.unwrap_or_default())
            .text("tech_stack", self.tech_stack.join(","))
            .text("github_link", self.github_link.unwrap_or_default())
            .text("live_link", self.live_link.unwrap_or_default())
            .opt_text("status", self.status.map(|s| s.as_str()))
            .file("image", self.image)?
            .build())
    }
}
