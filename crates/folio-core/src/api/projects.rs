use serde_json::Value;

use super::{envelope, ApiClient, ApiError};
use crate::models::{Project, ProjectForm, RecordId};

impl ApiClient {
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let value = self.get_value("fetch projects", "/projects").await?;
        envelope::extract_list(value, "projects")
    }

    pub async fn get_project(&self, id: &RecordId) -> Result<Project, ApiError> {
        let value = self
            .get_value("fetch project", &Self::record_path("/projects", id)?)
            .await?;
        envelope::extract_one(value, "project")
    }

    /// Create a project; the thumbnail goes up as the `image` part
    pub async fn create_project(&self, form: ProjectForm) -> Result<Value, ApiError> {
        self.post_multipart("create project", "/projects", form.into_form()?)
            .await
    }

    pub async fn update_project(&self, id: &RecordId, form: ProjectForm) -> Result<Value, ApiError> {
        self.put_multipart("update project", &Self::record_path("/projects", id)?, form.into_form()?)
            .await
    }

    pub async fn delete_project(&self, id: &RecordId) -> Result<Value, ApiError> {
        self.delete("delete project", &Self::record_path("/projects", id)?).await
    }
}
