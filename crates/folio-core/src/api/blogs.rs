use serde_json::Value;

use super::{envelope, ApiClient, ApiError};
use crate::models::{Blog, BlogForm, RecordId};

impl ApiClient {
    pub async fn list_blogs(&self) -> Result<Vec<Blog>, ApiError> {
        let value = self.get_value("fetch blogs", "/blogs").await?;
        envelope::extract_list(value, "blogs")
    }

    /// Single post; the backend wraps it as `{ success, blog }`
    pub async fn get_blog(&self, id: &RecordId) -> Result<Blog, ApiError> {
        let value = self.get_value("fetch blog", &Self::record_path("/blogs", id)?).await?;
        envelope::extract_one(value, "blog")
    }

    pub async fn create_blog(&self, form: BlogForm) -> Result<Value, ApiError> {
        self.post_multipart("create blog", "/blogs", form.into_form()?).await
    }

    pub async fn update_blog(&self, id: &RecordId, form: BlogForm) -> Result<Value, ApiError> {
        self.put_multipart("update blog", &Self::record_path("/blogs", id)?, form.into_form()?)
            .await
    }

    pub async fn delete_blog(&self, id: &RecordId) -> Result<Value, ApiError> {
        self.delete("delete blog", &Self::record_path("/blogs", id)?).await
    }
}
