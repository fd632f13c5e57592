use serde_json::Value;

use super::{envelope, ApiClient, ApiError};
use crate::models::{RecordId, SocialLink, SocialLinkInput};

impl ApiClient {
    pub async fn list_public_social_links(&self) -> Result<Vec<SocialLink>, ApiError> {
        let value = self
            .get_value("fetch public social links", "/socials/public")
            .await?;
        envelope::extract_list(value, "socials")
    }

    pub async fn list_social_links(&self) -> Result<Vec<SocialLink>, ApiError> {
        let value = self.get_value("fetch social links", "/socials/all").await?;
        envelope::extract_list(value, "socials")
    }

    pub async fn create_social_link(&self, input: &SocialLinkInput) -> Result<Value, ApiError> {
        if input.platform.trim().is_empty() || input.url.trim().is_empty() {
            return Err(ApiError::invalid_input("Platform and URL are required"));
        }
        self.post_json("create social link", "/socials/create", input)
            .await
    }

    pub async fn update_social_link(&self, id: &RecordId, input: &SocialLinkInput) -> Result<Value, ApiError> {
        self.put_json("update social link", &Self::record_path("/socials/update", id)?, input)
            .await
    }

    pub async fn delete_social_link(&self, id: &RecordId) -> Result<Value, ApiError> {
        self.delete("delete social link", &Self::record_path("/socials/delete", id)?)
            .await
    }
}
