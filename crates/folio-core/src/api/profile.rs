use serde_json::Value;

use super::{envelope, ApiClient, ApiError};
use crate::models::{Profile, ProfileUpdate};

impl ApiClient {
    /// Profile of the logged-in admin
    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        let value = self.get_value("fetch profile", "/profile/me").await?;
        envelope::extract_one(value, "profile")
    }

    /// Update the admin profile; avatar and resume go up as file parts
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<Value, ApiError> {
        self.put_multipart("update profile", "/profile/me", update.into_form()?)
            .await
    }

    /// Public profiles shown on the about page; the first is the site owner
    pub async fn list_public_profiles(&self) -> Result<Vec<Profile>, ApiError> {
        let value = self
            .get_value("fetch public profiles", "/profile/public")
            .await?;
        envelope::extract_list(value, "profiles")
    }
}
