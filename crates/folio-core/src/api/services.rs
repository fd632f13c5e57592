use serde_json::Value;

use super::{envelope, ApiClient, ApiError};
use crate::models::{RecordId, Service, ServiceInput};

impl ApiClient {
    /// Active services only, for the public site
    pub async fn list_public_services(&self) -> Result<Vec<Service>, ApiError> {
        let value = self
            .get_value("fetch public services", "/services/public")
            .await?;
        envelope::extract_list(value, "services")
    }

    /// Active and inactive services, for the admin panel
    pub async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        let value = self.get_value("fetch services", "/services").await?;
        envelope::extract_list(value, "services")
    }

    pub async fn create_service(&self, input: &ServiceInput) -> Result<Value, ApiError> {
        if input.title.trim().is_empty() {
            return Err(ApiError::invalid_input("Service title is required"));
        }
        self.post_json("create service", "/services", input).await
    }

    pub async fn update_service(&self, id: &RecordId, input: &ServiceInput) -> Result<Value, ApiError> {
        self.put_json("update service", &Self::record_path("/services", id)?, input)
            .await
    }

    pub async fn delete_service(&self, id: &RecordId) -> Result<Value, ApiError> {
        self.delete("delete service", &Self::record_path("/services", id)?).await
    }
}
