use serde_json::Value;

use super::{envelope, ApiClient, ApiError};
use crate::models::{RecordId, ShowcaseForm, ShowcaseItem};

impl ApiClient {
    pub async fn list_showcase(&self) -> Result<Vec<ShowcaseItem>, ApiError> {
        let value = self.get_value("fetch showcase", "/showcase").await?;
        envelope::extract_list(value, "showcase")
    }

    pub async fn get_showcase_item(&self, id: &RecordId) -> Result<ShowcaseItem, ApiError> {
        let value = self
            .get_value("fetch showcase item", &Self::record_path("/showcase", id)?)
            .await?;
        envelope::extract_one(value, "showcase")
    }

    pub async fn create_showcase_item(&self, form: ShowcaseForm) -> Result<Value, ApiError> {
        self.post_multipart("create showcase item", "/showcase", form.into_form()?)
            .await
    }

    pub async fn update_showcase_item(&self, id: &RecordId, form: ShowcaseForm) -> Result<Value, ApiError> {
        self.put_multipart(
            "update showcase item",
            &Self::record_path("/showcase", id)?,
            form.into_form()?,
        )
        .await
    }

    pub async fn delete_showcase_item(&self, id: &RecordId) -> Result<Value, ApiError> {
        self.delete("delete showcase item", &Self::record_path("/showcase", id)?)
            .await
    }
}
