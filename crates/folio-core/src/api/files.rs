use serde_json::Value;

use super::upload::{FileUpload, FormBuilder};
use super::{envelope, ApiClient, ApiError};
use crate::models::{RecordId, StoredFile};

impl ApiClient {
    pub async fn list_files(&self) -> Result<Vec<StoredFile>, ApiError> {
        let value = self.get_value("fetch files", "/files").await?;
        envelope::extract_list(value, "files")
    }

    pub async fn upload_file(&self, file: FileUpload) -> Result<Value, ApiError> {
        let form = FormBuilder::new().file("file", Some(file))?.build();
        self.post_multipart("upload file", "/files", form).await
    }

    pub async fn delete_file(&self, id: &RecordId) -> Result<Value, ApiError> {
        self.delete("delete file", &Self::record_path("/files", id)?).await
    }
}
