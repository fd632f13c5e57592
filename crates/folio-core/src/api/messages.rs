use serde_json::Value;

use super::{envelope, ApiClient, ApiError};
use crate::models::{Message, NewMessage, RecordId};

impl ApiClient {
    /// Public contact form; works without a token
    pub async fn send_message(&self, message: &NewMessage) -> Result<Value, ApiError> {
        message.validate()?;
        self.post_json("send message", "/messages", message).await
    }

    pub async fn list_messages(&self) -> Result<Vec<Message>, ApiError> {
        let value = self.get_value("fetch messages", "/messages").await?;
        envelope::extract_list(value, "messages")
    }

    pub async fn delete_message(&self, id: &RecordId) -> Result<Value, ApiError> {
        self.delete("delete message", &Self::record_path("/messages", id)?).await
    }
}
