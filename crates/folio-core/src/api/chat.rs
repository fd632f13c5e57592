use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    reply: Option<String>,
}

impl ApiClient {
    /// Visitor-facing assistant
    pub async fn public_chat(&self, message: &str) -> Result<String, ApiError> {
        self.chat("send chat message", "/openai/public/chat", message)
            .await
    }

    /// Admin assistant; requires a token
    pub async fn admin_chat(&self, message: &str) -> Result<String, ApiError> {
        self.chat("send admin chat message", "/openai/admin/chat", message)
            .await
    }

    async fn chat(&self, operation: &str, path: &str, message: &str) -> Result<String, ApiError> {
        if message.trim().is_empty() {
            return Err(ApiError::invalid_input("Message is required"));
        }
        let value = self
            .post_json(operation, path, &ChatRequest { message })
            .await?;
        let response: ChatResponse = serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse chat reply: {}", e)))?;
        response
            .reply
            .ok_or_else(|| ApiError::InvalidResponse("Chat response had no reply".to_string()))
    }
}
