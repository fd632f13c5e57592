use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{envelope, ApiClient, ApiError};

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Body of a successful login. `token` is optional because a malformed
/// response must surface as an authentication failure, not a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl ApiClient {
    /// Exchange credentials for a token. Does not touch the token store.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let value = self
            .post_json("log in", "/auth/login", &Credentials { email, password })
            .await?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse login response: {}", e)))
    }

    /// Account behind the current token
    pub async fn me(&self) -> Result<AuthUser, ApiError> {
        let value = self.get_value("fetch current user", "/auth/me").await?;
        envelope::extract_one(value, "user")
    }
}
