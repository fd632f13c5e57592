use std::sync::Arc;

use tracing::{error, info, warn};

use super::guard::{RouteGuard, View};
use super::{TokenStore, TokenStoreError};
use crate::api::{ApiClient, ApiError};

/// Generic message when the server gives no reason
const LOGIN_FAILED: &str = "Login failed";

/// Navigation requested by a session action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Redirect(View),
}

/// Owns every user-facing change to the stored token: login, logout, and
/// logout after the server rejects the token.
pub struct SessionController {
    api: ApiClient,
    tokens: Arc<dyn TokenStore>,
}

impl SessionController {
    /// Controller over the same token store the client reads from
    pub fn new(api: ApiClient) -> Self {
        let tokens = api.tokens();
        Self { api, tokens }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.has_token()
    }

    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(Arc::clone(&self.tokens))
    }

    /// Log in and store the returned token.
    ///
    /// Every failure is an `ApiError::Authentication` carrying the server's
    /// message when it sent one. The store is left untouched on failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::Authentication {
                message: "Email and password required".to_string(),
            });
        }

        let response = match self.api.login(email, password).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Login failed");
                return Err(Self::authentication_error(e));
            }
        };

        let token = match response.token.filter(|t| !t.trim().is_empty()) {
            Some(token) => token,
            None => {
                warn!("Login response did not include a token");
                return Err(ApiError::Authentication {
                    message: response.message.unwrap_or_else(|| LOGIN_FAILED.to_string()),
                });
            }
        };

        self.tokens.set_token(&token)?;
        info!("Login successful");
        Ok(token)
    }

    /// Clear the token and send the user to the login view. Safe to call
    /// repeatedly.
    pub fn logout(&self) -> Result<Navigation, TokenStoreError> {
        self.tokens.clear_token()?;
        info!("Logged out");
        Ok(Navigation::Redirect(View::Login))
    }

    /// Uniform reaction to a failed protected call: if the server rejected
    /// the token, log out and return the login redirect.
    pub fn handle_api_error(&self, err: &ApiError) -> Option<Navigation> {
        if !err.is_authorization() {
            return None;
        }
        warn!(error = %err, "Server rejected session token, logging out");
        match self.logout() {
            Ok(nav) => Some(nav),
            Err(e) => {
                error!(error = %e, "Failed to clear rejected token");
                Some(Navigation::Redirect(View::Login))
            }
        }
    }

    fn authentication_error(err: ApiError) -> ApiError {
        let message = match &err {
            ApiError::Authentication { message } => message.clone(),
            ApiError::Network(_) => format!("{}: unable to reach server", LOGIN_FAILED),
            ApiError::InvalidResponse(_) => LOGIN_FAILED.to_string(),
            other => other
                .payload()
                .and_then(ApiError::server_message)
                .unwrap_or_else(|| LOGIN_FAILED.to_string()),
        };
        ApiError::Authentication { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryTokenStore;

    fn controller(store: Arc<MemoryTokenStore>) -> SessionController {
        // Unroutable port; tests here never send a request
        let api = ApiClient::new("http://127.0.0.1:9", store).unwrap();
        SessionController::new(api)
    }

    #[tokio::test]
    async fn test_login_requires_credentials() {
        let store = Arc::new(MemoryTokenStore::new());
        let session = controller(store.clone());

        let err = session.login("  ", "secret").await.unwrap_err();
        assert_eq!(err.to_string(), "Email and password required");
        let err = session.login("a@b.c", "").await.unwrap_err();
        assert!(matches!(err, ApiError::Authentication { .. }));
        assert_eq!(store.get_token(), None);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let store = Arc::new(MemoryTokenStore::with_token("abc"));
        let session = controller(store.clone());

        assert_eq!(session.logout().unwrap(), Navigation::Redirect(View::Login));
        assert_eq!(session.logout().unwrap(), Navigation::Redirect(View::Login));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_handle_api_error_only_for_authorization() {
        let store = Arc::new(MemoryTokenStore::with_token("abc"));
        let session = controller(store.clone());

        let not_found = ApiError::NotFound {
            message: "gone".into(),
            payload: None,
        };
        assert_eq!(session.handle_api_error(&not_found), None);
        assert!(session.is_authenticated());

        let rejected = ApiError::Authorization {
            status: 401,
            message: "jwt expired".into(),
            payload: None,
        };
        assert_eq!(
            session.handle_api_error(&rejected),
            Some(Navigation::Redirect(View::Login))
        );
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_authentication_error_messages() {
        let invalid = ApiError::InvalidResponse("bad json".into());
        assert_eq!(
            SessionController::authentication_error(invalid).to_string(),
            "Login failed"
        );

        let server = ApiError::Server {
            status: 500,
            message: "Failed to log in".into(),
            payload: None,
        };
        assert_eq!(
            SessionController::authentication_error(server).to_string(),
            "Login failed"
        );

        let rejected = ApiError::Authorization {
            status: 401,
            message: "Invalid credentials".into(),
            payload: Some(serde_json::json!({"message": "Invalid credentials"})),
        };
        assert_eq!(
            SessionController::authentication_error(rejected).to_string(),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_guard_shares_store() {
        let store = Arc::new(MemoryTokenStore::new());
        let session = controller(store.clone());
        let guard = session.guard();
        let view = View::Admin(crate::auth::AdminView::Messages);

        assert!(guard.check(view.clone()).is_redirect());
        store.set_token("t").unwrap();
        assert!(!guard.check(view).is_redirect());
    }
}
