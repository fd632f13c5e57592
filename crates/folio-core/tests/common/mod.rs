//! Shared helpers for HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use folio_core::auth::MemoryTokenStore;
use folio_core::ApiClient;
use wiremock::MockServer;

/// Client pointed at `<mock>/api` with its own in-memory token store
pub fn client_for(server: &MockServer) -> (ApiClient, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::new());
    let api = ApiClient::new(format!("{}/api", server.uri()), store.clone()).unwrap();
    (api, store)
}

/// Authorization header of every request the server has seen, in order
pub async fn authorization_headers(server: &MockServer) -> Vec<Option<String>> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|req| {
            req.headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        })
        .collect()
}
