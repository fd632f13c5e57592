//! Authentication module for the admin session.
//!
//! This module provides:
//! - `TokenStore`: persisted bearer token (file, keychain, or in-memory)
//! - `SessionController`: login, logout, and reaction to rejected tokens
//! - `RouteGuard`: client-side gating of admin views
//!
//! Tokens carry no client-side expiry. A stale token is discovered when the
//! server rejects it.

pub mod guard;
pub mod session;
pub mod token_store;

pub use guard::{evaluate, AdminView, GuardDecision, RouteGuard, View};
pub use session::{Navigation, SessionController};
pub use token_store::{
    FileTokenStore, KeyringTokenStore, MemoryTokenStore, TokenRecord, TokenStore, TokenStoreError,
};
