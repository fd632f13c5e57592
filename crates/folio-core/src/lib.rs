//! Core library for the folio portfolio admin client.
//!
//! This crate provides everything a front end needs to talk to the
//! portfolio backend:
//!
//! - `auth`: persisted token store, session controller and route guard
//! - `api`: the bearer-token HTTP client and one module per backend resource
//! - `models`: typed records and input payloads for every resource
//! - `dashboard`: the admin dashboard summary
//! - `config`: on-disk configuration and base URL resolution

pub mod api;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use auth::{
    AdminView, GuardDecision, Navigation, RouteGuard, SessionController, TokenStore, View,
};
pub use config::Config;
