//! REST API client module for the portfolio backend.
//!
//! This module provides the `ApiClient` and one submodule per backend
//! resource (projects, blogs, skills, services, social links, showcase,
//! messages, profile, files, chat) plus login.
//!
//! The API uses JWT bearer token authentication obtained from
//! `POST /auth/login`.

pub mod auth;
pub mod blogs;
pub mod chat;
pub mod client;
pub mod envelope;
pub mod error;
pub mod files;
pub mod messages;
pub mod profile;
pub mod projects;
pub mod services;
pub mod showcase;
pub mod skills;
pub mod socials;
pub mod upload;

pub use auth::{AuthUser, LoginResponse};
pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use upload::FileUpload;
