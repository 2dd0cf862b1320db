//! Marketplace API gateway
//!
//! This module provides the HTTP-based client every backend call goes
//! through.
//!
//! # Architecture
//!
//! - Uses [`crate::http::HttpClient`] (no direct reqwest in services)
//! - Bearer credential from an [`AccessTokenProvider`], skippable per call
//! - One deadline per request, no retries
//! - Responses unwrapped from the `{ payload, message }` envelope

pub mod auth;
pub mod client;
pub mod errors;
pub mod request;

pub use auth::{AccessTokenProvider, Anonymous};
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use errors::{ApiError, ApiErrorCategory};
pub use request::{RequestBody, RequestOptions, UploadFile};
