//! HTTP transport
//!
//! Thin wrapper over `reqwest` shared by the API gateway. It owns client
//! construction and request logging. Status interpretation and envelope
//! handling live in [`crate::api`].

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
