//! # Tudo Fresco Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The HTTP transport and the API request gateway
//! - Typed wrappers for every backend resource
//! - Configuration loading (environment, JSON/TOML files)
//! - Session backend selection (file, keychain, memory)
//! - Conversions from third-party errors into domain errors
//!
//! ## Architecture
//! - Implements traits defined in `tudofresco-core`
//! - Depends on `tudofresco-common`, `tudofresco-domain` and `tudofresco-core`
//! - Contains all "impure" code (network, files, keychain)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod services;
pub mod session;

// Re-export commonly used items
pub use api::{
    AccessTokenProvider, ApiClient, ApiClientConfig, ApiError, ApiErrorCategory, RequestBody,
    RequestOptions, UploadFile,
};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use services::{
    AddressService, AuthService, DemandService, ProductService, ReelService, StoreService,
    UserService,
};
pub use session::{open_credential_store, open_token_store};
