//! Bearer credential lookup for the gateway

use async_trait::async_trait;
use tudofresco_core::TokenStore;

use super::errors::ApiError;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Current bearer credential, or `None` when there is no usable session.
    ///
    /// `None` makes the gateway send the request without an Authorization
    /// header.
    async fn access_token(&self) -> Result<Option<String>, ApiError>;
}

#[async_trait]
impl AccessTokenProvider for TokenStore {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        Ok(self.token())
    }
}

/// Provider that never has a credential. Useful for public-only clients.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

#[async_trait]
impl AccessTokenProvider for Anonymous {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        Ok(None)
    }
}
