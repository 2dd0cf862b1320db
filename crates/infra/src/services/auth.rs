//! Login and logout

use std::sync::Arc;

use tracing::{info, instrument};
use tudofresco_core::TokenStore;
use tudofresco_domain::{LoginCredentials, LoginResponse};

use crate::api::{ApiClient, ApiError, RequestBody, RequestOptions};

pub struct AuthService {
    api: Arc<ApiClient>,
    session: Arc<TokenStore>,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>, session: Arc<TokenStore>) -> Self {
        Self { api, session }
    }

    /// Exchange credentials for a bearer token and store it in the session.
    ///
    /// The login endpoint is called without an Authorization header and with
    /// a url-encoded body.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .api
            .post(
                "/auth/login",
                RequestBody::Form(credentials.form_fields()),
                RequestOptions::skip_auth(),
            )
            .await?;

        self.session.set_token(Some(&response.access_token));
        info!(role = %self.session.role(), "signed in");
        Ok(response)
    }

    pub fn logout(&self) {
        self.session.clear();
        info!("signed out");
    }

    pub fn session(&self) -> &TokenStore {
        &self.session
    }
}
