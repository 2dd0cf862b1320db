//! Accounts and profiles

use std::sync::Arc;

use serde::de::IgnoredAny;
use tracing::{debug, info, instrument};
use tudofresco_core::TokenStore;
use tudofresco_domain::{UserProfileUpdateRequest, UserResponse, UserSignUpRequest};

use crate::api::{ApiClient, ApiError, RequestBody, RequestOptions, UploadFile};

pub struct UserService {
    api: Arc<ApiClient>,
    session: Arc<TokenStore>,
}

impl UserService {
    pub fn new(api: Arc<ApiClient>, session: Arc<TokenStore>) -> Self {
        Self { api, session }
    }

    /// Create an account. Called without an Authorization header.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn sign_up(&self, user: &UserSignUpRequest) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .api
            .post("/user/sign-up", RequestBody::json(user)?, RequestOptions::skip_auth())
            .await?;
        info!("account created");
        Ok(())
    }

    /// Profile of the signed-in user, looked up by the token subject.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthenticated`] when there is no valid session.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<UserResponse, ApiError> {
        let user_id = self.session_user_id()?;
        let path = format!("/user/by-uuid/{}", urlencoding::encode(&user_id));
        self.api.get(&path, RequestOptions::new()).await
    }

    /// Short-lived URL for the signed-in user's profile picture
    #[instrument(skip(self))]
    pub async fn signed_profile_picture_url(&self) -> Result<String, ApiError> {
        self.api.get("/user/signed-profile-picture", RequestOptions::new()).await
    }

    #[instrument(skip(self, file), fields(file = %file.file_name))]
    pub async fn upload_profile_picture(&self, file: UploadFile) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .api
            .post("/user/profile-picture", RequestBody::file(file)?, RequestOptions::new())
            .await?;
        info!("profile picture uploaded");
        Ok(())
    }

    /// # Errors
    ///
    /// [`ApiError::Request`] when a new password is given without the
    /// current one.
    #[instrument(skip(self, profile), fields(uuid = %profile.uuid))]
    pub async fn update_profile(
        &self,
        profile: &UserProfileUpdateRequest,
    ) -> Result<(), ApiError> {
        if !profile.is_consistent() {
            return Err(ApiError::Request(
                "the current password is required to set a new one".into(),
            ));
        }
        let _: IgnoredAny = self
            .api
            .put("/user/profile", RequestBody::json(profile)?, RequestOptions::new())
            .await?;
        info!("profile updated");
        Ok(())
    }

    fn session_user_id(&self) -> Result<String, ApiError> {
        if !self.session.is_valid() {
            debug!("no valid session for user lookup");
            return Err(ApiError::Unauthenticated);
        }
        self.session.user_id().ok_or(ApiError::Unauthenticated)
    }
}
