//! Marketplace users

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::access::AccessLevel;
use super::enums::{GenderType, UserVerificationStatus};
use super::resource::ResourceMeta;

/// User profile as returned by `GET /user/by-uuid/{uuid}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<GenderType>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub user_access: AccessLevel,
    #[serde(default)]
    pub verification_status: UserVerificationStatus,
}

/// Body of `POST /user/sign-up`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSignUpRequest {
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub gender: GenderType,
    pub phone_number: String,
    #[serde(default)]
    pub profile_picture: String,
    pub password: String,
    pub user_access: AccessLevel,
}

impl std::fmt::Debug for UserSignUpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserSignUpRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("date_of_birth", &self.date_of_birth)
            .field("gender", &self.gender)
            .field("user_access", &self.user_access)
            .finish_non_exhaustive()
    }
}

/// Body of `PUT /user/profile`
///
/// `password` changes the password and then requires `current_password`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfileUpdateRequest {
    pub uuid: String,
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub gender: GenderType,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
}

impl UserProfileUpdateRequest {
    /// A password change must be confirmed with the current password
    pub fn is_consistent(&self) -> bool {
        self.password.is_none() || self.current_password.is_some()
    }
}

impl std::fmt::Debug for UserProfileUpdateRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserProfileUpdateRequest")
            .field("uuid", &self.uuid)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("changes_password", &self.password.is_some())
            .finish_non_exhaustive()
    }
}
