//! Stores (suppliers and retailers)

use serde::{Deserialize, Serialize};

use super::address::AddressResponse;
use super::enums::StoreType;
use super::resource::ResourceMeta;
use super::user::UserResponse;

/// Body of `POST /store`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreRequest {
    pub cnpj: String,
    pub trade_name: String,
    pub legal_name: String,
    pub legal_phone_contact: String,
    pub preferred_phone_contact: String,
    pub legal_email_contact: String,
    pub preferred_email_contact: String,
    pub address_uuid: String,
    pub store_type: StoreType,
    pub opening_date: String,
    pub size: String,
    pub legal_nature: String,
    pub cnae_code: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_classification: Option<String>,
}

/// Store as returned by the backend
///
/// `fresh-fill` lookups return a partially filled store, so everything but
/// `store_type` may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreResponse {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    pub images: Vec<String>,
    pub cnpj: Option<String>,
    pub address: Option<AddressResponse>,
    pub reputation: Option<f64>,
    pub trade_name: Option<String>,
    pub legal_name: Option<String>,
    pub owner: Option<UserResponse>,
    pub legal_phone_contact: Option<String>,
    pub preferred_phone_contact: Option<String>,
    pub legal_email_contact: Option<String>,
    pub preferred_email_contact: Option<String>,
    pub store_type: StoreType,
    pub opening_date: Option<String>,
    pub size: Option<String>,
    pub legal_nature: Option<String>,
    pub cnae_code: Option<String>,
    pub branch_classification: Option<String>,
}

impl StoreResponse {
    /// Trade name, then legal name, then the unknown label
    pub fn display_name(&self) -> &str {
        self.trade_name
            .as_deref()
            .or(self.legal_name.as_deref())
            .unwrap_or(crate::constants::UNKNOWN_LABEL)
    }

    /// Copy the looked-up registry data into a creation request
    pub fn into_request(self, address_uuid: impl Into<String>) -> StoreRequest {
        StoreRequest {
            cnpj: self.cnpj.unwrap_or_default(),
            trade_name: self.trade_name.unwrap_or_default(),
            legal_name: self.legal_name.unwrap_or_default(),
            legal_phone_contact: self.legal_phone_contact.unwrap_or_default(),
            preferred_phone_contact: self.preferred_phone_contact.unwrap_or_default(),
            legal_email_contact: self.legal_email_contact.unwrap_or_default(),
            preferred_email_contact: self.preferred_email_contact.unwrap_or_default(),
            address_uuid: address_uuid.into(),
            store_type: self.store_type,
            opening_date: self.opening_date.unwrap_or_default(),
            size: self.size.unwrap_or_default(),
            legal_nature: self.legal_nature.unwrap_or_default(),
            cnae_code: self.cnae_code.unwrap_or_default(),
            images: self.images,
            branch_classification: self.branch_classification,
        }
    }
}
