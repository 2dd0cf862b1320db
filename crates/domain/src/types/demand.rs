//! Demands and the reel feed built from them

use serde::{Deserialize, Serialize};

use super::enums::{DemandStatus, ProductType};
use super::product::ProductResponse;
use super::resource::{Page, ResourceMeta};
use super::store::StoreResponse;
use super::user::UserResponse;
use crate::constants::DEFAULT_RADIUS_METERS;

/// Body of `POST /demand` and `PUT /demand`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandRequest {
    pub store_uuid: String,
    pub product_uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_uuid: Option<String>,
    pub needed_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_count: Option<u32>,
    pub description: String,
    /// ISO-8601 timestamp
    pub deadline: String,
    pub status: DemandStatus,
}

/// A demand with its store, product and responsible user expanded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandResponse {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    pub store: StoreResponse,
    pub product: ProductResponse,
    #[serde(default)]
    pub responsible: Option<UserResponse>,
    pub needed_count: u32,
    #[serde(default)]
    pub minimum_count: Option<u32>,
    #[serde(default)]
    pub description: String,
    pub deadline: String,
    pub status: DemandStatus,
}

/// Entries of the reel feed share the demand shape
pub type PostResponse = DemandResponse;

impl DemandResponse {
    /// Request body that reproduces this demand, for editing
    pub fn to_request(&self) -> DemandRequest {
        DemandRequest {
            store_uuid: self.store.meta.uuid.clone(),
            product_uuid: self.product.meta.uuid.clone(),
            responsible_uuid: self.responsible.as_ref().map(|user| user.meta.uuid.clone()),
            needed_count: self.needed_count,
            minimum_count: self.minimum_count,
            description: self.description.clone(),
            deadline: self.deadline.clone(),
            status: self.status,
        }
    }
}

/// Listing filter for `/demand/list-by-store` and `/reel/posts`
///
/// `status` is only sent to the reel endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandFilter {
    pub store_uuid: String,
    #[serde(flatten)]
    pub page: Page,
    pub radius_meters: u32,
    pub product_type: ProductType,
    pub status: DemandStatus,
}

impl DemandFilter {
    pub fn for_store(store_uuid: impl Into<String>) -> Self {
        Self {
            store_uuid: store_uuid.into(),
            page: Page::default(),
            radius_meters: DEFAULT_RADIUS_METERS,
            product_type: ProductType::Any,
            status: DemandStatus::Any,
        }
    }

    #[must_use]
    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius_meters: u32) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    #[must_use]
    pub fn with_product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = product_type;
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: DemandStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_match_listing_defaults() {
        let filter = DemandFilter::for_store("s-1");
        assert_eq!(filter.page, Page::new(1, 100));
        assert_eq!(filter.radius_meters, 10_000);
        assert_eq!(filter.product_type, ProductType::Any);
        assert_eq!(filter.status, DemandStatus::Any);
    }

    #[test]
    fn request_skips_optional_counts() {
        let request = DemandRequest {
            store_uuid: "s-1".into(),
            product_uuid: "p-1".into(),
            responsible_uuid: None,
            needed_count: 40,
            minimum_count: None,
            description: "Tomates".into(),
            deadline: "2026-11-01T12:00:00".into(),
            status: DemandStatus::Opened,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("minimum_count").is_none());
        assert_eq!(json["status"], "OPENED");
    }
}
