//! Products

use serde::{Deserialize, Serialize};

use super::enums::{ProductType, UnitType};
use super::resource::ResourceMeta;
use crate::constants::{DEFAULT_PAGE, DEFAULT_PRODUCT_PAGE_SIZE, PRODUCT_SEARCH_WILDCARD};

/// Body of `POST /product`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub unit_type: UnitType,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductResponse {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    pub name: String,
    pub unit_type: UnitType,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub search_name: String,
}

/// Query for `GET /product/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSearch {
    pub name: String,
    pub page: u32,
    pub per_page: u32,
}

impl ProductSearch {
    pub fn by_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() { PRODUCT_SEARCH_WILDCARD.to_string() } else { name };
        Self { name, ..Self::default() }
    }
}

impl Default for ProductSearch {
    fn default() -> Self {
        Self {
            name: PRODUCT_SEARCH_WILDCARD.to_string(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PRODUCT_PAGE_SIZE,
        }
    }
}
