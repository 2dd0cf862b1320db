//! Store addresses

use serde::{Deserialize, Serialize};

use super::resource::ResourceMeta;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressRequest {
    pub zip_code: String,
    pub street_address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub province: String,
    pub city: String,
    pub neighbourhood: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

/// Address as returned by the backend. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressResponse {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    pub zip_code: Option<String>,
    pub street_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub neighbourhood: Option<String>,
    pub number: Option<String>,
    pub additional_info: Option<String>,
}

impl AddressResponse {
    /// Single-line rendering, skipping missing parts
    pub fn summary(&self) -> String {
        let street = match (&self.street_address, &self.number) {
            (Some(street), Some(number)) => Some(format!("{street}, {number}")),
            (Some(street), None) => Some(street.clone()),
            _ => None,
        };
        let city = match (&self.city, &self.province) {
            (Some(city), Some(province)) => Some(format!("{city}/{province}")),
            (Some(city), None) => Some(city.clone()),
            (None, province) => province.clone(),
        };
        [street, self.neighbourhood.clone(), city]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" - ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_skips_missing_parts() {
        let address = AddressResponse {
            street_address: Some("Rua das Flores".into()),
            number: Some("12".into()),
            city: Some("Curitiba".into()),
            province: Some("PR".into()),
            ..AddressResponse::default()
        };
        assert_eq!(address.summary(), "Rua das Flores, 12 - Curitiba/PR");
    }

    #[test]
    fn request_omits_empty_additional_info() {
        let request = AddressRequest { zip_code: "80000-000".into(), ..AddressRequest::default() };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("additional_info").is_none());
        assert_eq!(json["zip_code"], "80000-000");
    }
}
