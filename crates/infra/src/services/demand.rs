//! Demands published by retailer stores

use std::sync::Arc;

use serde::de::IgnoredAny;
use tracing::{info, instrument};
use tudofresco_domain::{DemandFilter, DemandRequest, DemandResponse};

use crate::api::{ApiClient, ApiError, RequestBody, RequestOptions};

pub struct DemandService {
    api: Arc<ApiClient>,
}

impl DemandService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    #[instrument(skip(self, demand), fields(store_uuid = %demand.store_uuid))]
    pub async fn create(&self, demand: &DemandRequest) -> Result<(), ApiError> {
        let _: IgnoredAny =
            self.api.post("/demand", RequestBody::json(demand)?, RequestOptions::new()).await?;
        info!("demand created");
        Ok(())
    }

    #[instrument(skip(self, demand))]
    pub async fn update(&self, demand_uuid: &str, demand: &DemandRequest) -> Result<(), ApiError> {
        let options = RequestOptions::new().query("demand_uuid", demand_uuid);
        let _: IgnoredAny = self.api.put("/demand", RequestBody::json(demand)?, options).await?;
        info!("demand updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_by_uuid(
        &self,
        demand_uuid: &str,
        store_uuid: &str,
    ) -> Result<DemandResponse, ApiError> {
        let options = RequestOptions::new()
            .query("demand_uuid", demand_uuid)
            .query("store_uuid", store_uuid);
        self.api.get("/demand/by-uuid", options).await
    }

    /// Demands around a store. The filter's status is not sent; the backend
    /// lists every status here.
    #[instrument(skip(self, filter), fields(store_uuid = %filter.store_uuid))]
    pub async fn list_by_store(
        &self,
        filter: &DemandFilter,
    ) -> Result<Vec<DemandResponse>, ApiError> {
        let options = RequestOptions::new()
            .query("store_uuid", &filter.store_uuid)
            .query("page", filter.page.page)
            .query("per_page", filter.page.per_page)
            .query("radius_meters", filter.radius_meters)
            .query("product_type", filter.product_type);
        self.api.get("/demand/list-by-store", options).await
    }
}
