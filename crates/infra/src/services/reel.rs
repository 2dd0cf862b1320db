use std::sync::Arc;

use tracing::instrument;
use tudofresco_domain::{DemandFilter, PostResponse};

use crate::api::{ApiClient, ApiError, RequestOptions};

/// Feed of demands shown to supplier stores
pub struct ReelService {
    api: Arc<ApiClient>,
}

impl ReelService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    #[instrument(skip(self, filter), fields(store_uuid = %filter.store_uuid))]
    pub async fn posts(&self, filter: &DemandFilter) -> Result<Vec<PostResponse>, ApiError> {
        let options = RequestOptions::new()
            .query("store_uuid", &filter.store_uuid)
            .query("page", filter.page.page)
            .query("per_page", filter.page.per_page)
            .query("radius_meters", filter.radius_meters)
            .query("product_type", filter.product_type)
            .query("status", filter.status);
        self.api.get("/reel/posts", options).await
    }
}
