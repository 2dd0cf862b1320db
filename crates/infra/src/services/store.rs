//! Stores owned by the signed-in user

use std::sync::Arc;

use serde::de::IgnoredAny;
use tracing::{info, instrument};
use tudofresco_domain::utils::normalize_cnpj;
use tudofresco_domain::{Page, StoreRequest, StoreResponse};

use crate::api::{ApiClient, ApiError, RequestBody, RequestOptions};

pub struct StoreService {
    api: Arc<ApiClient>,
}

impl StoreService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    #[instrument(skip(self, store), fields(trade_name = %store.trade_name))]
    pub async fn create(&self, store: &StoreRequest) -> Result<(), ApiError> {
        let _: IgnoredAny =
            self.api.post("/store", RequestBody::json(store)?, RequestOptions::new()).await?;
        info!("store created");
        Ok(())
    }

    /// Registry data for a CNPJ, used to prefill the store form.
    ///
    /// Punctuation is stripped before the lookup.
    #[instrument(skip(self))]
    pub async fn fresh_fill(&self, cnpj: &str) -> Result<StoreResponse, ApiError> {
        let options = RequestOptions::new().query("cnpj", normalize_cnpj(cnpj));
        self.api.get("/store/fresh-fill", options).await
    }

    #[instrument(skip(self))]
    pub async fn list_by_user(&self, page: Page) -> Result<Vec<StoreResponse>, ApiError> {
        let options =
            RequestOptions::new().query("page", page.page).query("per_page", page.per_page);
        self.api.get("/store/list-by-user", options).await
    }
}
