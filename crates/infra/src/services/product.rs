use std::sync::Arc;

use serde::de::IgnoredAny;
use tracing::{info, instrument};
use tudofresco_domain::{ProductRequest, ProductResponse, ProductSearch};

use crate::api::{ApiClient, ApiError, RequestBody, RequestOptions, UploadFile};

pub struct ProductService {
    api: Arc<ApiClient>,
}

impl ProductService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create(&self, product: &ProductRequest) -> Result<ProductResponse, ApiError> {
        self.api.post("/product", RequestBody::json(product)?, RequestOptions::new()).await
    }

    /// Catalogue search. `*` matches every product.
    #[instrument(skip(self))]
    pub async fn search(&self, search: &ProductSearch) -> Result<Vec<ProductResponse>, ApiError> {
        let options = RequestOptions::new()
            .query("name", &search.name)
            .query("page", search.page)
            .query("per_page", search.per_page);
        self.api.get("/product/search", options).await
    }

    #[instrument(skip(self, file), fields(file = %file.file_name))]
    pub async fn upload_image(&self, product_uuid: &str, file: UploadFile) -> Result<(), ApiError> {
        let options = RequestOptions::new().query("product_uuid", product_uuid);
        let _: IgnoredAny =
            self.api.post("/product/product-picture", RequestBody::file(file)?, options).await?;
        info!("product image uploaded");
        Ok(())
    }
}
