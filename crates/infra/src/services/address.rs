use std::sync::Arc;

use tracing::instrument;
use tudofresco_domain::{AddressRequest, AddressResponse};

use crate::api::{ApiClient, ApiError, RequestBody, RequestOptions};

pub struct AddressService {
    api: Arc<ApiClient>,
}

impl AddressService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Register an address. The returned uuid is what stores reference.
    #[instrument(skip(self, address), fields(zip_code = %address.zip_code))]
    pub async fn create(&self, address: &AddressRequest) -> Result<AddressResponse, ApiError> {
        self.api.post("/address", RequestBody::json(address)?, RequestOptions::new()).await
    }
}
