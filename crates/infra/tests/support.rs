//! Shared fixtures for gateway and service tests

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use tudofresco_common::testing::{MockClock, MockCredentialStore, TokenFactory};
use tudofresco_core::TokenStore;
use tudofresco_infra::{ApiClient, ApiClientConfig};
use wiremock::{MockServer, ResponseTemplate};

/// Fixed "now" for every test session. [`TokenFactory`] defaults expire one
/// hour later.
pub const NOW_SECS: i64 = 1_700_000_000;

/// Token store over mock storage and a mock clock, handles kept for asserts
pub struct TestSession {
    pub tokens: Arc<TokenStore>,
    pub storage: MockCredentialStore,
    pub clock: Arc<MockClock>,
}

/// Route gateway logs to the test harness output. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("tudofresco_infra=debug")
        .with_test_writer()
        .try_init();
}

impl TestSession {
    pub fn signed_out() -> Self {
        init_tracing();
        let storage = MockCredentialStore::new();
        let clock = Arc::new(MockClock::at_secs(NOW_SECS));
        let tokens = Arc::new(TokenStore::new(Arc::new(storage.clone()), clock.clone()));
        Self { tokens, storage, clock }
    }

    /// Session holding a valid default token, which is returned
    pub fn signed_in() -> (Self, String) {
        let session = Self::signed_out();
        let token = TokenFactory::new().build();
        session.tokens.set_token(Some(&token));
        (session, token)
    }
}

pub fn client(server: &MockServer, tokens: &Arc<TokenStore>) -> Arc<ApiClient> {
    client_with_timeout(server, tokens, Duration::from_millis(4000))
}

pub fn client_with_timeout(
    server: &MockServer,
    tokens: &Arc<TokenStore>,
    timeout: Duration,
) -> Arc<ApiClient> {
    let config = ApiClientConfig { base_url: server.uri(), timeout };
    Arc::new(ApiClient::new(config, tokens.clone()).expect("api client"))
}

pub fn ok(payload: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "payload": payload, "message": null }))
}

pub fn failure(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "payload": null, "message": message }))
}

/// Query string of the n-th request the server received, decoded into pairs
pub async fn received_query(server: &MockServer, index: usize) -> Vec<(String, String)> {
    let requests = server.received_requests().await.expect("request recording enabled");
    requests[index].url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
}
