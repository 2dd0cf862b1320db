//! API request gateway
//!
//! Every backend call goes through [`ApiClient`]. It resolves the endpoint
//! against the configured base address, attaches the bearer credential,
//! bounds the exchange with a deadline, and unwraps the `{ payload, message }`
//! envelope into the caller's type.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use tudofresco_domain::{ApiConfig, Envelope, TudoFrescoError};
use url::Url;

use super::auth::{AccessTokenProvider, Anonymous};
use super::errors::ApiError;
use super::request::{RequestBody, RequestOptions};
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// Base URL every path is appended to
    pub base_url: String,
    /// Deadline for one request, from send until the body is read
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self { base_url: config.base_url.clone(), timeout: config.timeout() }
    }
}

/// API client for the marketplace backend
pub struct ApiClient {
    http_client: HttpClient,
    auth: Arc<dyn AccessTokenProvider>,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the base URL is not an absolute http(s)
    /// URL or the HTTP client cannot be created.
    pub fn new(
        config: ApiClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(&config.base_url)?;

        // The deadline is owned by `request`; no reqwest timer may race it.
        let http_client = HttpClient::builder()
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {}", e)))?;

        Ok(Self { http_client, auth, base_url, timeout: config.timeout })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Execute a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, RequestBody::Empty, options).await
    }

    /// Execute a POST request
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: RequestBody,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, body, options).await
    }

    /// Execute a PUT request
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: RequestBody,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, body, options).await
    }

    /// Execute a PATCH request
    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: RequestBody,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(Method::PATCH, path, body, options).await
    }

    /// Execute a DELETE request
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, RequestBody::Empty, options).await
    }

    /// Execute a request with any method
    ///
    /// # Returns
    ///
    /// The envelope `payload` decoded as `T`. `204`/`205` responses and absent
    /// payloads decode from `null`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Timeout`] when the deadline passes; the request is dropped
    /// - [`ApiError::Network`] when the server cannot be reached
    /// - [`ApiError::Server`] for non-2xx statuses with an envelope
    /// - [`ApiError::InvalidResponse`] when the body is not an envelope or the
    ///   payload does not match `T`
    #[instrument(skip(self, body, options), fields(method = %method, path = %path))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let url = self.url_for(path);

        let token = if options.skip_auth { None } else { self.auth.access_token().await? };
        let headers = merge_headers(token.as_deref(), &options.headers, body.is_multipart())?;

        debug!(url = %url, body = body.kind(), authorized = token.is_some(), "API request");

        let mut builder = self.http_client.request(method, &url).headers(headers);
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Form(fields) => builder.form(&fields),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        let exchange = async {
            let response = self.http_client.send(builder).await?;
            let status = response.status();
            let bytes = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, bytes))
        };

        let (status, bytes) = match tokio::time::timeout(self.timeout, exchange).await {
            Ok(Ok(received)) => received,
            Ok(Err(err)) if err.is_timeout() => return Err(self.timed_out(&url)),
            Ok(Err(err)) => {
                let err = ApiError::from(TudoFrescoError::from(InfraError::from(err)));
                warn!(url = %url, error = ?err, "API request failed");
                return Err(err);
            }
            Err(_) => return Err(self.timed_out(&url)),
        };

        debug!(url = %url, %status, "API response");
        decode_envelope(status, &bytes)
    }

    fn timed_out(&self, url: &str) -> ApiError {
        let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
        warn!(url = %url, timeout_ms, "API request timed out");
        ApiError::Timeout(self.timeout)
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    auth: Option<Arc<dyn AccessTokenProvider>>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut config = self.config.take().unwrap_or_default();
        config.base_url = base_url.into();
        self.config = Some(config);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        let mut config = self.config.take().unwrap_or_default();
        config.timeout = timeout;
        self.config = Some(config);
        self
    }

    /// Set the authentication provider. Without one, requests go out
    /// unauthenticated.
    pub fn auth(mut self, auth: Arc<dyn AccessTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if client creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let auth = self.auth.unwrap_or_else(|| Arc::new(Anonymous));
        ApiClient::new(config, auth)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed)
        .map_err(|e| ApiError::Config(format!("Invalid API base URL '{raw}': {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ApiError::Config(format!(
            "API base URL must use http or https, got '{}'",
            parsed.scheme()
        )));
    }
    Ok(trimmed.to_string())
}

/// Authorization first, then caller headers replacing any key they repeat.
/// Caller `Content-Type` is dropped for multipart bodies.
fn merge_headers(
    token: Option<&str>,
    extra: &[(String, String)],
    multipart: bool,
) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();

    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ApiError::Request("credential is not a valid header value".into()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    let mut caller = Vec::with_capacity(extra.len());
    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ApiError::Request(format!("invalid header name: {name}")))?;
        if multipart && name == CONTENT_TYPE {
            continue;
        }
        let value = HeaderValue::from_str(value)
            .map_err(|_| ApiError::Request(format!("invalid value for header {name}")))?;
        caller.push((name, value));
    }

    for (name, _) in &caller {
        headers.remove(name);
    }
    for (name, value) in caller {
        headers.append(name, value);
    }

    Ok(headers)
}

/// Unwrap a response body into the payload type
fn decode_envelope<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, ApiError> {
    let no_content = status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT;

    let envelope = if no_content && body.iter().all(u8::is_ascii_whitespace) {
        // These status codes have no body by RFC spec
        Envelope { payload: None, message: None }
    } else {
        serde_json::from_slice::<Envelope>(body).map_err(|e| {
            debug!(%status, error = %e, "response body is not an envelope");
            ApiError::InvalidResponse { status: status.as_u16() }
        })?
    };

    if !status.is_success() {
        return Err(ApiError::Server {
            status: status.as_u16(),
            message: envelope.error_message().to_string(),
        });
    }

    serde_json::from_value(envelope.payload.unwrap_or(Value::Null)).map_err(|e| {
        debug!(%status, error = %e, "payload does not match the expected type");
        ApiError::InvalidResponse { status: status.as_u16() }
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Created {
        uuid: String,
    }

    #[test]
    fn decodes_payload() {
        let body = br#"{ "payload": { "uuid": "abc" }, "message": null }"#;
        let created: Created = decode_envelope(StatusCode::OK, body).unwrap();
        assert_eq!(created, Created { uuid: "abc".into() });
    }

    #[test]
    fn error_status_uses_envelope_message() {
        let body = br#"{ "payload": null, "message": "CNPJ invalid" }"#;
        let err = decode_envelope::<Value>(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 400, .. }));
        assert_eq!(err.to_string(), "CNPJ invalid");
    }

    #[test]
    fn error_status_without_message_uses_fallback() {
        let err = decode_envelope::<Value>(StatusCode::INTERNAL_SERVER_ERROR, b"{}").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected error while processing the request");
    }

    #[test]
    fn non_json_body_is_invalid_response() {
        let err = decode_envelope::<Value>(StatusCode::BAD_GATEWAY, b"<html>").unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse { status: 502 }));
        let err = decode_envelope::<Value>(StatusCode::OK, b"").unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse { status: 200 }));
    }

    #[test]
    fn mismatched_payload_is_invalid_response() {
        let body = br#"{ "payload": { "id": 1 }, "message": null }"#;
        let err = decode_envelope::<Created>(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse { .. }));
    }

    #[test]
    fn no_content_decodes_from_null() {
        decode_envelope::<()>(StatusCode::NO_CONTENT, b"").unwrap();
        let value: Option<Created> = decode_envelope(StatusCode::RESET_CONTENT, b"").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn caller_headers_override_authorization() {
        let extra = vec![("Authorization".to_string(), "Basic xyz".to_string())];
        let headers = merge_headers(Some("a.b.c"), &extra, false).unwrap();
        assert_eq!(headers.get_all(AUTHORIZATION).iter().count(), 1);
        assert_eq!(headers[AUTHORIZATION], "Basic xyz");
    }

    #[test]
    fn multipart_drops_caller_content_type() {
        let extra = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("X-Client".to_string(), "cli".to_string()),
        ];
        let headers = merge_headers(None, &extra, true).unwrap();
        assert!(headers.get(CONTENT_TYPE).is_none());
        assert_eq!(headers["x-client"], "cli");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn rejects_invalid_header_names() {
        let extra = vec![("bad header".to_string(), "1".to_string())];
        assert!(matches!(merge_headers(None, &extra, false), Err(ApiError::Request(_))));
    }

    #[test]
    fn base_url_is_validated_and_trimmed() {
        assert_eq!(
            normalize_base_url("https://api.example.com/").unwrap(),
            "https://api.example.com"
        );
        assert!(matches!(normalize_base_url("not a url"), Err(ApiError::Config(_))));
        assert!(matches!(normalize_base_url("ftp://example.com"), Err(ApiError::Config(_))));
    }

    #[test]
    fn builder_defaults_to_production_backend() {
        let client = ApiClient::builder().build().unwrap();
        assert_eq!(client.base_url(), tudofresco_domain::constants::DEFAULT_API_BASE_URL);
        assert_eq!(client.timeout(), Duration::from_millis(4000));
    }
}
