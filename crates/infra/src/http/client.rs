use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;
use tudofresco_domain::TudoFrescoError;

use crate::errors::InfraError;

const DEFAULT_USER_AGENT: &str = concat!("tudofresco/", env!("CARGO_PKG_VERSION"));

/// HTTP client shared by every gateway call.
///
/// Requests are sent exactly once. Deadlines are enforced by the caller (see
/// [`crate::api::ApiClient`]) unless a transport-level timeout is configured
/// on the builder. Errors are returned as the raw [`reqwest::Error`] so the
/// caller can still tell a timeout from a connection failure.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, TudoFrescoError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder.
    ///
    /// Any HTTP status is returned as `Ok`. Only transport failures (DNS,
    /// refused connections, TLS, timeouts, malformed requests) are errors.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, reqwest::Error> {
        let request = builder.build()?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                let status = response.status();
                debug!(%method, %url, %status, "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient").finish_non_exhaustive()
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Option<Duration>,
    user_agent: Option<String>,
    no_proxy: bool,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: None,
            no_proxy: true,
        }
    }
}

impl HttpClientBuilder {
    /// Transport-level deadline covering the whole exchange.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment. Off by default.
    pub fn use_system_proxy(mut self, enabled: bool) -> Self {
        self.no_proxy = !enabled;
        self
    }

    pub fn build(self) -> Result<HttpClient, TudoFrescoError> {
        let mut builder = ReqwestClient::builder()
            .user_agent(self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()));

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if self.no_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            TudoFrescoError::from(infra)
        })?;

        Ok(HttpClient { client })
    }
}
