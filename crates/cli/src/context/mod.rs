//! Application context - dependency injection container

use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;
use tracing::{debug, info};
use tudofresco_core::TokenStore;
use tudofresco_domain::{Config, SessionBackend};
use tudofresco_infra::config::{apply_env, load, load_from_file};
use tudofresco_infra::{
    open_token_store, AddressService, ApiClient, ApiClientConfig, AuthService, DemandService,
    ProductService, ReelService, StoreService, UserService,
};

use crate::cli::Cli;

/// Application context - holds the session, the gateway and every service
pub struct AppContext {
    pub config: Config,
    pub session: Arc<TokenStore>,
    pub api: Arc<ApiClient>,

    pub auth: AuthService,
    pub users: UserService,
    pub addresses: AddressService,
    pub stores: StoreService,
    pub products: ProductService,
    pub demands: DemandService,
    pub reel: ReelService,
}

impl AppContext {
    /// Open the configured session backend and build the services over it
    ///
    /// # Errors
    /// Fails when the session store cannot be opened or the base URL is
    /// rejected.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let session = open_token_store(&config.session).context("Failed to open session")?;
        Self::with_session(config, Arc::new(session))
    }

    /// Build the services over an existing token store
    ///
    /// # Errors
    /// Fails when the base URL is rejected.
    pub fn with_session(config: Config, session: Arc<TokenStore>) -> anyhow::Result<Self> {
        let api = Arc::new(ApiClient::new(ApiClientConfig::from(&config.api), session.clone())?);
        debug!(base_url = api.base_url(), "API client ready");

        Ok(Self {
            auth: AuthService::new(api.clone(), session.clone()),
            users: UserService::new(api.clone(), session.clone()),
            addresses: AddressService::new(api.clone()),
            stores: StoreService::new(api.clone()),
            products: ProductService::new(api.clone()),
            demands: DemandService::new(api.clone()),
            reel: ReelService::new(api.clone()),
            config,
            session,
            api,
        })
    }

    /// Context for a parsed command line: config file and environment, then
    /// the global flags
    ///
    /// # Errors
    /// See [`load_config`] and [`AppContext::new`].
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = load_config(cli.config.as_deref())?;
        if let Some(url) = &cli.api_url {
            config.api.base_url.clone_from(url);
        }
        if cli.ephemeral {
            config.session.backend = SessionBackend::Memory;
        }
        info!(base_url = %config.api.base_url, backend = ?config.session.backend, "Starting");
        Self::new(config)
    }
}

/// Load configuration from an explicit file, or from the usual places
///
/// # Errors
/// Returns the configuration error when the file or an environment variable
/// is invalid.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => apply_env(load_from_file(Some(path.to_path_buf()))?)?,
        None => load()?,
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn memory_session_context() {
        let mut config = Config::default();
        config.session.backend = SessionBackend::Memory;
        config.api.base_url = "http://127.0.0.1:9/".into();

        let ctx = AppContext::new(config).unwrap();
        assert_eq!(ctx.api.base_url(), "http://127.0.0.1:9");
        assert!(!ctx.session.is_valid());
    }

    #[test]
    fn rejects_invalid_base_url() {
        let mut config = Config::default();
        config.session.backend = SessionBackend::Memory;
        config.api.base_url = "not a url".into();
        assert!(AppContext::new(config).is_err());
    }

    #[test]
    fn explicit_config_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://localhost:8000\"\ntimeout_ms = 1500").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.api.timeout_ms, 1500);
    }
}
