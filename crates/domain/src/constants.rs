//! Application constants
//!
//! Centralized location for the domain-level constants shared by the
//! session layer, the API gateway and the services built on top of it.

// Backend
pub const DEFAULT_API_BASE_URL: &str = "https://backend-632322610910.southamerica-east1.run.app";
pub const API_BASE_URL_ENV: &str = "TUDOFRESCO_API_BASE_URL";
pub const API_TIMEOUT_ENV: &str = "TUDOFRESCO_API_TIMEOUT_MS";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 4000;

// Session
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const DEFAULT_KEYCHAIN_SERVICE: &str = "TudoFresco.session";
pub const SESSION_BACKEND_ENV: &str = "TUDOFRESCO_SESSION_BACKEND";
pub const SESSION_PATH_ENV: &str = "TUDOFRESCO_SESSION_PATH";
pub const KEYCHAIN_SERVICE_ENV: &str = "TUDOFRESCO_KEYCHAIN_SERVICE";

// Configuration files
pub const CONFIG_PATH_ENV: &str = "TUDOFRESCO_CONFIG";
pub const CONFIG_FILE_STEM: &str = "tudofresco";

// Listing defaults
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_PRODUCT_PAGE_SIZE: u32 = 30;
pub const DEFAULT_RADIUS_METERS: u32 = 10_000;
pub const PRODUCT_SEARCH_WILDCARD: &str = "*";

// Gateway messages
pub const FALLBACK_ERROR_MESSAGE: &str = "Unexpected error while processing the request";
pub const UNKNOWN_LABEL: &str = "Desconhecido";
