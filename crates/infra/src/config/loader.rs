//! Configuration loader
//!
//! Loads client configuration from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Start from [`Config::default`]
//! 2. Layer the first config file found (JSON or TOML, by extension)
//! 3. Layer environment variables on top
//!
//! Every value is optional at every layer.
//!
//! ## Environment Variables
//! - `TUDOFRESCO_CONFIG`: Explicit config file path (skips probing)
//! - `TUDOFRESCO_API_BASE_URL`: Backend base address
//! - `TUDOFRESCO_API_TIMEOUT_MS`: Request deadline in milliseconds
//! - `TUDOFRESCO_SESSION_BACKEND`: `file`, `keychain` or `memory`
//! - `TUDOFRESCO_SESSION_PATH`: Session file location for the `file` backend
//! - `TUDOFRESCO_KEYCHAIN_SERVICE`: Service name for the `keychain` backend
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./tudofresco.toml` or `./tudofresco.json` (current working directory)
//! 2. The same names in the parent and grandparent directories
//! 3. `tudofresco.toml` or `tudofresco.json` in the user config directory
//!    (`~/.config/tudofresco/` on Linux)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use tudofresco_domain::constants::{
    API_BASE_URL_ENV, API_TIMEOUT_ENV, CONFIG_FILE_STEM, CONFIG_PATH_ENV, KEYCHAIN_SERVICE_ENV,
    SESSION_BACKEND_ENV, SESSION_PATH_ENV,
};
use tudofresco_domain::{Config, Result, SessionBackend, TudoFrescoError};

/// Load configuration with the full layering strategy
///
/// A missing config file is not an error. An unreadable or malformed one is.
///
/// # Errors
/// Returns `TudoFrescoError::Config` if:
/// - The file named by `TUDOFRESCO_CONFIG` does not exist
/// - A config file cannot be parsed
/// - An environment variable holds an invalid value
pub fn load() -> Result<Config> {
    let explicit = env_opt(CONFIG_PATH_ENV).map(PathBuf::from);

    let base = match explicit.or_else(probe_config_paths) {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env(base)
}

/// Load configuration from environment variables over the defaults
///
/// # Errors
/// Returns `TudoFrescoError::Config` if a variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    apply_env(Config::default())
}

/// Layer environment variables over an existing configuration
///
/// Unset and empty variables leave the corresponding value untouched.
///
/// # Errors
/// Returns `TudoFrescoError::Config` if a variable has an invalid value.
pub fn apply_env(mut config: Config) -> Result<Config> {
    if let Some(base_url) = env_opt(API_BASE_URL_ENV) {
        config.api.base_url = base_url;
    }

    if let Some(raw) = env_opt(API_TIMEOUT_ENV) {
        config.api.timeout_ms = parse_timeout(&raw)?;
    }

    if let Some(raw) = env_opt(SESSION_BACKEND_ENV) {
        config.session.backend = raw.parse::<SessionBackend>().map_err(|e| {
            TudoFrescoError::Config(format!("{SESSION_BACKEND_ENV}: {e}"))
        })?;
    }

    if let Some(path) = env_opt(SESSION_PATH_ENV) {
        config.session.storage_path = Some(PathBuf::from(path));
    }

    if let Some(service) = env_opt(KEYCHAIN_SERVICE_ENV) {
        config.session.keychain_service = service;
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `TudoFrescoError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid or the extension is not `.json`/`.toml`
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(TudoFrescoError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            TudoFrescoError::Config("No config file found in standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path).map_err(|e| {
        TudoFrescoError::Config(format!(
            "Failed to read config file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    parse_config(&contents, &config_path)
}

/// Parse configuration text, choosing the format from the file extension
///
/// # Errors
/// Returns `TudoFrescoError::Config` on a parse failure or unknown extension.
pub fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);

    let config: Config = match extension.as_deref() {
        Some("json") => serde_json::from_str(contents).map_err(|e| {
            TudoFrescoError::Config(format!("Invalid JSON in {}: {}", path.display(), e))
        })?,
        Some("toml") => toml::from_str(contents).map_err(|e| {
            TudoFrescoError::Config(format!("Invalid TOML in {}: {}", path.display(), e))
        })?,
        _ => {
            return Err(TudoFrescoError::Config(format!(
                "Unsupported config file extension: {}",
                path.display()
            )))
        }
    };

    if config.api.timeout_ms == 0 {
        return Err(TudoFrescoError::Config(format!(
            "api.timeout_ms must be greater than zero in {}",
            path.display()
        )));
    }

    Ok(config)
}

/// Probe standard locations for a config file
///
/// # Returns
/// The first existing candidate, if any.
pub fn probe_config_paths() -> Option<PathBuf> {
    let names = [format!("{CONFIG_FILE_STEM}.toml"), format!("{CONFIG_FILE_STEM}.json")];
    let mut candidates: Vec<PathBuf> = Vec::new();

    // Current directory and its ancestors
    for dir in [Path::new("."), Path::new(".."), Path::new("../..")] {
        candidates.extend(names.iter().map(|name| dir.join(name)));
    }

    // Per-user config directory
    if let Some(config_dir) = dirs::config_dir() {
        let dir = config_dir.join(CONFIG_FILE_STEM);
        candidates.extend(names.iter().map(|name| dir.join(name)));
    }

    // Relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(names.iter().map(|name| exe_dir.join(name)));
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.is_file())
}

/// Read an optional environment variable, treating empty values as unset
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_timeout(raw: &str) -> Result<u64> {
    match raw.parse::<u64>() {
        Ok(0) => {
            Err(TudoFrescoError::Config(format!("{API_TIMEOUT_ENV} must be greater than zero")))
        }
        Ok(ms) => Ok(ms),
        Err(e) => {
            Err(TudoFrescoError::Config(format!("Invalid {API_TIMEOUT_ENV} '{raw}': {e}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tudofresco_domain::constants::{DEFAULT_API_BASE_URL, DEFAULT_KEYCHAIN_SERVICE};

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ALL_VARS: [&str; 6] = [
        CONFIG_PATH_ENV,
        API_BASE_URL_ENV,
        API_TIMEOUT_ENV,
        SESSION_BACKEND_ENV,
        SESSION_PATH_ENV,
        KEYCHAIN_SERVICE_ENV,
    ];

    fn clear_env() {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_env_defaults_when_unset() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let config = load_from_env().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(API_BASE_URL_ENV, "http://localhost:8080");
        std::env::set_var(API_TIMEOUT_ENV, "1500");
        std::env::set_var(SESSION_BACKEND_ENV, "Keychain");
        std::env::set_var(SESSION_PATH_ENV, "/tmp/tf-session.json");
        std::env::set_var(KEYCHAIN_SERVICE_ENV, "TudoFresco.test");

        let result = load_from_env();
        assert!(result.is_ok(), "Should load config from env vars, error: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_ms, 1500);
        assert_eq!(config.session.backend, SessionBackend::Keychain);
        assert_eq!(config.session.storage_path, Some(PathBuf::from("/tmp/tf-session.json")));
        assert_eq!(config.session.keychain_service, "TudoFresco.test");

        clear_env();
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(API_BASE_URL_ENV, "   ");
        let config = load_from_env().unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);

        clear_env();
    }

    #[test]
    fn test_load_from_env_invalid_values() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(API_TIMEOUT_ENV, "soon");
        assert!(matches!(load_from_env(), Err(TudoFrescoError::Config(_))));

        std::env::set_var(API_TIMEOUT_ENV, "0");
        assert!(matches!(load_from_env(), Err(TudoFrescoError::Config(_))));

        std::env::remove_var(API_TIMEOUT_ENV);
        std::env::set_var(SESSION_BACKEND_ENV, "sqlite");
        let err = load_from_env().unwrap_err();
        assert!(err.to_string().contains(SESSION_BACKEND_ENV));

        clear_env();
    }

    #[test]
    fn test_env_layers_over_file() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tudofresco.toml");
        let toml_content = r#"
[api]
base_url = "http://file.example"
timeout_ms = 2500

[session]
backend = "memory"
"#;
        std::fs::write(&path, toml_content).unwrap();

        std::env::set_var(CONFIG_PATH_ENV, &path);
        std::env::set_var(API_TIMEOUT_ENV, "900");

        let config = load().unwrap();
        assert_eq!(config.api.base_url, "http://file.example");
        assert_eq!(config.api.timeout_ms, 900);
        assert_eq!(config.session.backend, SessionBackend::Memory);
        assert_eq!(config.session.keychain_service, DEFAULT_KEYCHAIN_SERVICE);

        clear_env();
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(CONFIG_PATH_ENV, "/definitely/not/here/tudofresco.toml");
        let err = load().unwrap_err();
        assert!(matches!(err, TudoFrescoError::Config(msg) if msg.contains("not found")));

        clear_env();
    }

    #[test]
    fn test_parse_config_json() {
        let config = parse_config(
            r#"{ "api": { "base_url": "http://json.example" } }"#,
            Path::new("tudofresco.json"),
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://json.example");
        assert_eq!(config.api.timeout_ms, 4000);
    }

    #[test]
    fn test_parse_config_rejects_unknown_extension() {
        let result = parse_config("", Path::new("tudofresco.yaml"));
        assert!(matches!(result, Err(TudoFrescoError::Config(_))));
    }

    #[test]
    fn test_parse_config_rejects_zero_timeout() {
        let result = parse_config("[api]\ntimeout_ms = 0\n", Path::new("tudofresco.toml"));
        assert!(matches!(result, Err(TudoFrescoError::Config(msg)) if msg.contains("timeout_ms")));
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = load_from_file(Some(path));
        assert!(
            matches!(result, Err(TudoFrescoError::Config(msg)) if msg.contains("Invalid JSON"))
        );
    }
}
