use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tudofresco_infra::{ApiError, ApiErrorCategory};

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays parseable.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Calling this
/// twice keeps the first subscriber.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if json { builder.json().try_init() } else { builder.try_init() };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` should be a stable identifier such as `"stores::list"`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Stable label for an [`ApiError`], suitable for logs.
#[inline]
pub fn error_label(error: &ApiError) -> &'static str {
    match error.category() {
        ApiErrorCategory::Authentication => "authentication",
        ApiErrorCategory::RateLimit => "rate_limit",
        ApiErrorCategory::Server => "server",
        ApiErrorCategory::Client => "client",
        ApiErrorCategory::Network => "network",
        ApiErrorCategory::Config => "config",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_categories() {
        assert_eq!(error_label(&ApiError::Unauthenticated), "authentication");
        assert_eq!(error_label(&ApiError::Network("refused".into())), "network");
        let limited = ApiError::Server { status: 429, message: "slow down".into() };
        assert_eq!(error_label(&limited), "rate_limit");
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing(false);
        init_tracing(true);
    }
}
