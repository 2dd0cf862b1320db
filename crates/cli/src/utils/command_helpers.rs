//! Command execution helpers

use std::future::Future;
use std::time::Instant;

use tracing::debug;
use tudofresco_infra::ApiError;

use crate::utils::logging::{error_label, log_command_execution};

/// Run a command, timing it and logging the outcome
///
/// Gateway failures are additionally logged with their category label. The
/// result is returned untouched.
pub async fn execute_logged<F, Fut, T>(command_name: &str, command_fn: F) -> anyhow::Result<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    if let Err(err) = &result {
        let label = err.downcast_ref::<ApiError>().map_or("local", error_label);
        debug!(command = command_name, error_type = label, "command failed");
    }

    result
}
