use std::future::Future;
use std::time::Duration;

use crate::core::{AppError, Result};

/// Run a configuration lookup, turning an elapsed `timeout` into an error
/// so callers can treat slow and failing stores the same way.
pub async fn bounded_lookup<T, F>(timeout: Duration, lookup: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, lookup).await {
        Ok(result) => result,
        Err(_) => Err(AppError::timeout(format!(
            "establishment lookup exceeded {}ms",
            timeout.as_millis()
        ))),
    }
}
