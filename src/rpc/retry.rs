//! Retry logic utilities for RPC operations
//!
//! Helper functions for exponential backoff and timeout wrapping around the
//! async provider calls made by the RPC client.

use crate::errors::RpcResult;
use std::future::Future;
use std::time::Duration;
use tokio::time::error::Elapsed;
use tokio::time::timeout;

/// Calculate next backoff duration using exponential backoff with a maximum cap
///
/// `new_backoff = min(current_backoff * multiplier, max_backoff)`
///
/// # Example
/// ```
/// use std::time::Duration;
/// use multisig_deploy::rpc::calculate_next_backoff;
///
/// let backoff = Duration::from_millis(100);
/// let next = calculate_next_backoff(backoff, 2.0, 30);
/// assert_eq!(next, Duration::from_millis(200));
/// ```
pub fn calculate_next_backoff(
    current_backoff: Duration,
    multiplier: f64,
    max_backoff_seconds: u64,
) -> Duration {
    Duration::from_millis((current_backoff.as_millis() as f64 * multiplier) as u64)
        .min(Duration::from_secs(max_backoff_seconds))
}

/// Execute an RPC future under a hard timeout
///
/// # Returns
/// - `Ok(result)` when the operation finished in time (the inner
///   `RpcResult` still carries the operation's own outcome)
/// - `Err(Elapsed)` when the deadline passed first
pub async fn execute_with_timeout<T, F>(
    timeout_seconds: u64,
    operation: F,
) -> Result<RpcResult<T>, Elapsed>
where
    F: Future<Output = RpcResult<T>>,
{
    timeout(Duration::from_secs(timeout_seconds), operation).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_backoff() {
        let backoff = Duration::from_millis(100);
        let next = calculate_next_backoff(backoff, 2.0, 30);
        assert_eq!(next, Duration::from_millis(200));

        let next2 = calculate_next_backoff(next, 2.0, 30);
        assert_eq!(next2, Duration::from_millis(400));
    }

    #[test]
    fn test_backoff_capped_at_max() {
        let backoff = Duration::from_secs(20);
        let next = calculate_next_backoff(backoff, 2.0, 30);
        assert_eq!(next, Duration::from_secs(30)); // Capped at max

        let large_backoff = Duration::from_secs(50);
        let next2 = calculate_next_backoff(large_backoff, 1.5, 30);
        assert_eq!(next2, Duration::from_secs(30)); // Capped at max
    }

    #[test]
    fn test_backoff_with_fractional_multiplier() {
        let backoff = Duration::from_millis(1000);
        let next = calculate_next_backoff(backoff, 1.5, 30);
        assert_eq!(next, Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn test_timeout_lets_fast_operations_through() {
        let result = execute_with_timeout(5, async { RpcResult::Ok(42u64) }).await;
        assert_eq!(result.unwrap().unwrap(), 42);
    }

    #[tokio::test]
    async fn test_timeout_fires_on_slow_operations() {
        let result = execute_with_timeout(1, async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            RpcResult::Ok(())
        })
        .await;
        assert!(result.is_err());
    }
}
