//! Connection retry policy
//!
//! The connect phase probes the server until it answers or the attempt
//! budget runs out. Delay computation is pure so timing behavior is
//! unit-testable; the loop itself sleeps through `tokio::time`, which
//! paused-clock tests fast-forward.

use crate::config::RetryConfig;
use crate::domain::StorageError;
use std::future::Future;
use std::time::Duration;

/// Delay schedule for connection attempts
///
/// With the default multiplier of 1.0 the delay is fixed; a larger
/// multiplier grows it exponentially up to `max_delay`.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts before giving up
    pub max_attempts: usize,
    initial_delay: Duration,
    max_delay: Duration,
    backoff_multiplier: f64,
}

impl RetryPolicy {
    /// Build a policy from the retry configuration
    pub fn from_config(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            initial_delay: Duration::from_millis(config.initial_delay_ms),
            max_delay: Duration::from_millis(config.max_delay_ms),
            backoff_multiplier: config.backoff_multiplier,
        }
    }

    /// Policy that probes exactly once with no delay
    pub fn single_attempt() -> Self {
        Self {
            max_attempts: 1,
            initial_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            backoff_multiplier: 1.0,
        }
    }

    /// Delay to wait after the given (1-based) failed attempt
    pub fn delay_for(&self, attempt: usize) -> Duration {
        let exponent = attempt.saturating_sub(1) as i32;
        let millis = self.initial_delay.as_millis() as f64 * self.backoff_multiplier.powi(exponent);
        let capped = millis.min(self.max_delay.as_millis() as f64);
        Duration::from_millis(capped as u64)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}

/// Why a connection probe failed
#[derive(Debug)]
pub enum ProbeFailure {
    /// Server not reachable yet; worth another attempt
    Transient(String),
    /// No point retrying (bad credentials, invalid options)
    Fatal(StorageError),
}

/// Run a connection probe under the policy's attempt budget
///
/// Returns the number of the successful attempt. Transient failures wait
/// the policy delay and retry; fatal failures abort immediately.
/// Exhausting the budget yields [`StorageError::ConnectionTimeout`].
pub async fn connect_with_retry<F, Fut>(
    policy: &RetryPolicy,
    mut probe: F,
) -> std::result::Result<usize, StorageError>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = std::result::Result<(), ProbeFailure>>,
{
    for attempt in 1..=policy.max_attempts {
        match probe(attempt).await {
            Ok(()) => return Ok(attempt),
            Err(ProbeFailure::Fatal(error)) => return Err(error),
            Err(ProbeFailure::Transient(message)) => {
                tracing::warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    error = %message,
                    "MongoDB not reachable, will retry"
                );

                if attempt < policy.max_attempts {
                    tokio::time::sleep(policy.delay_for(attempt)).await;
                }
            }
        }
    }

    Err(StorageError::ConnectionTimeout {
        attempts: policy.max_attempts,
    })
}
