use std::future::Future;
use std::time::Duration;

/// Exponential backoff policy for outbound calls
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; `0` disables retrying
    pub max_retries: u32,
    /// Delay before the first retry
    pub initial_backoff: Duration,
    /// Each subsequent delay is the previous one times this factor
    pub backoff_multiplier: f64,
    /// Upper bound for a single delay
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(500),
            backoff_multiplier: 2.0,
            max_backoff: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    /// A policy that tries exactly once
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay to wait before retry number `retry` (1-based)
    pub fn backoff_for(&self, retry: u32) -> Duration {
        let factor = self.backoff_multiplier.powi(retry.saturating_sub(1) as i32);
        let millis = (self.initial_backoff.as_millis() as f64 * factor)
            .min(self.max_backoff.as_millis() as f64);
        Duration::from_millis(millis as u64)
    }

    /// Runs `f` until it succeeds or the retries are exhausted.
    ///
    /// The error of the last attempt is returned. `operation` only labels the
    /// log lines.
    pub async fn run<F, Fut, T, E>(&self, operation: &str, mut f: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let mut retry = 0;

        loop {
            match f().await {
                Ok(value) => return Ok(value),
                Err(e) if retry >= self.max_retries => {
                    if self.max_retries > 0 {
                        tracing::warn!(
                            operation,
                            max_retries = self.max_retries,
                            error = %e,
                            "Retries exhausted"
                        );
                    }
                    return Err(e);
                }
                Err(e) => {
                    retry += 1;
                    let delay = self.backoff_for(retry);

                    tracing::warn!(
                        operation,
                        attempt = retry,
                        max_retries = self.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying after failure"
                    );

                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
