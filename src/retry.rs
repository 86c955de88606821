use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Configuration for retry behavior
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the first one)
    pub max_attempts: u32,
    /// Initial delay before the first retry
    pub initial_delay: Duration,
    /// Maximum delay between retries
    pub max_delay: Duration,
    /// Multiplier for exponential backoff (e.g., 2.0 doubles the delay each time)
    pub backoff_multiplier: f64,
}

impl RetryConfig {
    /// Create a new retry configuration
    pub fn new(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay,
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }

    /// Set the maximum delay between retries
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Set the backoff multiplier
    pub fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Preset: one attempt, failures go straight back to the user
    pub fn single_attempt() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Preset: provider calls with `max_attempts` attempts
    /// Delays: 500ms, 1s, 2s, ... capped at 5s
    pub fn provider_call(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::from_millis(500))
            .with_max_delay(Duration::from_secs(5))
            .with_backoff_multiplier(2.0)
    }

    /// Calculate the delay for a given attempt number (0-indexed)
    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }

        let delay_ms = self.initial_delay.as_millis() as f64
            * self.backoff_multiplier.powi((attempt - 1) as i32);

        let delay = Duration::from_millis(delay_ms as u64);
        delay.min(self.max_delay)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::single_attempt()
    }
}

/// What to do after a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Fail immediately with this error
    Stop,
    /// Retry after the configured backoff
    Retry,
    /// Retry, waiting at least this long (e.g. a server-provided Retry-After)
    RetryAfter(Duration),
}

/// Execute an async operation with retries, using a classifier to decide
/// whether (and how long after) a failure should be retried
///
/// # Arguments
/// * `config` - Retry configuration (max_attempts must be >= 1)
/// * `operation_name` - Name of the operation for logging
/// * `operation` - Async closure that returns Result<T, E>
/// * `classify` - Maps each error to a [`RetryDecision`]
///
/// # Panics
/// Panics if `config.max_attempts` is 0
pub async fn with_retry_if<T, E, F, Fut, P>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
    classify: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    P: Fn(&E) -> RetryDecision,
{
    assert!(
        config.max_attempts >= 1,
        "RetryConfig.max_attempts must be >= 1, got {}",
        config.max_attempts
    );

    let mut attempt = 0;
    let mut hinted_delay = Duration::ZERO;

    loop {
        // Wait before retry (except for first attempt); server hints obey max_delay too
        let delay = config
            .delay_for_attempt(attempt)
            .max(hinted_delay.min(config.max_delay));
        if !delay.is_zero() {
            debug!(
                "{}: Retry attempt {}/{} after {:?}",
                operation_name,
                attempt + 1,
                config.max_attempts,
                delay
            );
            sleep(delay).await;
        }

        let error = match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    debug!(
                        "{}: Succeeded on attempt {}/{}",
                        operation_name,
                        attempt + 1,
                        config.max_attempts
                    );
                }
                return Ok(result);
            }
            Err(e) => e,
        };

        hinted_delay = match classify(&error) {
            RetryDecision::Stop => {
                debug!(
                    "{}: Error is not retryable, failing immediately: {}",
                    operation_name, error
                );
                return Err(error);
            }
            RetryDecision::Retry => Duration::ZERO,
            RetryDecision::RetryAfter(hint) => hint,
        };

        let remaining = config.max_attempts - attempt - 1;
        if remaining == 0 {
            if config.max_attempts > 1 {
                warn!(
                    "{}: All {} attempts failed. Last error: {}",
                    operation_name, config.max_attempts, error
                );
            }
            return Err(error);
        }

        warn!(
            "{}: Attempt {}/{} failed ({}), {} retries remaining",
            operation_name,
            attempt + 1,
            config.max_attempts,
            error,
            remaining
        );
        attempt += 1;
    }
}
