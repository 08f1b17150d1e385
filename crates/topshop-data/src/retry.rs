//! Retry policies for fetch operations.

use std::time::Duration;

use crate::FetchError;

/// Backoff strategy between retry attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackoffStrategy {
    /// No delay between retries.
    None,
    /// Exponential backoff with base and max.
    Exponential {
        /// Initial delay.
        base: Duration,
        /// Maximum delay.
        max: Duration,
    },
}

impl BackoffStrategy {
    /// Calculate delay for a given attempt number (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        match self {
            Self::None => Duration::ZERO,
            Self::Exponential { base, max } => {
                let multiplier = 2u32.saturating_pow(attempt);
                std::cmp::min(base.saturating_mul(multiplier), *max)
            }
        }
    }
}

impl Default for BackoffStrategy {
    fn default() -> Self {
        Self::Exponential {
            base: Duration::from_millis(200),
            max: Duration::from_secs(2),
        }
    }
}

/// Conditions that trigger a retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryCondition {
    /// Retry on any 5xx status.
    ServerError,
    /// Retry on timeout.
    Timeout,
    /// Retry on connection error.
    ConnectionError,
}

impl RetryCondition {
    /// Check if a status code matches this condition.
    pub fn matches_status(&self, status: u16) -> bool {
        matches!(self, Self::ServerError) && (500..600).contains(&status)
    }

    /// Check if a transport error matches this condition.
    pub fn matches_error(&self, error: &FetchError) -> bool {
        matches!(
            (self, error),
            (Self::Timeout, FetchError::Timeout)
                | (Self::ConnectionError, FetchError::ConnectionError(_))
        )
    }
}

/// Retry policy configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// Backoff strategy.
    pub backoff: BackoffStrategy,
    /// Conditions that trigger retry.
    pub retry_on: Vec<RetryCondition>,
}

impl RetryPolicy {
    /// Create a new retry policy.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            backoff: BackoffStrategy::default(),
            retry_on: vec![
                RetryCondition::ServerError,
                RetryCondition::Timeout,
                RetryCondition::ConnectionError,
            ],
        }
    }

    /// Create a policy with no retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff: BackoffStrategy::None,
            retry_on: Vec::new(),
        }
    }

    /// Set backoff strategy.
    pub fn with_backoff(mut self, strategy: BackoffStrategy) -> Self {
        self.backoff = strategy;
        self
    }

    /// Check if should retry based on status code.
    pub fn should_retry_status(&self, status: u16, attempt: u32) -> bool {
        if attempt >= self.max_retries {
            return false;
        }
        self.retry_on.iter().any(|c| c.matches_status(status))
    }

    /// Check if should retry after a transport error.
    pub fn should_retry_error(&self, error: &FetchError, attempt: u32) -> bool {
        if attempt >= self.max_retries {
            return false;
        }
        self.retry_on.iter().any(|c| c.matches_error(error))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_backoff_is_capped() {
        let backoff = BackoffStrategy::Exponential {
            base: Duration::from_millis(100),
            max: Duration::from_millis(500),
        };
        assert_eq!(backoff.delay_for_attempt(0), Duration::from_millis(100));
        assert_eq!(backoff.delay_for_attempt(2), Duration::from_millis(400));
        assert_eq!(backoff.delay_for_attempt(3), Duration::from_millis(500));
        assert_eq!(backoff.delay_for_attempt(40), Duration::from_millis(500));
    }

    #[test]
    fn test_retry_on_server_error_only() {
        let policy = RetryPolicy::new(2);
        assert!(policy.should_retry_status(503, 0));
        assert!(policy.should_retry_status(500, 1));
        assert!(!policy.should_retry_status(500, 2));
        assert!(!policy.should_retry_status(404, 0));
    }

    #[test]
    fn test_retry_on_errors() {
        let policy = RetryPolicy::new(1);
        assert!(policy.should_retry_error(&FetchError::Timeout, 0));
        assert!(policy.should_retry_error(&FetchError::ConnectionError("refused".into()), 0));
        assert!(!policy.should_retry_error(&FetchError::JsonError("bad".into()), 0));
        assert!(!policy.should_retry_error(&FetchError::Timeout, 1));
    }

    #[test]
    fn test_none_never_retries() {
        let policy = RetryPolicy::none();
        assert!(!policy.should_retry_status(500, 0));
        assert!(!policy.should_retry_error(&FetchError::Timeout, 0));
        assert_eq!(policy.backoff.delay_for_attempt(3), Duration::ZERO);
    }
}
