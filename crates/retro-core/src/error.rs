//! Retryable and terminal error types.

use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use crate::policy::{WaitPolicy, DEFAULT_BACKOFF_OFFSET};

/// Boxed error accepted as the cause of a failure.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// An error carrying a retry policy: how many attempts are allowed in
/// total, and how long to wait before each retry.
///
/// The cause is held as a named field and message queries forward to it,
/// so the wrapped error displays exactly like the original and callers
/// matching on message content keep working.
#[derive(Debug)]
pub struct RetryableError {
    cause: BoxError,
    max_attempts: u32,
    policy: WaitPolicy,
}

impl RetryableError {
    /// Retryable error waiting a fixed `delay` between attempts.
    /// `Duration::ZERO` retries immediately, up to `max_attempts` times.
    pub fn fixed(cause: impl Into<BoxError>, max_attempts: u32, delay: Duration) -> Self {
        Self {
            cause: cause.into(),
            max_attempts,
            policy: WaitPolicy::Fixed(delay),
        }
    }

    /// Retryable error with the widening backoff curve and default offset.
    pub fn backoff(cause: impl Into<BoxError>, max_attempts: u32) -> Self {
        Self::backoff_with_offset(cause, max_attempts, DEFAULT_BACKOFF_OFFSET)
    }

    /// Widening backoff with a caller-chosen additive offset.
    pub fn backoff_with_offset(
        cause: impl Into<BoxError>,
        max_attempts: u32,
        offset: Duration,
    ) -> Self {
        Self {
            cause: cause.into(),
            max_attempts,
            policy: WaitPolicy::Backoff { offset },
        }
    }

    /// Total number of attempts allowed. Zero means the first failure is
    /// already terminal: retryable in type, but never actually retried.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before the next attempt, after `attempts_made` failures.
    pub fn delay(&self, attempts_made: u32) -> Duration {
        self.policy.delay(attempts_made)
    }

    pub fn policy(&self) -> WaitPolicy {
        self.policy
    }

    /// The wrapped cause.
    pub fn cause(&self) -> &(dyn StdError + 'static) {
        self.cause.as_ref()
    }

    /// Unwraps the original cause.
    pub fn into_cause(self) -> BoxError {
        self.cause
    }
}

impl fmt::Display for RetryableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}

impl StdError for RetryableError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause.as_ref())
    }
}

/// Error returned by a retried operation: either carries a retry policy
/// or is terminal for the loop. The retry loop distinguishes the two by
/// matching on this enum, nowhere else.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failure carrying a retry policy; the loop may try again.
    #[error(transparent)]
    Retryable(#[from] RetryableError),
    /// Any other failure; returned to the caller unchanged, never retried.
    #[error("{0}")]
    Terminal(BoxError),
}

impl Error {
    /// Wraps any error as terminal: the loop returns it after one attempt.
    pub fn terminal(err: impl Into<BoxError>) -> Self {
        Error::Terminal(err.into())
    }

    /// Whether this error carries a retry policy.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Retryable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_preserves_cause_message() {
        let err = RetryableError::fixed("error: key exists", 5, Duration::ZERO);
        assert_eq!(err.to_string(), "error: key exists");

        let err: Error = RetryableError::backoff("error: not ready", 2).into();
        assert_eq!(err.to_string(), "error: not ready");
    }

    #[test]
    fn terminal_preserves_message_and_is_not_retryable() {
        let err = Error::terminal("error: invalid version");
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "error: invalid version");
    }

    #[test]
    fn retryable_reports_budget_and_delay() {
        let err = RetryableError::fixed("connect", 5, Duration::from_secs(3));
        assert_eq!(err.max_attempts(), 5);
        assert_eq!(err.delay(0), Duration::from_secs(3));
        assert_eq!(err.delay(4), Duration::from_secs(3));
        assert_eq!(err.policy(), WaitPolicy::Fixed(Duration::from_secs(3)));
    }

    #[test]
    fn backoff_with_offset_uses_the_given_offset() {
        let err = RetryableError::backoff_with_offset("not ready", 3, Duration::from_secs(1));
        assert_eq!(err.delay(0), Duration::from_secs(1));
        assert_eq!(err.delay(1), Duration::from_secs(3));
    }

    #[test]
    fn source_chain_exposes_the_cause() {
        let cause = std::io::Error::other("boom");
        let err = RetryableError::fixed(cause, 1, Duration::ZERO);
        let source = StdError::source(&err).expect("cause");
        assert_eq!(source.to_string(), "boom");
        assert_eq!(err.cause().to_string(), "boom");
    }

    #[test]
    fn into_cause_returns_the_original_error() {
        let err = RetryableError::backoff("error: resource not ready", 5);
        assert_eq!(err.into_cause().to_string(), "error: resource not ready");
    }
}
