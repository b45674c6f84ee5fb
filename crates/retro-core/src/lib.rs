//! Retro: policy-driven retries for fallible operations.
//!
//! An operation returns [`Error`]. When the error carries a retry policy
//! ([`RetryableError`]) and its attempt budget is not exhausted, the loop
//! waits per the policy and invokes the operation again; any other error
//! comes back to the caller unchanged after a single attempt.

pub mod classify;
pub mod error;
pub mod policy;
pub mod run;

pub use classify::wrap_retryable;
pub use error::{BoxError, Error, RetryableError};
pub use policy::{WaitPolicy, DEFAULT_BACKOFF_OFFSET};
pub use run::{run_with_retry, run_with_retry_using, Sleeper, ThreadSleeper};
