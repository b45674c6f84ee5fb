//! Retry loop: run a closure until success, a terminal error, or an
//! exhausted attempt budget.

use std::time::Duration;

use tracing::debug;

use crate::error::Error;

/// Blocking wait primitive, injectable so tests can observe delays
/// instead of sleeping through them.
pub trait Sleeper {
    /// Blocks the calling thread for `delay`.
    fn sleep(&self, delay: Duration);
}

/// Real sleeper backed by `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Counts attempts made across one retry sequence. Created fresh per
/// loop invocation and never shared.
struct RetryHandler<'a> {
    attempts: u32,
    sleeper: &'a dyn Sleeper,
}

/// Outcome of a single attempt.
enum Step<T> {
    /// Retryable failure with budget remaining; the policy wait has
    /// already elapsed, so the driver can try again at once.
    Again,
    /// Final outcome for the loop's caller.
    Done(Result<T, Error>),
}

impl<'a> RetryHandler<'a> {
    fn new(sleeper: &'a dyn Sleeper) -> Self {
        Self {
            attempts: 0,
            sleeper,
        }
    }

    /// Runs `f` once. On a retryable failure with budget remaining, waits
    /// for the policy delay (computed from the 0-based count of attempts
    /// already made) before reporting [`Step::Again`].
    fn try_once<T, F>(&mut self, f: &mut F) -> Step<T>
    where
        F: FnMut() -> Result<T, Error>,
    {
        match f() {
            Ok(value) => Step::Done(Ok(value)),
            Err(Error::Retryable(err)) => {
                let retrying = self.attempts < err.max_attempts();
                if retrying {
                    let delay = err.delay(self.attempts);
                    debug!(
                        "retryable failure after {} attempts, waiting {:?}: {}",
                        self.attempts, delay, err
                    );
                    self.sleeper.sleep(delay);
                }
                self.attempts += 1;
                if retrying {
                    Step::Again
                } else {
                    debug!("attempt budget spent after {} attempts: {}", self.attempts, err);
                    Step::Done(Err(Error::Retryable(err)))
                }
            }
            Err(err) => Step::Done(Err(err)),
        }
    }
}

/// Runs `f` until it succeeds, fails terminally, or its retryable error's
/// attempt budget is spent. All waits block the calling thread, so by the
/// time this returns the wait for the final reported attempt has already
/// elapsed. The last observed result is returned verbatim.
pub fn run_with_retry<T, F>(f: F) -> Result<T, Error>
where
    F: FnMut() -> Result<T, Error>,
{
    run_with_retry_using(&ThreadSleeper, f)
}

/// [`run_with_retry`] with an explicit wait primitive.
pub fn run_with_retry_using<T, F>(sleeper: &dyn Sleeper, mut f: F) -> Result<T, Error>
where
    F: FnMut() -> Result<T, Error>,
{
    let mut handler = RetryHandler::new(sleeper);
    loop {
        if let Step::Done(result) = handler.try_once(&mut f) {
            return result;
        }
    }
}
