//! Pattern-based classification of plain errors into retryable ones.
//!
//! Lets error-producing code stay decoupled from retry decisions: a lower
//! layer raises plain errors, and a higher layer declares by pattern which
//! messages warrant automatic retry and with what policy.

use regex::Regex;

use crate::error::{BoxError, Error, RetryableError};

/// Classifies the error side of `result` against `patterns`, tested in
/// order with the first match winning. A match hands the boxed cause to
/// `build` and returns the resulting retryable error; no match passes the
/// cause through terminally, message unmodified. `Ok` passes through
/// untouched regardless of patterns.
pub fn wrap_retryable<T, E, F>(
    result: Result<T, E>,
    patterns: &[Regex],
    build: F,
) -> Result<T, Error>
where
    E: Into<BoxError>,
    F: FnOnce(BoxError) -> RetryableError,
{
    match result {
        Ok(value) => Ok(value),
        Err(err) => {
            let cause = err.into();
            let message = cause.to_string();
            if patterns.iter().any(|pattern| pattern.is_match(&message)) {
                Err(Error::Retryable(build(cause)))
            } else {
                Err(Error::Terminal(cause))
            }
        }
    }
}
