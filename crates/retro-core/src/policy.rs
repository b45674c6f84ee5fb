use std::time::Duration;

/// Default additive offset for the widening backoff curve, so even the
/// first backoff wait is non-trivial.
pub const DEFAULT_BACKOFF_OFFSET: Duration = Duration::from_secs(10);

/// Wait strategy attached to a retryable error.
///
/// The delay is a function of how many attempts have already been made
/// (0-based), so the first wait is computed with count 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitPolicy {
    /// Fixed delay regardless of attempt count. Zero means retry
    /// immediately, for failures where another try costs nothing but
    /// wall clock.
    Fixed(Duration),
    /// Widening backoff: `count^4 + count` seconds plus `offset`, for
    /// conditions expected to resolve after unknown, possibly long delays.
    Backoff { offset: Duration },
}

impl WaitPolicy {
    /// Delay before the next attempt, after `attempts_made` failures.
    pub fn delay(&self, attempts_made: u32) -> Duration {
        match self {
            WaitPolicy::Fixed(delay) => *delay,
            WaitPolicy::Backoff { offset } => {
                let count = u64::from(attempts_made);
                let secs = count.saturating_pow(4).saturating_add(count);
                Duration::from_secs(secs).saturating_add(*offset)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_delay_ignores_attempt_count() {
        let policy = WaitPolicy::Fixed(Duration::from_secs(3));
        assert_eq!(policy.delay(0), Duration::from_secs(3));
        assert_eq!(policy.delay(1), Duration::from_secs(3));
        assert_eq!(policy.delay(100), Duration::from_secs(3));
    }

    #[test]
    fn fixed_zero_delay_means_retry_immediately() {
        let policy = WaitPolicy::Fixed(Duration::ZERO);
        assert_eq!(policy.delay(0), Duration::ZERO);
        assert_eq!(policy.delay(7), Duration::ZERO);
    }

    #[test]
    fn backoff_curve_with_default_offset() {
        let policy = WaitPolicy::Backoff {
            offset: DEFAULT_BACKOFF_OFFSET,
        };
        assert_eq!(policy.delay(0), Duration::from_secs(10));
        assert_eq!(policy.delay(1), Duration::from_secs(12));
        assert_eq!(policy.delay(2), Duration::from_secs(28));
        assert_eq!(policy.delay(3), Duration::from_secs(94));
    }

    #[test]
    fn backoff_is_strictly_increasing() {
        let policy = WaitPolicy::Backoff {
            offset: DEFAULT_BACKOFF_OFFSET,
        };
        let mut last = policy.delay(0);
        for count in 1..8 {
            let next = policy.delay(count);
            assert!(next > last, "delay must grow at count {count}");
            last = next;
        }
    }

    #[test]
    fn backoff_offset_is_tunable() {
        let policy = WaitPolicy::Backoff {
            offset: Duration::ZERO,
        };
        assert_eq!(policy.delay(0), Duration::ZERO);
        assert_eq!(policy.delay(2), Duration::from_secs(18));
    }

    #[test]
    fn backoff_saturates_on_absurd_counts() {
        let policy = WaitPolicy::Backoff {
            offset: DEFAULT_BACKOFF_OFFSET,
        };
        assert_eq!(policy.delay(u32::MAX), Duration::MAX);
    }
}
