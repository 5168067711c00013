//! How long the checkout form keeps waiting for Stripe.js to appear.

use std::time::Duration;

/// Remaining fixed-delay retries for initializing the payment SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdkRetry {
    pub delay: Duration,
    pub attempts_left: u32,
}

impl SdkRetry {
    /// Ten tries, half a second apart.
    pub const DEFAULT: SdkRetry = SdkRetry {
        delay: Duration::from_millis(500),
        attempts_left: 10,
    };

    /// The budget after one more failed attempt, or `None` once it is spent.
    pub fn next(self) -> Option<SdkRetry> {
        let attempts_left = self.attempts_left.checked_sub(1)?;
        (attempts_left > 0).then_some(SdkRetry {
            attempts_left,
            ..self
        })
    }

    /// Delay in the form `setTimeout` takes.
    pub fn delay_ms(&self) -> i32 {
        i32::try_from(self.delay.as_millis()).unwrap_or(i32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget_runs_out() {
        let mut retry = Some(SdkRetry::DEFAULT);
        let mut scheduled = 0;
        while let Some(current) = retry {
            assert_eq!(current.delay_ms(), 500);
            scheduled += 1;
            retry = current.next();
        }
        assert_eq!(scheduled, 10);
    }

    #[test]
    fn test_zero_budget_has_no_next() {
        let spent = SdkRetry {
            delay: Duration::from_secs(1),
            attempts_left: 0,
        };
        assert_eq!(spent.next(), None);
    }

    #[test]
    fn test_delay_clamps_to_timer_range() {
        let retry = SdkRetry {
            delay: Duration::from_secs(u64::MAX / 1000),
            attempts_left: 1,
        };
        assert_eq!(retry.delay_ms(), i32::MAX);
    }
}
