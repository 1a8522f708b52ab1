//! Bounded, fixed-cadence polling.
//!
//! The host renders tree levels lazily and gives no completion signal, so
//! the engine re-checks the page on a fixed interval until a predicate
//! yields a value or the attempt budget runs out.

use std::time::Duration;

use thiserror::Error;
use tracing::trace;

use foldernav_core::config::navigation::NavigationConfig;
use foldernav_core::error::{AppError, ErrorKind};

/// Interval and attempt budget for one wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    /// Delay between two checks.
    pub interval: Duration,
    /// Total checks, including the immediate one.
    pub max_attempts: u32,
}

impl WaitPolicy {
    /// Create a new wait policy.
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Policy for locating one chain element.
    pub fn locate(config: &NavigationConfig) -> Self {
        Self::new(config.locate_interval(), config.locate_attempts)
    }

    /// Policy for locating a target whose ancestors are unknown.
    pub fn fallback(config: &NavigationConfig) -> Self {
        Self::new(config.locate_interval(), config.fallback_attempts)
    }

    /// Policy for waiting until the tree renders at all.
    pub fn tree_ready(config: &NavigationConfig) -> Self {
        Self::new(config.locate_interval(), config.tree_ready_attempts)
    }

    /// Attempts actually made; a zero budget still checks once.
    pub fn budget(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

/// The predicate never produced a value within the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("condition not met after {attempts} attempts")]
pub struct WaitTimeout {
    /// Number of checks performed.
    pub attempts: u32,
}

impl From<WaitTimeout> for AppError {
    fn from(err: WaitTimeout) -> Self {
        AppError::with_source(ErrorKind::Timeout, err.to_string(), err)
    }
}

/// Wait until `check` returns `Some`, polling at a fixed interval.
///
/// Checks once immediately, then after each interval, for at most
/// `policy.budget()` checks. The loop ends on the first value or when the
/// budget is spent; dropping the future abandons the wait.
pub async fn wait_for<T, F>(policy: WaitPolicy, mut check: F) -> Result<T, WaitTimeout>
where
    F: FnMut() -> Option<T>,
{
    let budget = policy.budget();

    for attempt in 1..=budget {
        if let Some(value) = check() {
            trace!(attempt, "Wait condition met");
            return Ok(value);
        }
        if attempt < budget {
            tokio::time::sleep(policy.interval).await;
        }
    }

    trace!(attempts = budget, "Wait budget exhausted");
    Err(WaitTimeout { attempts: budget })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tokio::time::Instant;

    const INTERVAL: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn test_resolves_on_third_check_and_stops() {
        let checks = Cell::new(0u32);
        let started = Instant::now();

        let value = wait_for(WaitPolicy::new(INTERVAL, 10), || {
            checks.set(checks.get() + 1);
            (checks.get() == 3).then_some("ready")
        })
        .await;

        assert_eq!(value, Ok("ready"));
        assert_eq!(checks.get(), 3);
        assert_eq!(started.elapsed(), INTERVAL * 2);

        tokio::time::sleep(INTERVAL * 10).await;
        assert_eq!(checks.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_success_does_not_sleep() {
        let started = Instant::now();
        let value = wait_for(WaitPolicy::new(INTERVAL, 10), || Some(7)).await;
        assert_eq!(value, Ok(7));
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out_after_budget() {
        let checks = Cell::new(0u32);
        let started = Instant::now();

        let result: Result<(), _> = wait_for(WaitPolicy::new(INTERVAL, 4), || {
            checks.set(checks.get() + 1);
            None
        })
        .await;

        assert_eq!(result, Err(WaitTimeout { attempts: 4 }));
        assert_eq!(checks.get(), 4);
        assert_eq!(started.elapsed(), INTERVAL * 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_budget_still_checks_once() {
        let checks = Cell::new(0u32);
        let result: Result<(), _> = wait_for(WaitPolicy::new(INTERVAL, 0), || {
            checks.set(checks.get() + 1);
            None
        })
        .await;
        assert_eq!(result, Err(WaitTimeout { attempts: 1 }));
        assert_eq!(checks.get(), 1);
    }

    #[test]
    fn test_policies_follow_config() {
        let config = NavigationConfig::default();
        assert_eq!(WaitPolicy::locate(&config).max_attempts, 10);
        assert_eq!(WaitPolicy::locate(&config).interval, Duration::from_millis(500));
        assert!(WaitPolicy::fallback(&config).max_attempts > WaitPolicy::locate(&config).max_attempts);
    }
}
