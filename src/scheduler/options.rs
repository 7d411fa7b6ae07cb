//! Generation options.

use serde::{Deserialize, Serialize};

use crate::models::Strategy;

/// Default cap on backtracking search nodes for one schedule.
///
/// Odd fields up to the low twenties finish well below this. Past that the
/// bye search can hit dead ends, and under `Strategy::Auto` running out of
/// steps hands the field to the circle method.
pub const DEFAULT_MAX_SEARCH_STEPS: u64 = 5_000_000;

/// Options for [`generate_schedule_with`](crate::generate_schedule_with).
///
/// # Example
///
/// ```
/// use round_robin_pairs::scheduler::ScheduleOptions;
/// use round_robin_pairs::models::Strategy;
///
/// let options = ScheduleOptions::new()
///     .with_strategy(Strategy::CircleMethod)
///     .with_seed(42);
/// assert_eq!(options.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOptions {
    /// Which algorithm to run.
    pub strategy: Strategy,
    /// When a round cannot be paired, try other bye candidates and
    /// revisit earlier rounds before failing.
    pub retry_byes: bool,
    /// Cap on backtracking search nodes. `None` = unbounded.
    pub max_search_steps: Option<u64>,
    /// Seed for shuffling participant labels. `None` = canonical labels.
    pub seed: Option<u64>,
}

impl ScheduleOptions {
    /// Default options: automatic strategy, bye retries on, default step cap.
    pub fn new() -> Self {
        Self {
            strategy: Strategy::Auto,
            retry_byes: true,
            max_search_steps: Some(DEFAULT_MAX_SEARCH_STEPS),
            seed: None,
        }
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enables or disables bye retries.
    pub fn with_retry_byes(mut self, retry: bool) -> Self {
        self.retry_byes = retry;
        self
    }

    /// Sets the search step cap.
    pub fn with_max_search_steps(mut self, steps: u64) -> Self {
        self.max_search_steps = Some(steps);
        self
    }

    /// Removes the search step cap.
    pub fn without_search_limit(mut self) -> Self {
        self.max_search_steps = None;
        self
    }

    /// Shuffles participant labels with the given seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let o = ScheduleOptions::default();
        assert_eq!(o.strategy, Strategy::Auto);
        assert!(o.retry_byes);
        assert_eq!(o.max_search_steps, Some(DEFAULT_MAX_SEARCH_STEPS));
        assert_eq!(o.seed, None);
    }

    #[test]
    fn test_builder() {
        let o = ScheduleOptions::new()
            .with_strategy(Strategy::ByeRotation)
            .with_retry_byes(false)
            .with_max_search_steps(10)
            .with_seed(7);
        assert_eq!(o.strategy, Strategy::ByeRotation);
        assert!(!o.retry_byes);
        assert_eq!(o.max_search_steps, Some(10));
        assert_eq!(o.seed, Some(7));

        assert_eq!(o.without_search_limit().max_search_steps, None);
    }
}
