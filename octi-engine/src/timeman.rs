//! Time Management

use std::time::{Duration, Instant};

/// The wall-clock budget of a single decision.
///
/// A budget is created when a decision starts and only read afterwards.
/// It is exhausted once the time elapsed plus a safety buffer reaches the limit,
/// leaving the buffer for the recursion to unwind and the decision to be returned.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SearchBudget {
    start_time: Instant,
    time_limit: Duration,
    buffer: Duration,
}

impl SearchBudget {
    /// Start a new budget now.
    pub fn new(time_limit: Duration, buffer: Duration) -> Self {
        Self::starting_at(Instant::now(), time_limit, buffer)
    }

    /// Create a budget that started at a given instant.
    pub fn starting_at(start_time: Instant, time_limit: Duration, buffer: Duration) -> Self {
        Self {
            start_time,
            time_limit,
            buffer,
        }
    }

    /// A budget that never runs out. Used for searches bounded by depth alone.
    pub fn unlimited() -> Self {
        Self::new(Duration::MAX, Duration::ZERO)
    }

    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    pub fn buffer(&self) -> Duration {
        self.buffer
    }

    /// Time elapsed since the budget started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns true if elapsed time plus the buffer has reached the time limit.
    pub fn is_exhausted(&self) -> bool {
        self.elapsed().saturating_add(self.buffer) >= self.time_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_budget_is_not_exhausted() {
        let budget = SearchBudget::new(Duration::from_secs(60), Duration::from_millis(30));
        assert!(!budget.is_exhausted());
    }

    #[test]
    fn buffer_larger_than_limit_is_exhausted() {
        let budget = SearchBudget::new(Duration::from_millis(1), Duration::from_millis(30));
        assert!(budget.is_exhausted());
    }

    #[test]
    fn past_start_is_exhausted() {
        let start = Instant::now() - Duration::from_millis(50);
        let budget = SearchBudget::starting_at(start, Duration::from_millis(40), Duration::ZERO);
        assert!(budget.is_exhausted());
        assert!(budget.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn unlimited_never_exhausts() {
        let budget = SearchBudget::unlimited();
        assert!(!budget.is_exhausted());
        assert_eq!(budget.buffer(), Duration::ZERO);
    }
}
