//! Search statistics
//!
//! Counts moves enumerated, alpha-beta cutoffs and wall-clock time of a
//! top-level search. A fresh value is used for every search; callers keep
//! session totals with [`SearchStats::merge`].

use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Moves enumerated across the whole tree
    pub nodes_expanded: u64,
    /// Alpha-beta cutoffs
    pub prunes: u64,
    /// Time spent in the top-level call
    pub elapsed: Duration,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cutoffs per hundred enumerated moves
    pub fn prune_rate(&self) -> f64 {
        if self.nodes_expanded == 0 {
            0.0
        } else {
            self.prunes as f64 / self.nodes_expanded as f64 * 100.0
        }
    }

    pub fn nodes_per_second(&self) -> u64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.nodes_expanded as f64 / secs) as u64
        } else {
            0
        }
    }

    /// Add another search's numbers into this one
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes_expanded += other.nodes_expanded;
        self.prunes += other.prunes;
        self.elapsed += other.elapsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_on_empty_stats() {
        let stats = SearchStats::new();
        assert_eq!(stats.prune_rate(), 0.0);
        assert_eq!(stats.nodes_per_second(), 0);
    }

    #[test]
    fn test_merge_accumulates() {
        let mut total = SearchStats::new();
        let one = SearchStats {
            nodes_expanded: 40,
            prunes: 4,
            elapsed: Duration::from_millis(500),
        };
        total.merge(&one);
        total.merge(&one);

        assert_eq!(total.nodes_expanded, 80);
        assert_eq!(total.prunes, 8);
        assert_eq!(total.elapsed, Duration::from_secs(1));
        assert!((total.prune_rate() - 10.0).abs() < f64::EPSILON);
        assert_eq!(total.nodes_per_second(), 80);
    }
}
