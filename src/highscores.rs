//! Survival-time ranking
//!
//! Kept in memory only; it starts empty every time the process starts and
//! survives restarts within a run.

/// Default number of scores to keep
pub const MAX_RANKING_SCORES: usize = 5;

/// Best survival times, highest first
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreLedger {
    entries: Vec<f32>,
    capacity: usize,
}

impl Default for ScoreLedger {
    fn default() -> Self {
        Self::new(MAX_RANKING_SCORES)
    }
}

impl ScoreLedger {
    /// Create an empty ledger keeping at most `capacity` scores
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Check if a score would make it onto the ledger
    pub fn qualifies(&self, score: f32) -> bool {
        if self.entries.len() < self.capacity {
            return true;
        }
        self.entries.last().map(|&e| score > e).unwrap_or(true)
    }

    /// Record a survival time.
    ///
    /// Appends, re-sorts descending and truncates to capacity. Equal scores
    /// keep insertion order, so a new score ranks below existing equal ones.
    /// Returns the 1-based rank held by the new score, or None if it was
    /// truncated away.
    pub fn record(&mut self, score: f32) -> Option<usize> {
        let rank = self.entries.iter().filter(|&&e| e >= score).count() + 1;

        self.entries.push(score);
        // Stable sort: ties stay in insertion order
        self.entries.sort_by(|a, b| b.total_cmp(a));
        self.entries.truncate(self.capacity);

        (rank <= self.capacity).then_some(rank)
    }

    /// Scores, highest first
    pub fn entries(&self) -> &[f32] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn best(&self) -> Option<f32> {
        self.entries.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_keeps_top_five_descending() {
        let mut ledger = ScoreLedger::default();
        for score in [10.0, 8.0, 12.0, 5.0, 20.0, 1.0] {
            ledger.record(score);
        }
        assert_eq!(ledger.entries(), &[20.0, 12.0, 10.0, 8.0, 5.0]);
    }

    #[test]
    fn test_record_returns_rank() {
        let mut ledger = ScoreLedger::new(3);
        assert_eq!(ledger.record(5.0), Some(1));
        assert_eq!(ledger.record(9.0), Some(1));
        assert_eq!(ledger.record(7.0), Some(2));
        // Full and too low
        assert_eq!(ledger.record(1.0), None);
        assert_eq!(ledger.entries(), &[9.0, 7.0, 5.0]);
    }

    #[test]
    fn test_ties_rank_after_existing() {
        let mut ledger = ScoreLedger::new(3);
        ledger.record(4.0);
        ledger.record(6.0);
        assert_eq!(ledger.record(4.0), Some(3));
        // A fourth equal score falls off the end
        assert_eq!(ledger.record(4.0), None);
        assert_eq!(ledger.entries(), &[6.0, 4.0, 4.0]);
    }

    #[test]
    fn test_qualifies() {
        let mut ledger = ScoreLedger::new(2);
        assert!(ledger.qualifies(0.1));
        ledger.record(3.0);
        ledger.record(2.0);
        assert!(ledger.qualifies(2.5));
        assert!(!ledger.qualifies(2.0));
        assert!(!ledger.qualifies(1.0));
    }

    #[test]
    fn test_best_and_empty() {
        let mut ledger = ScoreLedger::default();
        assert!(ledger.is_empty());
        assert_eq!(ledger.best(), None);
        ledger.record(3.5);
        ledger.record(7.25);
        assert_eq!(ledger.best(), Some(7.25));
        assert_eq!(ledger.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_sorted_bounded_no_fabrication(
            scores in prop::collection::vec(0.0f32..1000.0, 0..40)
        ) {
            let mut ledger = ScoreLedger::default();
            for &s in &scores {
                ledger.record(s);
            }
            let entries = ledger.entries();
            prop_assert!(entries.len() <= MAX_RANKING_SCORES);
            prop_assert_eq!(entries.len(), scores.len().min(MAX_RANKING_SCORES));
            prop_assert!(entries.windows(2).all(|w| w[0] >= w[1]));
            for e in entries {
                prop_assert!(scores.contains(e));
            }
            // The ledger holds exactly the largest recorded scores
            let mut sorted = scores.clone();
            sorted.sort_by(|a, b| b.total_cmp(a));
            sorted.truncate(MAX_RANKING_SCORES);
            prop_assert_eq!(entries, sorted.as_slice());
        }
    }
}
