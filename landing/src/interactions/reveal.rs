//! One-way reveal bookkeeping for content sections.

use std::collections::HashSet;
use std::hash::Hash;

/// Tracks which sections have been revealed.
///
/// Keys are whatever the caller uses to identify a section (an index into
/// the observed list in the browser, plain ids in tests). A key enters the
/// revealed set the first time it is reported intersecting with at least
/// `threshold` of its area visible, and never leaves.
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    threshold: f64,
    revealed: HashSet<K>,
}

impl<K: Eq + Hash + Clone> RevealTracker<K> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: HashSet::new(),
        }
    }

    /// Apply one observer batch of `(key, is_intersecting, ratio)` entries.
    ///
    /// Returns the keys revealed by this batch, in batch order. These are
    /// the sections to mark and stop observing.
    pub fn record<I>(&mut self, batch: I) -> Vec<K>
    where
        I: IntoIterator<Item = (K, bool, f64)>,
    {
        batch
            .into_iter()
            .filter(|(_, intersecting, ratio)| *intersecting && *ratio >= self.threshold)
            .filter_map(|(key, _, _)| self.revealed.insert(key.clone()).then_some(key))
            .collect()
    }

    #[cfg(test)]
    fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    #[cfg(test)]
    fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn intersecting_sections_are_revealed_once() {
        let mut tracker = RevealTracker::new(0.2);

        let first = tracker.record([("benefits", true, 0.5), ("faq", false, 0.0)]);
        assert_eq!(first, vec!["benefits"]);

        let second = tracker.record([("benefits", true, 0.9), ("faq", true, 0.25)]);
        assert_eq!(second, vec!["faq"]);
        assert_eq!(tracker.revealed_count(), 2);
    }

    #[test]
    fn sliver_below_threshold_does_not_reveal() {
        let mut tracker = RevealTracker::new(0.2);

        assert!(tracker.record([("faq", true, 0.05)]).is_empty());
        assert!(!tracker.is_revealed(&"faq"));

        assert_eq!(tracker.record([("faq", true, 0.2)]), vec!["faq"]);
    }

    #[test]
    fn ratio_without_intersection_does_not_reveal() {
        let mut tracker = RevealTracker::new(0.0);
        assert!(tracker.record([("cta", false, 0.0)]).is_empty());
        assert_eq!(tracker.revealed_count(), 0);
    }

    #[test]
    fn reveal_survives_scrolling_away() {
        let mut tracker = RevealTracker::new(0.2);
        tracker.record([("cta", true, 1.0)]);

        let later = tracker.record([("cta", false, 0.0), ("cta", false, 0.0)]);

        assert!(later.is_empty());
        assert!(tracker.is_revealed(&"cta"));
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let mut tracker: RevealTracker<usize> = RevealTracker::new(0.2);
        assert!(tracker.record(Vec::new()).is_empty());
        assert_eq!(tracker.revealed_count(), 0);
    }

    #[test]
    fn duplicate_entries_in_one_batch_report_once() {
        let mut tracker = RevealTracker::new(0.2);
        let revealed = tracker.record([(3usize, true, 0.4), (3, true, 0.4)]);
        assert_eq!(revealed, vec![3]);
    }
}
