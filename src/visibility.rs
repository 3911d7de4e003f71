//! Decides which section currently owns the viewport.
//!
//! Intersection reports arrive in batches. Each batch is resolved to at most
//! one winning section; batches with no qualifying report leave the previous
//! decision standing, so the image stack never flickers back to an
//! indeterminate state while the reader sits between sections.

/// Fraction of a region that must overlap the viewport before it counts.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// One report inside an intersection batch, already matched to a section
/// index by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub section: usize,
    pub ratio: f64,
}

impl Observation {
    pub fn new(section: usize, ratio: f64) -> Self {
        Observation { section, ratio }
    }

    pub fn qualifies(&self) -> bool {
        self.ratio > VISIBILITY_THRESHOLD
    }
}

/// Pick the winning section for one batch.
///
/// The last qualifying report wins: when two sections are marginally visible
/// at once, the later report in the batch decides, not the earlier one.
pub fn resolve_batch(batch: &[Observation]) -> Option<usize> {
    let mut winner = None;
    for observation in batch {
        if observation.qualifies() {
            winner = Some(observation.section);
        }
    }
    winner
}

/// Owns the active section index. The renderer only ever reads it.
#[derive(Debug, Default)]
pub struct VisibilityTracker {
    active: Option<usize>,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        VisibilityTracker { active: None }
    }

    /// `None` until the first qualifying intersection fires; the static
    /// markup already presents section 0 in the meantime.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Feed one intersection batch. Returns the section the renderer should
    /// now display, or `None` when the batch leaves the last decision
    /// standing.
    pub fn ingest(&mut self, batch: &[Observation]) -> Option<usize> {
        let winner = resolve_batch(batch);
        if let Some(index) = winner {
            self.active = Some(index);
        }
        winner
    }

    /// Force the active section, used when navigating straight to an anchor.
    pub fn set_active(&mut self, index: usize) {
        self.active = Some(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_report_wins_the_batch() {
        let batch = [Observation::new(2, 0.4), Observation::new(5, 0.2)];
        assert_eq!(resolve_batch(&batch), Some(5));
    }

    #[test]
    fn non_qualifying_reports_are_skipped_without_resetting_the_winner() {
        let batch = [
            Observation::new(1, 0.9),
            Observation::new(3, 0.05),
            Observation::new(4, 0.0),
        ];
        assert_eq!(resolve_batch(&batch), Some(1));
    }

    #[test]
    fn threshold_is_strict() {
        assert_eq!(resolve_batch(&[Observation::new(0, VISIBILITY_THRESHOLD)]), None);
        assert_eq!(
            resolve_batch(&[Observation::new(0, VISIBILITY_THRESHOLD + 1e-9)]),
            Some(0)
        );
    }

    #[test]
    fn empty_or_quiet_batches_leave_the_tracker_alone() {
        let mut tracker = VisibilityTracker::new();
        assert_eq!(tracker.ingest(&[]), None);
        assert_eq!(tracker.active(), None);

        tracker.ingest(&[Observation::new(2, 0.5)]);
        assert_eq!(tracker.active(), Some(2));

        assert_eq!(tracker.ingest(&[Observation::new(4, 0.01)]), None);
        assert_eq!(tracker.active(), Some(2));
    }

    #[test]
    fn anchor_navigation_overrides_the_last_batch() {
        let mut tracker = VisibilityTracker::new();
        tracker.ingest(&[Observation::new(0, 0.8)]);
        tracker.set_active(2);
        assert_eq!(tracker.active(), Some(2));
    }
}
