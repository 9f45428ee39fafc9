//! Reallocation counters for a container.
//!
//! [`ResizeMetrics`] records how often a container's backing block was
//! replaced and how much work that cost, so callers can compare resize
//! policies or spot pathological churn.

/// Counters updated on every backing-block replacement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResizeMetrics {
    /// Number of reallocations to a larger block.
    pub grow_events: u64,
    /// Number of reallocations to a smaller block.
    pub shrink_events: u64,
    /// Total occupied slots moved across all reallocations.
    pub slots_copied: u64,
    /// Largest capacity the container has held since the last reset.
    pub peak_capacity: usize,
}

impl ResizeMetrics {
    /// Counters for a container that starts at `capacity`.
    pub fn starting_at(capacity: usize) -> Self {
        Self {
            peak_capacity: capacity,
            ..Self::default()
        }
    }

    /// Record a grow to `capacity` that moved `copied` slots.
    pub fn record_grow(&mut self, capacity: usize, copied: usize) {
        self.grow_events += 1;
        self.slots_copied += copied as u64;
        self.peak_capacity = self.peak_capacity.max(capacity);
    }

    /// Record a shrink that moved `copied` slots.
    pub fn record_shrink(&mut self, copied: usize) {
        self.shrink_events += 1;
        self.slots_copied += copied as u64;
    }

    /// Total reallocations of either kind.
    pub fn reallocations(&self) -> u64 {
        self.grow_events + self.shrink_events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = ResizeMetrics::default();
        assert_eq!(m.grow_events, 0);
        assert_eq!(m.shrink_events, 0);
        assert_eq!(m.slots_copied, 0);
        assert_eq!(m.peak_capacity, 0);
        assert_eq!(m.reallocations(), 0);
    }

    #[test]
    fn grow_tracks_peak() {
        let mut m = ResizeMetrics::starting_at(5);
        m.record_grow(10, 5);
        m.record_grow(15, 10);
        assert_eq!(m.grow_events, 2);
        assert_eq!(m.slots_copied, 15);
        assert_eq!(m.peak_capacity, 15);
    }

    #[test]
    fn shrink_keeps_peak() {
        let mut m = ResizeMetrics::starting_at(120);
        m.record_shrink(109);
        assert_eq!(m.shrink_events, 1);
        assert_eq!(m.peak_capacity, 120);
        assert_eq!(m.reallocations(), 1);
    }
}
