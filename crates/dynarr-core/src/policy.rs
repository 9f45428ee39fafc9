//! Resize policy parameters.

use crate::error::ConfigError;

/// How capacity grows when an insertion finds the block full.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Growth {
    /// Add a fixed number of slots per reallocation.
    ///
    /// Reproduces exact capacity sequences (5, 10, 15, ...) at the cost of
    /// O(n) amortized work per push over long runs.
    Linear {
        /// Slots added per reallocation. Must be at least 1.
        step: usize,
    },
    /// Double the capacity (or jump straight to the required size if that
    /// is larger). O(1) amortized per push.
    Doubling,
}

/// Configuration for a container's capacity management.
///
/// Controls the initial block size, the growth rule, and when spare
/// trailing slots are released. Validated at construction; immutable
/// once a container owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizePolicy {
    /// Number of slots allocated up front.
    ///
    /// Default: 5.
    pub initial_capacity: usize,

    /// Growth rule applied before an insertion that would exceed capacity.
    ///
    /// Default: `Growth::Linear { step: 5 }`.
    pub growth: Growth,

    /// A removal triggers a shrink once `capacity - len` exceeds this.
    ///
    /// Default: 10.
    pub shrink_threshold: usize,

    /// Spare slots left after a shrink: the new capacity is `len + shrink_until`.
    ///
    /// Default: 5. Must not exceed `shrink_threshold`.
    pub shrink_until: usize,
}

impl ResizePolicy {
    /// Default number of slots allocated at construction.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 5;

    /// Default linear growth step.
    pub const DEFAULT_GROW_STEP: usize = 5;

    /// Default spare-slot count that triggers a shrink.
    pub const DEFAULT_SHRINK_THRESHOLD: usize = 10;

    /// Default spare-slot count kept after a shrink.
    pub const DEFAULT_SHRINK_UNTIL: usize = 5;

    /// The fixed-step policy: start at 5, grow by 5, shrink back to
    /// `len + 5` once more than 10 slots are spare.
    pub const fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            growth: Growth::Linear {
                step: Self::DEFAULT_GROW_STEP,
            },
            shrink_threshold: Self::DEFAULT_SHRINK_THRESHOLD,
            shrink_until: Self::DEFAULT_SHRINK_UNTIL,
        }
    }

    /// Same shrink rule as [`ResizePolicy::new`], geometric growth.
    pub const fn doubling() -> Self {
        Self {
            growth: Growth::Doubling,
            ..Self::new()
        }
    }

    /// Override the initial capacity.
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Check the structural invariants of the policy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Growth::Linear { step: 0 } = self.growth {
            return Err(ConfigError::ZeroGrowStep);
        }
        if self.shrink_until > self.shrink_threshold {
            return Err(ConfigError::ShrinkUntilAboveThreshold {
                shrink_until: self.shrink_until,
                shrink_threshold: self.shrink_threshold,
            });
        }
        Ok(())
    }

    /// Capacity to reallocate to so that at least `required` slots fit.
    ///
    /// Returns `capacity` unchanged when it already suffices. Otherwise
    /// the growth rule is applied as many times as needed.
    pub fn grown_capacity(&self, capacity: usize, required: usize) -> usize {
        if capacity >= required {
            return capacity;
        }
        match self.growth {
            Growth::Linear { step } => {
                let step = step.max(1);
                let missing = required - capacity;
                let steps = missing.div_ceil(step);
                capacity.saturating_add(steps.saturating_mul(step))
            }
            Growth::Doubling => capacity.saturating_mul(2).max(required),
        }
    }

    /// Capacity to shrink to after a removal, if a shrink is due.
    ///
    /// The result is never below `len`.
    pub fn shrunk_capacity(&self, len: usize, capacity: usize) -> Option<usize> {
        let spare = capacity.saturating_sub(len);
        if spare <= self.shrink_threshold {
            return None;
        }
        Some(len + self.shrink_until)
    }
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self::new()
    }
}
