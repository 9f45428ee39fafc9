//! Error types for the dynarr container.
//!
//! Two families: [`ArrayError`] for failed element operations and
//! [`ConfigError`] for a [`ResizePolicy`](crate::ResizePolicy) that
//! cannot be used.

use std::error::Error;
use std::fmt;

/// Errors returned by element access and mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The index does not address an occupied slot (or, for insertion,
    /// the position just past the last one).
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Logical length of the container when the call was made.
        len: usize,
    },
    /// An aggregate query (`min`/`max`) was made on a container with no
    /// elements.
    EmptyContainer,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
            Self::EmptyContainer => write!(f, "container is empty"),
        }
    }
}

impl Error for ArrayError {}

/// Errors detected during [`ResizePolicy::validate()`](crate::ResizePolicy::validate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Linear growth with a step of zero would never make room.
    ZeroGrowStep,
    /// A shrink would leave more trailing slots than the threshold allows,
    /// so the very next removal would shrink again.
    ShrinkUntilAboveThreshold {
        /// Configured number of spare slots kept after a shrink.
        shrink_until: usize,
        /// Configured number of spare slots that triggers a shrink.
        shrink_threshold: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroGrowStep => write!(f, "linear grow step must be at least 1"),
            Self::ShrinkUntilAboveThreshold {
                shrink_until,
                shrink_threshold,
            } => write!(
                f,
                "shrink_until ({shrink_until}) exceeds shrink_threshold ({shrink_threshold})"
            ),
        }
    }
}

impl Error for ConfigError {}
