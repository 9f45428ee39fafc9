//! Lifetime-tracking element fixture.

use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;

/// Shared counter of [`Tracked`] drops.
///
/// Clones observe the same count.
#[derive(Clone, Default)]
pub struct DropCounter {
    drops: Arc<AtomicUsize>,
    next_id: Arc<AtomicUsize>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of [`Tracked`] values created by this counter that have
    /// been dropped.
    pub fn get(&self) -> usize {
        self.drops.load(AtomicOrdering::SeqCst)
    }

    /// Create a tracked value with the next sequential id (0, 1, 2, ...).
    pub fn spawn(&self) -> Tracked {
        let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst) as i32;
        self.spawn_with_id(id)
    }

    /// Create a tracked value with an explicit id.
    pub fn spawn_with_id(&self, id: i32) -> Tracked {
        Tracked {
            id,
            drops: Arc::clone(&self.drops),
        }
    }
}

/// Element ordered by `id` that bumps its [`DropCounter`] when dropped.
pub struct Tracked {
    pub id: i32,
    drops: Arc<AtomicUsize>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.fetch_add(1, AtomicOrdering::SeqCst);
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.id)
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.id.cmp(&other.id))
    }
}
