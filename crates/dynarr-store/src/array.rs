//! The growable, index-addressable container.
//!
//! [`DynamicArray`] keeps its elements in the contiguous prefix
//! `[0, len)` of a single [`SlotBlock`]. Insertions grow the block
//! according to the container's [`ResizePolicy`] before writing;
//! removals run the policy's shrink check afterwards.

use std::fmt;
use std::ops::Index;

use dynarr_core::{
    ArrayError, Comparator, ConfigError, NaturalOrder, ResizeMetrics, ResizePolicy, Shared,
};

use crate::block::{Occupied, SlotBlock};

/// A growable sequence of shared element handles.
///
/// Elements are stored as [`Shared`] handles. Every access operation
/// returns a clone of the slot's handle, so an element removed from the
/// container (or outliving the container) stays valid for whoever still
/// holds it.
///
/// Mutation needs `&mut self`; the container has no interior locking.
pub struct DynamicArray<T> {
    block: SlotBlock<T>,
    len: usize,
    policy: ResizePolicy,
    metrics: ResizeMetrics,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with the default policy (5 slots, grow by 5).
    pub fn new() -> Self {
        Self::from_valid_policy(ResizePolicy::new())
    }

    /// Create an empty array with `capacity` slots and the default
    /// resize rules.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_valid_policy(ResizePolicy::new().with_initial_capacity(capacity))
    }

    /// Create an empty array governed by `policy`.
    ///
    /// Returns an error if the policy fails [`ResizePolicy::validate`].
    pub fn with_policy(policy: ResizePolicy) -> Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self::from_valid_policy(policy))
    }

    fn from_valid_policy(policy: ResizePolicy) -> Self {
        Self {
            block: SlotBlock::new(policy.initial_capacity),
            len: 0,
            metrics: ResizeMetrics::starting_at(policy.initial_capacity),
            policy,
        }
    }

    // ── Access ──────────────────────────────────────────────────────

    /// The element at `index`.
    pub fn get(&self, index: usize) -> Result<Shared<T>, ArrayError> {
        self.check_occupied(index)?;
        Ok(Shared::clone(self.occupied_slot(index)))
    }

    /// The element at position 0, or `None` if the array is empty.
    pub fn first(&self) -> Option<Shared<T>> {
        self.get(0).ok()
    }

    /// The element at the last occupied position, or `None` if the array
    /// is empty.
    pub fn last(&self) -> Option<Shared<T>> {
        let index = self.len.checked_sub(1)?;
        self.get(index).ok()
    }

    /// Iterate over the stored handles in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.block.occupied(self.len),
        }
    }

    // ── Modifiers ───────────────────────────────────────────────────

    /// Append `value` after the last element.
    pub fn push_back(&mut self, value: impl Into<Shared<T>>) {
        self.reserve_one();
        self.block.put(self.len, value.into());
        self.len += 1;
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len()` appends, same as [`push_back`](Self::push_back).
    pub fn insert(
        &mut self,
        index: usize,
        value: impl Into<Shared<T>>,
    ) -> Result<(), ArrayError> {
        if index > self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.reserve_one();
        self.block.shift_right(index, self.len);
        self.block.put(index, value.into());
        self.len += 1;
        Ok(())
    }

    /// Remove the last element and return its handle.
    ///
    /// Does nothing and returns `None` on an empty array.
    pub fn pop_back(&mut self) -> Option<Shared<T>> {
        let index = self.len.checked_sub(1)?;
        let handle = self.block.take(index);
        self.len = index;
        self.try_shrink();
        handle
    }

    /// Remove the element at `index`, shifting `(index, len)` one slot left.
    pub fn remove(&mut self, index: usize) -> Result<Shared<T>, ArrayError> {
        self.check_occupied(index)?;
        let handle = self
            .block
            .take(index)
            .expect("slots inside the occupied prefix are never absent");
        self.block.shift_left(index, self.len - 1);
        self.len -= 1;
        self.try_shrink();
        Ok(handle)
    }

    /// Release every element, then apply the shrink rule.
    pub fn clear(&mut self) {
        self.block.clear_prefix(self.len);
        self.len = 0;
        self.try_shrink();
    }

    // ── Memory ──────────────────────────────────────────────────────

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of slots in the current block.
    pub fn capacity(&self) -> usize {
        self.block.capacity()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The policy this array was built with.
    pub fn policy(&self) -> &ResizePolicy {
        &self.policy
    }

    /// Reallocation counters since construction or the last reset.
    pub fn metrics(&self) -> &ResizeMetrics {
        &self.metrics
    }

    /// Zero the reallocation counters. Peak capacity restarts from the
    /// current capacity.
    pub fn reset_metrics(&mut self) {
        self.metrics = ResizeMetrics::starting_at(self.capacity());
    }

    // ── Extremes ────────────────────────────────────────────────────

    /// The element with the lowest value under `cmp`.
    ///
    /// Ties keep the earliest element.
    pub fn min_by<C: Comparator<T>>(&self, cmp: C) -> Result<Shared<T>, ArrayError> {
        self.extreme_by(|current, candidate| cmp.compare(current, candidate).is_gt())
    }

    /// The element with the highest value under `cmp`.
    ///
    /// Ties keep the earliest element.
    pub fn max_by<C: Comparator<T>>(&self, cmp: C) -> Result<Shared<T>, ArrayError> {
        self.extreme_by(|current, candidate| cmp.compare(current, candidate).is_lt())
    }

    /// Linear scan keeping the first handle that no later one displaces.
    fn extreme_by(
        &self,
        mut displaced_by: impl FnMut(&T, &T) -> bool,
    ) -> Result<Shared<T>, ArrayError> {
        let mut handles = self.iter();
        let mut best = handles.next().ok_or(ArrayError::EmptyContainer)?;
        for candidate in handles {
            if displaced_by(&**best, &**candidate) {
                best = candidate;
            }
        }
        Ok(Shared::clone(best))
    }

    // ── Capacity management ─────────────────────────────────────────

    /// Grow the block if one more element would not fit.
    fn reserve_one(&mut self) {
        let capacity = self.capacity();
        let required = self.len + 1;
        if required <= capacity {
            return;
        }
        let grown = self.policy.grown_capacity(capacity, required);
        let copied = self.block.relocate(grown, self.len);
        self.metrics.record_grow(grown, copied);
    }

    /// Shrink the block if too many trailing slots are spare.
    fn try_shrink(&mut self) {
        if let Some(shrunk) = self.policy.shrunk_capacity(self.len, self.capacity()) {
            let copied = self.block.relocate(shrunk, self.len);
            self.metrics.record_shrink(copied);
        }
    }

    fn check_occupied(&self, index: usize) -> Result<(), ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    fn occupied_slot(&self, index: usize) -> &Shared<T> {
        self.block
            .slot(index)
            .expect("slots inside the occupied prefix are never absent")
    }
}

impl<T: PartialOrd> DynamicArray<T> {
    /// The element with the lowest value under `T`'s own ordering.
    pub fn min(&self) -> Result<Shared<T>, ArrayError> {
        self.min_by(NaturalOrder)
    }

    /// The element with the highest value under `T`'s own ordering.
    pub fn max(&self) -> Result<Shared<T>, ArrayError> {
        self.max_by(NaturalOrder)
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for DynamicArray<T> {
    /// Clones the handles, not the elements: both arrays share storage of
    /// every element.
    fn clone(&self) -> Self {
        Self {
            block: self.block.clone(),
            len: self.len,
            policy: self.policy,
            metrics: self.metrics.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        if let Err(e) = self.check_occupied(index) {
            panic!("{e}");
        }
        self.occupied_slot(index)
    }
}

/// Borrowing iterator over a [`DynamicArray`]'s handles, in order.
pub struct Iter<'a, T> {
    inner: Occupied<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Shared<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a Shared<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}
