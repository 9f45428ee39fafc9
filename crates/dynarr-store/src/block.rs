//! Contiguous slot blocks.
//!
//! A [`SlotBlock`] is a fixed-size boxed slice of slots, each either
//! holding a [`Shared`] handle or absent. The block never changes size in
//! place: growing or shrinking goes through [`SlotBlock::relocate`], which
//! allocates a fresh block, moves the occupied prefix across, and drops
//! the old one.

use std::fmt;
use std::iter::Flatten;
use std::slice;

use dynarr_core::Shared;

/// Iterator over the handles in an occupied prefix.
pub type Occupied<'a, T> = Flatten<slice::Iter<'a, Option<Shared<T>>>>;

/// A single contiguous block of element slots.
pub struct SlotBlock<T> {
    slots: Box<[Option<Shared<T>>]>,
}

impl<T> SlotBlock<T> {
    /// Allocate `capacity` absent slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The handle in slot `index`, or `None` if the slot is absent.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity()`.
    pub fn slot(&self, index: usize) -> Option<&Shared<T>> {
        self.slots[index].as_ref()
    }

    /// Store `handle` in slot `index`, returning whatever it displaced.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity()`.
    pub fn put(&mut self, index: usize, handle: Shared<T>) -> Option<Shared<T>> {
        self.slots[index].replace(handle)
    }

    /// Clear slot `index`, returning its handle.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity()`.
    pub fn take(&mut self, index: usize) -> Option<Shared<T>> {
        self.slots[index].take()
    }

    /// Replace this block with one of `capacity` slots, moving the first
    /// `occupied` slots across in order.
    ///
    /// Returns the number of slots moved.
    ///
    /// # Panics
    ///
    /// Panics if `occupied` exceeds either the old or the new capacity.
    pub fn relocate(&mut self, capacity: usize, occupied: usize) -> usize {
        assert!(
            occupied <= capacity,
            "relocating {occupied} occupied slots into a block of {capacity}"
        );
        let mut fresh = Self::new(capacity);
        for (dst, src) in fresh.slots.iter_mut().zip(&mut self.slots[..occupied]) {
            *dst = src.take();
        }
        self.slots = fresh.slots;
        occupied
    }

    /// Rotate slots `from..=end` one position to the right.
    ///
    /// Slot `end` must be absent; after the call slot `from` is absent and
    /// every slot in `from..end` has moved up by one.
    pub fn shift_right(&mut self, from: usize, end: usize) {
        debug_assert!(self.slots[end].is_none(), "shift_right over occupied slot {end}");
        self.slots[from..=end].rotate_right(1);
    }

    /// Rotate slots `from..=end` one position to the left.
    ///
    /// Slot `from` must be absent; after the call slot `end` is absent and
    /// every slot in `from + 1..=end` has moved down by one.
    pub fn shift_left(&mut self, from: usize, end: usize) {
        debug_assert!(self.slots[from].is_none(), "shift_left over occupied slot {from}");
        self.slots[from..=end].rotate_left(1);
    }

    /// Handles in the first `len` slots, skipping absent ones.
    pub fn occupied(&self, len: usize) -> Occupied<'_, T> {
        self.slots[..len].iter().flatten()
    }

    /// Clear the first `len` slots.
    pub fn clear_prefix(&mut self, len: usize) {
        self.slots[..len].fill(None);
    }
}

impl<T> Clone for SlotBlock<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SlotBlock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn filled(capacity: usize, values: &[i32]) -> SlotBlock<i32> {
        let mut block = SlotBlock::new(capacity);
        for (i, &v) in values.iter().enumerate() {
            block.put(i, Arc::new(v));
        }
        block
    }

    fn values(block: &SlotBlock<i32>, len: usize) -> Vec<i32> {
        block.occupied(len).map(|h| **h).collect()
    }

    #[test]
    fn new_block_is_all_absent() {
        let block: SlotBlock<i32> = SlotBlock::new(5);
        assert_eq!(block.capacity(), 5);
        assert!((0..5).all(|i| block.slot(i).is_none()));
    }

    #[test]
    fn zero_capacity_block() {
        let block: SlotBlock<i32> = SlotBlock::new(0);
        assert_eq!(block.capacity(), 0);
        assert_eq!(block.occupied(0).count(), 0);
    }

    #[test]
    fn put_returns_displaced_handle() {
        let mut block = SlotBlock::new(2);
        assert!(block.put(0, Arc::new(1)).is_none());
        let old = block.put(0, Arc::new(2)).unwrap();
        assert_eq!(*old, 1);
        assert_eq!(**block.slot(0).unwrap(), 2);
    }

    #[test]
    fn take_clears_slot() {
        let mut block = filled(3, &[1, 2]);
        assert_eq!(*block.take(1).unwrap(), 2);
        assert!(block.slot(1).is_none());
        assert!(block.take(1).is_none());
    }

    #[test]
    fn relocate_grows_and_preserves_order() {
        let mut block = filled(3, &[1, 2, 3]);
        let moved = block.relocate(8, 3);
        assert_eq!(moved, 3);
        assert_eq!(block.capacity(), 8);
        assert_eq!(values(&block, 3), vec![1, 2, 3]);
        assert!((3..8).all(|i| block.slot(i).is_none()));
    }

    #[test]
    fn relocate_shrinks() {
        let mut block = filled(20, &[4, 5]);
        block.relocate(7, 2);
        assert_eq!(block.capacity(), 7);
        assert_eq!(values(&block, 2), vec![4, 5]);
    }

    #[test]
    fn relocate_keeps_handles_alive_without_copying_elements() {
        let shared = Arc::new(9);
        let mut block = SlotBlock::new(1);
        block.put(0, Arc::clone(&shared));
        block.relocate(6, 1);
        assert!(Arc::ptr_eq(block.slot(0).unwrap(), &shared));
        assert_eq!(Arc::strong_count(&shared), 2);
    }

    #[test]
    #[should_panic(expected = "relocating 3 occupied slots")]
    fn relocate_below_occupied_panics() {
        let mut block = filled(5, &[1, 2, 3]);
        block.relocate(2, 3);
    }

    #[test]
    fn shift_right_opens_a_gap() {
        let mut block = filled(5, &[1, 2, 3]);
        block.shift_right(1, 3);
        assert_eq!(**block.slot(0).unwrap(), 1);
        assert!(block.slot(1).is_none());
        assert_eq!(**block.slot(2).unwrap(), 2);
        assert_eq!(**block.slot(3).unwrap(), 3);
    }

    #[test]
    fn shift_left_closes_a_gap() {
        let mut block = filled(5, &[1, 2, 3, 4]);
        block.take(1);
        block.shift_left(1, 3);
        assert_eq!(values(&block, 3), vec![1, 3, 4]);
        assert!(block.slot(3).is_none());
    }

    #[test]
    fn clear_prefix_releases_handles() {
        let shared = Arc::new(1);
        let mut block = SlotBlock::new(3);
        block.put(0, Arc::clone(&shared));
        block.put(1, Arc::clone(&shared));
        block.clear_prefix(2);
        assert_eq!(Arc::strong_count(&shared), 1);
        assert_eq!(block.capacity(), 3);
    }

    #[test]
    fn clone_shares_handles() {
        let block = filled(2, &[7]);
        let copy = block.clone();
        assert!(Arc::ptr_eq(block.slot(0).unwrap(), copy.slot(0).unwrap()));
    }
}
