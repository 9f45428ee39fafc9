//! Seeded random operation scripts.
//!
//! An [`OpScript`] is a deterministic sequence of container operations
//! drawn from a ChaCha8 stream. Each [`Op`] can be applied to a
//! `DynamicArray<i64>` and to a `Vec<i64>` model with the same bounds
//! rules, so a test can replay the script against both and compare.

use dynarr_core::ArrayError;
use dynarr_store::DynamicArray;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One container operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    PushBack(i64),
    Insert(usize, i64),
    PopBack,
    Remove(usize),
}

impl Op {
    /// Apply to the container under test.
    pub fn apply(&self, array: &mut DynamicArray<i64>) -> Result<(), ArrayError> {
        match *self {
            Op::PushBack(v) => array.push_back(v),
            Op::Insert(i, v) => array.insert(i, v)?,
            Op::PopBack => {
                array.pop_back();
            }
            Op::Remove(i) => {
                array.remove(i)?;
            }
        }
        Ok(())
    }

    /// Apply to a `Vec` reference model.
    pub fn apply_model(&self, model: &mut Vec<i64>) -> Result<(), ArrayError> {
        let len = model.len();
        match *self {
            Op::PushBack(v) => model.push(v),
            Op::Insert(index, v) => {
                if index > len {
                    return Err(ArrayError::IndexOutOfRange { index, len });
                }
                model.insert(index, v);
            }
            Op::PopBack => {
                model.pop();
            }
            Op::Remove(index) => {
                if index >= len {
                    return Err(ArrayError::IndexOutOfRange { index, len });
                }
                model.remove(index);
            }
        }
        Ok(())
    }
}

/// A deterministic operation sequence.
#[derive(Clone, Debug)]
pub struct OpScript {
    ops: Vec<Op>,
}

impl OpScript {
    /// Draw `len` operations from `seed`.
    ///
    /// Roughly 40% pushes, 20% each of insert, pop and remove, so the
    /// container tends to grow while still exercising shrinks. Indices are
    /// drawn from `0..=max_index` and may be out of range on purpose.
    pub fn generate(seed: u64, len: usize, max_index: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let ops = (0..len)
            .map(|_| {
                let value = rng.next_u64() as i64;
                let index = (rng.next_u64() % (max_index as u64 + 1)) as usize;
                match rng.next_u32() % 10 {
                    0..=3 => Op::PushBack(value),
                    4 | 5 => Op::Insert(index, value),
                    6 | 7 => Op::PopBack,
                    _ => Op::Remove(index),
                }
            })
            .collect();
        Self { ops }
    }

    /// Build a script from explicit operations.
    pub fn from_ops(ops: Vec<Op>) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
