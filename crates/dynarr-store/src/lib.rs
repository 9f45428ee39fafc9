//! Slot-block storage and the [`DynamicArray`] container.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T>
//! ├── SlotBlock<T>   (Box<[Option<Shared<T>>]>, replaced wholesale on resize)
//! ├── ResizePolicy   (grow step / doubling, shrink threshold, shrink-until)
//! └── ResizeMetrics  (grow/shrink counts, slots moved, peak capacity)
//! ```
//!
//! Occupied slots always form the prefix `[0, len)`. Insertions grow the
//! block before writing; removals check for a shrink afterwards. Both
//! reallocations move handles, never the elements behind them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod block;

pub use array::{DynamicArray, Iter};
pub use block::SlotBlock;
