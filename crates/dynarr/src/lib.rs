//! dynarr: a growable array of shared element handles.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the dynarr sub-crates. For most users, adding `dynarr` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dynarr::prelude::*;
//!
//! let mut array: DynamicArray<i32> = DynamicArray::new();
//! for v in [4, -2, 9] {
//!     array.push_back(v);
//! }
//! array.insert(1, 7).unwrap();
//!
//! assert_eq!(array.len(), 4);
//! assert_eq!(*array.get(1).unwrap(), 7);
//! assert_eq!(*array.min().unwrap(), -2);
//! assert_eq!(*array.max().unwrap(), 9);
//!
//! // Handles outlive their slot.
//! let last = array.pop_back().unwrap();
//! assert_eq!(*last, 9);
//! assert!(matches!(array.get(3), Err(ArrayError::IndexOutOfRange { .. })));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `dynarr-core` | Errors, resize policy, comparators, metrics, `Shared` |
//! | [`store`] | `dynarr-store` | `DynamicArray`, `SlotBlock` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: errors, resize policy, comparators, metrics.
pub mod types {
    pub use dynarr_core::*;
}

/// Storage: the container and its slot block.
pub mod store {
    pub use dynarr_store::*;
}

pub use dynarr_core::compare;
pub use dynarr_core::{ArrayError, ConfigError, Growth, ResizeMetrics, ResizePolicy, Shared};
pub use dynarr_store::DynamicArray;

/// Common imports for working with a [`DynamicArray`].
pub mod prelude {
    pub use dynarr_core::{
        ArrayError, Comparator, ConfigError, Growth, NaturalOrder, ResizePolicy, Shared,
    };
    pub use dynarr_store::DynamicArray;
}
