//! Core types for the dynarr container.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the pieces shared by the storage crate and its users: the shared
//! element handle, error types, the resize policy, comparator
//! capabilities, and resize metrics.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod handle;
pub mod metrics;
pub mod policy;

pub use compare::{Comparator, FnComparator, NaturalOrder, ThreeWay};
pub use error::{ArrayError, ConfigError};
pub use handle::Shared;
pub use metrics::ResizeMetrics;
pub use policy::{Growth, ResizePolicy};
