//! Test fixtures and scripted operation sequences for dynarr development.
//!
//! - [`Tracked`] / [`DropCounter`]: an element type that reports when it
//!   is dropped, for checking that the container releases its shares.
//! - [`OpScript`]: seeded random operation sequences that can be replayed
//!   against a [`DynamicArray`](dynarr_store::DynamicArray) and a `Vec`
//!   reference model.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod script;
pub mod tracked;

pub use script::{Op, OpScript};
pub use tracked::{DropCounter, Tracked};
