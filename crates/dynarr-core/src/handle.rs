//! Shared-ownership element handles.
//!
//! Every occupied slot of a container holds a [`Shared`] handle. Access
//! operations hand out clones of that handle, so an element stays alive
//! for as long as either the slot or any external holder references it.

use std::sync::Arc;

/// Reference-counted handle to a stored element.
///
/// Two handles point at the same element iff [`Arc::ptr_eq`] holds.
pub type Shared<T> = Arc<T>;
