//! Benchmark profiles for the dynarr container.
//!
//! - [`policy_profiles`]: the resize policies compared by every benchmark
//! - [`filled`]: an array pre-populated with `0..n`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr_core::ResizePolicy;
use dynarr_store::DynamicArray;

/// Named resize policies: the fixed-step default and geometric doubling.
pub fn policy_profiles() -> [(&'static str, ResizePolicy); 2] {
    [
        ("fixed_step", ResizePolicy::new()),
        ("doubling", ResizePolicy::doubling()),
    ]
}

/// Build an array under `policy` holding `0..n`.
///
/// # Panics
///
/// Panics if `policy` is invalid.
pub fn filled(policy: ResizePolicy, n: u64) -> DynamicArray<u64> {
    let mut array = DynamicArray::with_policy(policy).expect("benchmark policy is valid");
    for v in 0..n {
        array.push_back(v);
    }
    array
}
