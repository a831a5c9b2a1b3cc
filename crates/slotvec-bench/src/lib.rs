//! Shared fixtures for the slotvec benchmarks.
//!
//! Provides fill helpers used by the criterion benches so each variant
//! under comparison builds its collection the same way.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use slotvec::SlotVec;

/// Append `count` sequential values to a fresh preallocated container.
pub fn fill_slot_vec(count: usize) -> SlotVec<u64> {
    let mut v = SlotVec::with_capacity(count);
    for i in 0..count {
        v.push(i as u64);
    }
    v
}

/// Append `count` sequential values to a `Vec` that starts empty and
/// grows by capacity doubling.
pub fn fill_growing_vec(count: usize) -> Vec<u64> {
    let mut v = Vec::new();
    for i in 0..count {
        v.push(i as u64);
    }
    v
}

/// Append `count` sequential values to a `Vec` preallocated with
/// `with_capacity`.
pub fn fill_preallocated_vec(count: usize) -> Vec<u64> {
    let mut v = Vec::with_capacity(count);
    for i in 0..count {
        v.push(i as u64);
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_helpers_agree_on_contents() {
        let slot = fill_slot_vec(100);
        let grown = fill_growing_vec(100);
        let prealloc = fill_preallocated_vec(100);
        assert_eq!(grown, prealloc);
        assert_eq!(slot.len(), grown.len());
        for (i, &x) in grown.iter().enumerate() {
            assert_eq!(slot.get(i), Some(&x));
        }
    }
}
