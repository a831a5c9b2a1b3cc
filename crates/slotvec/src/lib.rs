//! Preallocated slot vector with a logical-length cursor.
//!
//! [`SlotVec`] decouples *physical capacity* from *logical length*. The
//! backing store is allocated to a working capacity up front; a cursor
//! marks the first unused slot. Appends within the preallocated region
//! write through the cursor without reallocating, which makes the
//! structure suitable for workloads that grow a collection one element at
//! a time and want to avoid repeated capacity doubling.
//!
//! # Architecture
//!
//! ```text
//! SlotVec<T>
//! ├── storage: Vec<Option<T>>   physical slots (None = empty slot)
//! └── cursor: usize             logical length; first unused slot
//! ```
//!
//! The cursor never exceeds the physical size. Slots at or past the
//! cursor are invisible to [`SlotVec::len`], iteration, equality, and
//! conversion, even though [`SlotVec::get`] can still read them (a raw
//! physical-slot read, documented on the method).
//!
//! # Gaps
//!
//! [`SlotVec::set`] past the cursor advances it to cover the written
//! index, leaving any skipped slots empty. Such *gaps* surface as `None`
//! wherever slots are observed: `get`, iteration, [`SlotVec::for_each`],
//! and [`SlotVec::to_vec`].
//!
//! # Example
//!
//! ```
//! use slotvec::SlotVec;
//!
//! let mut v = SlotVec::with_capacity(16);
//! v.push("one");
//! v.push("two");
//! v.push("three");
//! assert_eq!(v.len(), 3);
//! assert_eq!(v.get(1), Some(&"two"));
//! assert_eq!(v.pop(), Some("three"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod convert;
pub mod iter;
mod range;
mod vec;

// Public re-exports for the primary API surface.
pub use convert::is_slot_vec;
pub use iter::{IntoIter, Iter};
pub use vec::{SlotVec, DEFAULT_CAPACITY};
