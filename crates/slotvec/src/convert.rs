//! Conversions from plain sequences and strings, plus the runtime type
//! predicate.
//!
//! The conversion surface is an explicit overload set, one impl per
//! accepted input shape, resolved statically at the call site. Every
//! conversion copies into fresh storage; none aliases the input.

use std::any::Any;

use crate::vec::SlotVec;

/// Builds from an owned vector: occupied slots in order, cursor at the
/// element count, physical capacity exactly the element count.
impl<T> From<Vec<T>> for SlotVec<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

/// Builds from a borrowed slice by cloning each element.
impl<T: Clone> From<&[T]> for SlotVec<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for SlotVec<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

/// Builds a character container from a string, one element per `char`,
/// in order.
impl From<&str> for SlotVec<char> {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

/// Whether `value` is a `SlotVec<T>`.
///
/// True only for the container itself — plain vectors, slices, strings,
/// and scalars are all rejected, as is a `SlotVec` with a different
/// element type.
pub fn is_slot_vec<T: 'static>(value: &dyn Any) -> bool {
    value.is::<SlotVec<T>>()
}

/// Build a [`SlotVec`] from a list of values, in the style of `vec!`.
///
/// Physical capacity equals the element count, matching the
/// `From<Vec<T>>` conversion.
///
/// ```
/// use slotvec::slotvec;
///
/// let v = slotvec![1, 2, 3];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.get(2), Some(&3));
/// ```
#[macro_export]
macro_rules! slotvec {
    () => {
        $crate::SlotVec::from(::std::vec::Vec::new())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::SlotVec::from(::std::vec![$($value),+])
    };
}
