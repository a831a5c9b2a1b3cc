//! Iteration over the logical slot region.
//!
//! Iterators yield one item per logical slot, so indices line up with
//! [`SlotVec::get`]: occupied slots come out as `Some`, gaps as `None`.
//! Slots at or past the cursor are never visited.

use std::iter::FusedIterator;
use std::slice;
use std::vec;

use crate::vec::SlotVec;

/// Borrowing iterator over the logical slot region.
///
/// Created by [`SlotVec::iter`]. Yields `Option<&T>` per slot.
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the logical slot region.
///
/// Created by consuming a [`SlotVec`] via `IntoIterator`. Yields
/// `Option<T>` per slot; trailing capacity is dropped.
pub struct IntoIter<T> {
    inner: vec::IntoIter<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = Option<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> SlotVec<T> {
    /// Iterate over the logical slot region in ascending index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.storage[..self.cursor].iter(),
        }
    }

    /// Invoke `f(slot, index)` for each logical index in ascending
    /// order.
    ///
    /// Gap slots are visited as `None`; there is no early exit. The
    /// (value, index) argument order mirrors the accessor surface.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Option<&T>, usize),
    {
        for (index, slot) in self.storage[..self.cursor].iter().enumerate() {
            f(slot.as_ref(), index);
        }
    }
}

impl<'a, T> IntoIterator for &'a SlotVec<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SlotVec<T> {
    type Item = Option<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.storage.truncate(self.cursor);
        IntoIter {
            inner: self.storage.into_iter(),
        }
    }
}

/// Collects into a container whose physical capacity equals the element
/// count; every slot is occupied.
impl<T> FromIterator<T> for SlotVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let storage: Vec<Option<T>> = iter.into_iter().map(Some).collect();
        let cursor = storage.len();
        SlotVec::from_parts(storage, cursor)
    }
}

/// Slot-level collection: `None` items become gaps. Together with
/// [`SlotVec::to_vec`] this gives a gap-preserving round trip.
impl<T> FromIterator<Option<T>> for SlotVec<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        let storage: Vec<Option<T>> = iter.into_iter().collect();
        let cursor = storage.len();
        SlotVec::from_parts(storage, cursor)
    }
}

impl<T> Extend<T> for SlotVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_visits_logical_region_in_order() {
        let v: SlotVec<u8> = vec![1u8, 2, 3].into_iter().collect();
        let items: Vec<Option<&u8>> = v.iter().collect();
        assert_eq!(items, vec![Some(&1), Some(&2), Some(&3)]);
    }

    #[test]
    fn iter_skips_slots_past_cursor() {
        let mut v = SlotVec::with_capacity(100);
        v.push(1);
        assert_eq!(v.iter().count(), 1);
    }

    #[test]
    fn iter_yields_none_for_gaps() {
        let mut v = SlotVec::with_capacity(4);
        v.set(1, 'b');
        let items: Vec<Option<&char>> = v.iter().collect();
        assert_eq!(items, vec![None, Some(&'b')]);
    }

    #[test]
    fn for_each_passes_value_then_index() {
        let mut v = SlotVec::new();
        v.push("one");
        v.push("two");
        v.push("three");

        let mut seen = Vec::new();
        v.for_each(|slot, index| seen.push((slot.copied(), index)));
        assert_eq!(
            seen,
            vec![(Some("one"), 0), (Some("two"), 1), (Some("three"), 2)]
        );
    }

    #[test]
    fn into_iter_drops_trailing_capacity() {
        let mut v = SlotVec::with_capacity(50);
        v.push(1);
        v.push(2);
        let items: Vec<Option<i32>> = v.into_iter().collect();
        assert_eq!(items, vec![Some(1), Some(2)]);
    }

    #[test]
    fn collect_sets_cursor_and_exact_capacity() {
        let v: SlotVec<u8> = (1u8..=3).collect();
        assert_eq!(v.len(), 3);
        assert_eq!(v.storage.len(), 3);
    }

    #[test]
    fn slot_collect_preserves_gaps() {
        let v: SlotVec<u8> = vec![Some(1), None, Some(3)].into_iter().collect();
        assert_eq!(v.len(), 3);
        assert_eq!(v.get(0), Some(&1));
        assert_eq!(v.get(1), None);
        assert_eq!(v.get(2), Some(&3));
    }

    #[test]
    fn extend_pushes_in_order() {
        let mut v = SlotVec::with_capacity(2);
        v.extend([1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.get(2), Some(&3));
    }

    #[test]
    fn iter_reverses_cleanly() {
        let v: SlotVec<u8> = (1u8..=3).collect();
        let rev: Vec<Option<&u8>> = v.iter().rev().collect();
        assert_eq!(rev, vec![Some(&3), Some(&2), Some(&1)]);
    }
}
