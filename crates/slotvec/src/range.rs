//! Range operations: splice, slice, concatenation, and linear search.

use std::ops::{Bound, RangeBounds};

use crate::vec::{SlotVec, DEFAULT_CAPACITY};

impl<T> SlotVec<T> {
    /// Remove up to `delete_count` physical slots starting at `pos`,
    /// insert `items` in their place, and return the removed slots in
    /// original order.
    ///
    /// `pos` and the removal range are clamped to the physical bounds.
    /// The cursor moves by the net change, `inserted - removed`,
    /// saturating at zero when the removal range extends past the
    /// logical region.
    pub fn splice<I>(&mut self, pos: usize, delete_count: usize, items: I) -> Vec<Option<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let pos = pos.min(self.storage.len());
        let end = pos.saturating_add(delete_count).min(self.storage.len());
        let replacement: Vec<Option<T>> = items.into_iter().map(Some).collect();
        let inserted = replacement.len();
        let removed: Vec<Option<T>> = self.storage.splice(pos..end, replacement).collect();
        self.cursor = self.cursor.saturating_sub(removed.len()) + inserted;
        debug_assert!(self.cursor <= self.storage.len());
        removed
    }

    /// Copy the physical range into a new container.
    ///
    /// An unbounded start is 0; an unbounded end is the cursor, so
    /// `v.slice(..)` copies exactly the logical region. Bounds are
    /// clamped to the physical capacity. The new container's cursor is
    /// the copied range length and its physical capacity is exactly that
    /// length.
    pub fn slice<R>(&self, range: R) -> SlotVec<T>
    where
        T: Clone,
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e + 1,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.cursor,
        };
        let end = end.min(self.storage.len());
        let start = start.min(end);
        let copied = self.storage[start..end].to_vec();
        let cursor = copied.len();
        SlotVec::from_parts(copied, cursor)
    }

    /// Copy the logical slot region into an independent `Vec`.
    ///
    /// Gap slots are preserved as `None`. The returned vector shares no
    /// storage with the container.
    pub fn to_vec(&self) -> Vec<Option<T>>
    where
        T: Clone,
    {
        self.storage[..self.cursor].to_vec()
    }

    /// Build a new container holding this container's logical slots
    /// followed by `other`'s logical slots.
    ///
    /// Physical capacity is the combined length or [`DEFAULT_CAPACITY`],
    /// whichever is larger. Neither input is modified or aliased.
    pub fn concat(&self, other: &SlotVec<T>) -> SlotVec<T>
    where
        T: Clone,
    {
        let mut combined = self.to_vec();
        combined.extend_from_slice(&other.storage[..other.cursor]);
        Self::with_concat_capacity(combined)
    }

    /// Build a new container holding this container's logical slots
    /// followed by the elements of `other`.
    ///
    /// The plain-slice counterpart of [`concat`](Self::concat).
    pub fn concat_slice(&self, other: &[T]) -> SlotVec<T>
    where
        T: Clone,
    {
        let mut combined = self.to_vec();
        combined.extend(other.iter().cloned().map(Some));
        Self::with_concat_capacity(combined)
    }

    fn with_concat_capacity(mut combined: Vec<Option<T>>) -> SlotVec<T> {
        let cursor = combined.len();
        if combined.len() < DEFAULT_CAPACITY {
            combined.resize_with(DEFAULT_CAPACITY, || None);
        }
        SlotVec::from_parts(combined, cursor)
    }

    /// Index of the first slot holding a value equal to `value`.
    ///
    /// The search covers the full physical storage, not just the logical
    /// region; empty slots never match.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.storage
            .iter()
            .position(|slot| slot.as_ref() == Some(value))
    }

    /// Index of the last slot holding a value equal to `value`.
    ///
    /// Physical search range, as with [`index_of`](Self::index_of).
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.storage
            .iter()
            .rposition(|slot| slot.as_ref() == Some(value))
    }
}
