//! The core container: storage, cursor, and end mutation.
//!
//! A [`SlotVec`] is a preallocated `Vec<Option<T>>` with a cursor that
//! advances on each append. Storage is never truncated by element
//! removal at the back — [`SlotVec::pop`] clears the slot and retreats
//! the cursor, keeping the physical allocation for future appends.

use std::fmt;

/// Physical capacity of a [`SlotVec`] built with [`SlotVec::new`].
pub const DEFAULT_CAPACITY: usize = 1000;

/// A sequential container with preallocated physical slots and a
/// logical-length cursor.
///
/// Physical capacity and logical length are independent: the store is
/// sized up front and the cursor tracks how many leading slots are in
/// use. Appends inside the preallocated region are plain slot writes.
///
/// Each physical slot either holds a value or is empty (`None`). Empty
/// slots inside the logical region are *gaps*, created by [`SlotVec::set`]
/// past the cursor.
pub struct SlotVec<T> {
    /// Physical slots. The slot count is the physical capacity; it is
    /// deliberately not exposed through the public surface.
    pub(crate) storage: Vec<Option<T>>,
    /// Logical length: index of the first unused slot.
    pub(crate) cursor: usize,
}

impl<T> SlotVec<T> {
    /// Create a container with [`DEFAULT_CAPACITY`] preallocated slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a container with exactly `capacity` preallocated slots.
    ///
    /// All slots start empty and the logical length is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut storage = Vec::new();
        storage.resize_with(capacity, || None);
        Self { storage, cursor: 0 }
    }

    /// Bulk-reconstruction primitive: adopt `storage` and `cursor`
    /// wholesale. Private so no caller can hand the container aliased or
    /// inconsistent backing storage.
    pub(crate) fn from_parts(storage: Vec<Option<T>>, cursor: usize) -> Self {
        debug_assert!(cursor <= storage.len());
        Self { storage, cursor }
    }

    /// Number of logically present slots.
    pub fn len(&self) -> usize {
        self.cursor
    }

    /// Whether the logical region is empty.
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Read the physical slot at `index`.
    ///
    /// This is a raw physical-slot read: it is bounded by the allocated
    /// capacity, not by [`len`](Self::len). Reading at or past the cursor
    /// but within capacity returns whatever the slot holds (always `None`
    /// in practice, since removal clears slots). Reading past the
    /// physical capacity returns `None`. Gap slots inside the logical
    /// region also read as `None`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.get(index).and_then(Option::as_ref)
    }

    /// Write `value` at `index`, growing physical storage if needed.
    ///
    /// Storage grows exactly to `index + 1` slots when `index` is past
    /// the current capacity. When `index` is at or past the cursor the
    /// cursor advances to `index + 1`; any slots skipped over stay empty
    /// and become gaps. The cursor never retreats through this path.
    pub fn set(&mut self, index: usize, value: T) {
        if index >= self.storage.len() {
            self.storage.resize_with(index + 1, || None);
        }
        self.storage[index] = Some(value);
        if index >= self.cursor {
            self.cursor = index + 1;
        }
    }

    /// Append `value` at the cursor.
    ///
    /// Within the preallocated capacity this is a slot write plus a
    /// cursor increment, no reallocation. Past it, the backing store
    /// grows by one slot.
    pub fn push(&mut self, value: T) {
        if self.cursor == self.storage.len() {
            self.storage.push(Some(value));
        } else {
            self.storage[self.cursor] = Some(value);
        }
        self.cursor += 1;
    }

    /// Remove and return the last logical slot's value.
    ///
    /// Returns `None` on an empty container, leaving the length at zero.
    /// The slot is cleared so the container does not retain the value,
    /// and physical capacity is kept — the store is never truncated here,
    /// since it is intentionally larger than the logical region.
    pub fn pop(&mut self) -> Option<T> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.storage[self.cursor].take()
    }

    /// Remove and return the first logical slot's value, sliding every
    /// remaining physical slot down one position.
    ///
    /// Returns `None` on an empty container without touching the cursor.
    /// Returns `None` but still removes the slot when index 0 is a gap.
    /// O(n) in the physical size — a known cost of front removal.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.storage.remove(0)
    }

    /// Insert `value` at the front, sliding existing slots up one
    /// position, and return the new logical length.
    ///
    /// O(n) in the physical size.
    pub fn push_front(&mut self, value: T) -> usize {
        self.storage.insert(0, Some(value));
        self.cursor += 1;
        self.cursor
    }
}

impl<T> Default for SlotVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SlotVec<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            cursor: self.cursor,
        }
    }
}

/// Formats the logical region only; trailing capacity is elided.
impl<T: fmt::Debug> fmt::Debug for SlotVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.storage[..self.cursor].iter())
            .finish()
    }
}

/// Equality over the logical slot regions; physical capacity does not
/// participate. Gaps compare equal to gaps at the same index.
impl<T: PartialEq> PartialEq for SlotVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.storage[..self.cursor] == other.storage[..other.cursor]
    }
}

impl<T: Eq> Eq for SlotVec<T> {}
