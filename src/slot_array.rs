use std::iter::{Enumerate, FusedIterator};
use std::slice;

/// Capacity used by [`SparseSlotArray::new`].
pub const DEFAULT_SLOT_CAPACITY: usize = 10;

/// An index-addressable array that grows itself whenever a slot past its
/// current capacity is written.
///
/// Slots are keyed by small non-negative integers (symbol codes in a trie),
/// so a node with two children does not pay for 256 empty slots up front.
///
/// # Examples
///
/// ```
/// use wordtrie::SparseSlotArray;
///
/// let mut slots = SparseSlotArray::with_capacity(4);
/// slots.set(2, "b");
/// slots.set(9, "z");
///
/// assert_eq!(slots.get(2), Some(&"b"));
/// assert_eq!(slots.get(3), None);
/// assert_eq!(slots.get(1000), None);
/// assert!(slots.len() >= 10);
///
/// let occupied: Vec<_> = slots.iter().collect();
/// assert_eq!(occupied, vec![(2, &"b"), (9, &"z")]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SparseSlotArray<V> {
    slots: Vec<Option<V>>,
}

impl<V> Default for SparseSlotArray<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for SparseSlotArray<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> SparseSlotArray<V> {
    /// Creates an array with [`DEFAULT_SLOT_CAPACITY`] empty slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SLOT_CAPACITY)
    }

    /// Creates an array with `capacity` empty slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        SparseSlotArray { slots }
    }

    /// Returns the value stored at `index`, or `None` when the slot is unset
    /// or lies beyond the current capacity.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&V> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Returns a mutable reference to the value in slot `index`, if occupied.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut V> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Stores `value` at `index`, returning whatever the slot held before.
    ///
    /// Writing at or past the current capacity grows the array to one and a
    /// half times `index` (rounded up). Existing slots keep their values and
    /// the new ones start out empty.
    pub fn set(&mut self, index: usize, value: V) -> Option<V> {
        if index >= self.slots.len() {
            self.expand_capacity(grown_capacity(index));
        }
        self.slots[index].replace(value)
    }

    /// Empties the slot at `index` and returns its previous value.
    pub fn take(&mut self, index: usize) -> Option<V> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Returns the capacity of the array, not the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slot is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns an iterator over the occupied `(index, value)` pairs in
    /// ascending index order. Reverse it for descending order.
    pub fn iter(&self) -> Slots<'_, V> {
        Slots {
            inner: self.slots.iter().enumerate(),
        }
    }

    fn expand_capacity(&mut self, new_capacity: usize) {
        self.slots.resize_with(new_capacity, || None);
    }
}

/// Capacity after a write at `index` overflowed the array.
fn grown_capacity(index: usize) -> usize {
    (index * 3).div_ceil(2).max(index + 1)
}

impl<'a, V> IntoIterator for &'a SparseSlotArray<V> {
    type Item = (usize, &'a V);
    type IntoIter = Slots<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the occupied slots of a [`SparseSlotArray`].
///
/// This struct is created by the [`iter`] method on [`SparseSlotArray`].
///
/// [`iter`]: SparseSlotArray::iter
#[derive(Clone)]
pub struct Slots<'a, V> {
    inner: Enumerate<slice::Iter<'a, Option<V>>>,
}

impl<'a, V> Iterator for Slots<'a, V> {
    type Item = (usize, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .find_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<V> DoubleEndedIterator for Slots<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some((index, slot)) = self.inner.next_back() {
            if let Some(value) = slot {
                return Some((index, value));
            }
        }
        None
    }
}

impl<V> FusedIterator for Slots<'_, V> {}
