//! Array-backed binary min-heap with a caller-supplied ordering key.
//!
//! Storage is 0-indexed: `parent(i) = (i - 1) / 2`, children at `2i + 1` and
//! `2i + 2`. The heap property is `key(parent) <= key(child)` over the whole
//! live range after every `insert` and `remove_min`.
//!
//! # Tie-break
//!
//! Every entry is stamped with a monotonically increasing insertion sequence
//! number and entries are ordered by `(key, sequence)`. Values with equal keys
//! therefore leave the heap in the order they entered it (FIFO). Huffman tree
//! shape depends on this rule even though total cost does not.

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
struct Entry<T, K> {
    key: K,
    seq: u64,
    value: T,
}

impl<T, K: Ord> Entry<T, K> {
    fn precedes(&self, other: &Self) -> bool {
        (&self.key, self.seq) < (&other.key, other.seq)
    }
}

/// Binary min-heap keyed by `key_of`.
///
/// The key is computed once on insertion and cached alongside the value, so
/// `key_of` must not depend on anything that changes while the value sits in
/// the heap.
#[derive(Debug, Clone)]
pub struct MinHeap<T, K> {
    entries: Vec<Entry<T, K>>,
    key_of: fn(&T) -> K,
    next_seq: u64,
}

impl<T, K: Ord> MinHeap<T, K> {
    /// Create an empty heap ordered by `key_of`.
    pub fn new(key_of: fn(&T) -> K) -> Self {
        Self::with_capacity(0, key_of)
    }

    /// Create an empty heap with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize, key_of: fn(&T) -> K) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            key_of,
            next_seq: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of values the backing storage can hold without growing.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Drop every element. The sequence counter keeps running.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Insert a value and sift it up into place. O(log n) amortized.
    pub fn insert(&mut self, value: T) {
        let key = (self.key_of)(&value);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { key, seq, value });
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the minimum value.
    ///
    /// # Errors
    /// Returns `Error::EmptyHeap` if the heap has no elements.
    pub fn remove_min(&mut self) -> Result<T> {
        if self.entries.is_empty() {
            return Err(Error::EmptyHeap);
        }
        // Last element moves into the root slot.
        let min = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(min.value)
    }

    /// Borrow the minimum value without removing it.
    ///
    /// # Errors
    /// Returns `Error::EmptyHeap` if the heap has no elements.
    pub fn peek_min(&self) -> Result<&T> {
        self.entries
            .first()
            .map(|entry| &entry.value)
            .ok_or(Error::EmptyHeap)
    }

    /// Drain the heap in ascending `(key, insertion)` order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.entries.len());
        while let Ok(value) = self.remove_min() {
            out.push(value);
        }
        out
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.entries[index].precedes(&self.entries[parent]) {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.entries[left].precedes(&self.entries[smallest]) {
                smallest = left;
            }
            if right < len && self.entries[right].precedes(&self.entries[smallest]) {
                smallest = right;
            }

            if smallest == index {
                break;
            }

            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T, K: Ord> Extend<T> for MinHeap<T, K> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.entries.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn identity(v: &u32) -> u32 {
        *v
    }

    fn holds_heap_property<T, K: Ord>(heap: &MinHeap<T, K>) -> bool {
        (1..heap.entries.len()).all(|i| !heap.entries[i].precedes(&heap.entries[(i - 1) / 2]))
    }

    #[test]
    fn test_empty_heap() {
        let mut heap = MinHeap::new(identity);
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.remove_min(), Err(Error::EmptyHeap));
        assert_eq!(heap.peek_min(), Err(Error::EmptyHeap));
    }

    #[test]
    fn test_single_element() {
        let mut heap = MinHeap::new(identity);
        heap.insert(7);
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.peek_min(), Ok(&7));
        assert_eq!(heap.remove_min(), Ok(7));
        assert!(heap.is_empty());
        assert_eq!(heap.remove_min(), Err(Error::EmptyHeap));
    }

    #[test]
    fn test_min_order() {
        let mut heap = MinHeap::new(identity);
        heap.extend([5, 3, 9, 1, 4, 1, 8]);
        assert!(holds_heap_property(&heap));
        assert_eq!(heap.into_sorted_vec(), vec![1, 1, 3, 4, 5, 8, 9]);
    }

    #[test]
    fn test_equal_keys_leave_in_insertion_order() {
        let mut heap: MinHeap<(u32, char), u32> = MinHeap::new(|pair: &(u32, char)| pair.0);
        heap.insert((2, 'a'));
        heap.insert((1, 'b'));
        heap.insert((2, 'c'));
        heap.insert((1, 'd'));
        heap.insert((2, 'e'));

        let order: Vec<char> = heap.into_sorted_vec().into_iter().map(|p| p.1).collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c', 'e']);
    }

    #[test]
    fn test_storage_grows_past_initial_capacity() {
        let mut heap = MinHeap::with_capacity(2, identity);
        for v in (0..100).rev() {
            heap.insert(v);
        }
        assert_eq!(heap.len(), 100);
        assert!(heap.capacity() >= 100);
        assert_eq!(heap.peek_min(), Ok(&0));
    }

    #[test]
    fn test_clear() {
        let mut heap = MinHeap::new(identity);
        heap.extend([3, 2, 1]);
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.peek_min(), Err(Error::EmptyHeap));
    }

    proptest! {
        #[test]
        fn prop_heap_property_holds_after_every_op(
            ops in prop::collection::vec(prop::option::of(0u32..50), 0..200),
        ) {
            let mut heap = MinHeap::new(identity);
            for op in ops {
                match op {
                    Some(v) => heap.insert(v),
                    None => {
                        let _ = heap.remove_min();
                    }
                }
                prop_assert!(holds_heap_property(&heap));
            }
        }
    }
}
