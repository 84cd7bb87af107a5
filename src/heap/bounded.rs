//! Array-backed min-heap with a hard capacity.

use std::fmt;

use super::error::HeapError;

/// A min-heap that holds at most `capacity` elements.
///
/// Uses 0-indexed storage with parent = (i-1)/2, children = 2i+1, 2i+2.
/// The backing buffer is allocated once at construction; `slots[0..len)`
/// are occupied and the spare capacity is the empty partition. The buffer
/// never reallocates because `insert` refuses to grow past `capacity`.
///
/// `Clone` duplicates the elements. Use [`structural_copy`] for a copy
/// that shares them.
///
/// [`structural_copy`]: BoundedMinHeap::structural_copy
///
/// # Examples
///
/// ```
/// use triage_heap::heap::{BoundedMinHeap, HeapError};
///
/// let mut heap = BoundedMinHeap::new(2)?;
/// heap.insert(7)?;
/// heap.insert(3)?;
/// assert_eq!(heap.insert(1), Err(HeapError::QueueFull { capacity: 2 }));
///
/// assert_eq!(heap.extract_min()?, 3);
/// assert_eq!(heap.extract_min()?, 7);
/// assert_eq!(heap.extract_min(), Err(HeapError::EmptyQueue));
/// # Ok::<(), HeapError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BoundedMinHeap<T> {
    slots: Vec<T>,
    capacity: usize,
}

impl<T> BoundedMinHeap<T> {
    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns true if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Returns the fixed capacity chosen at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the minimum element without removing it.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.slots.first().ok_or(HeapError::EmptyQueue)
    }

    /// Removes every element. Calling this on an empty heap is a no-op.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Returns the occupied slots in storage order (not sorted).
    ///
    /// Index 0 is the root; useful for inspecting the heap shape.
    pub fn array_order(&self) -> Vec<&T> {
        self.slots.iter().collect()
    }

    /// Returns a new heap with its own storage and size that borrows the
    /// same elements.
    ///
    /// Only the structure is duplicated. Mutating the copy (for example
    /// draining it) leaves `self` untouched.
    pub fn structural_copy(&self) -> BoundedMinHeap<&T> {
        let mut slots = Vec::with_capacity(self.capacity);
        slots.extend(self.slots.iter());
        BoundedMinHeap {
            slots,
            capacity: self.capacity,
        }
    }
}

impl<T: Ord> BoundedMinHeap<T> {
    /// Creates an empty heap that can hold `capacity` elements.
    ///
    /// Returns [`HeapError::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidArgument { capacity });
        }
        Ok(Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Adds an element at its heap position.
    ///
    /// Returns [`HeapError::QueueFull`] and leaves the heap unchanged if
    /// every slot is occupied.
    pub fn insert(&mut self, item: T) -> Result<(), HeapError> {
        if self.is_full() {
            return Err(HeapError::QueueFull {
                capacity: self.capacity,
            });
        }
        self.slots.push(item);
        self.percolate_up(self.slots.len() - 1);
        Ok(())
    }

    /// Adds an element that may be absent.
    ///
    /// `None` is rejected with [`HeapError::NullRecord`]. A full heap is
    /// still reported as [`HeapError::QueueFull`] when the element is present.
    pub fn insert_option(&mut self, item: Option<T>) -> Result<(), HeapError> {
        match item {
            Some(item) => self.insert(item),
            None => Err(HeapError::NullRecord),
        }
    }

    /// Removes and returns the minimum element.
    ///
    /// The last element moves to the root and sinks back into place.
    /// Returns [`HeapError::EmptyQueue`] if the heap is empty.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        let last = self.slots.pop().ok_or(HeapError::EmptyQueue)?;
        if self.slots.is_empty() {
            return Ok(last);
        }
        let min = std::mem::replace(&mut self.slots[0], last);
        self.percolate_down(0);
        Ok(min)
    }

    /// Returns every element in ascending order without mutating the heap.
    ///
    /// Drains a [`structural_copy`](Self::structural_copy), so the elements
    /// themselves are borrowed, never cloned.
    pub fn snapshot_sorted(&self) -> Vec<&T> {
        let mut copy = self.structural_copy();
        let mut sorted = Vec::with_capacity(copy.len());
        while let Ok(item) = copy.extract_min() {
            sorted.push(item);
        }
        sorted
    }

    /// Consumes the heap and returns its elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(item) = self.extract_min() {
            sorted.push(item);
        }
        sorted
    }

    /// Moves the element at `index` up while it is smaller than its parent.
    fn percolate_up(&mut self, mut index: usize) {
        debug_assert!(index < self.slots.len());
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.slots[index] < self.slots[parent] {
                self.slots.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the element at `index` down while it is greater than its
    /// smaller child. Equal children resolve to the left one.
    fn percolate_down(&mut self, mut index: usize) {
        debug_assert!(index < self.slots.len());
        let len = self.slots.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smaller = if right < len && self.slots[right] < self.slots[left] {
                right
            } else {
                left
            };

            if self.slots[index] > self.slots[smaller] {
                self.slots.swap(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord + fmt::Display> BoundedMinHeap<T> {
    /// Renders every element on its own line, ascending.
    ///
    /// Each line ends with `\n`; an empty heap renders as `""`.
    pub fn render_sorted(&self) -> String {
        self.to_string()
    }
}

impl<T: Ord + fmt::Display> fmt::Display for BoundedMinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.snapshot_sorted() {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}
