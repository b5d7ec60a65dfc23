//! Fixed-capacity double-ended queue.

use std::collections::VecDeque;

/// A double-ended queue that never grows past its capacity.
///
/// Pushing onto a full queue silently drops the element at the opposite
/// end: `push_back` evicts the front, `push_front` evicts the back. A
/// capacity of zero stores nothing.
///
/// # Examples
///
/// ```
/// use navhistory::history::bounded::BoundedDeque;
///
/// let mut deque = BoundedDeque::new(2);
/// deque.push_back(1);
/// deque.push_back(2);
/// deque.push_back(3);
/// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedDeque<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedDeque<T> {
    /// Creates an empty queue holding at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends to the back, evicting the front element when full.
    pub fn push_back(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        while self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    /// Prepends to the front, evicting the back element when full.
    pub fn push_front(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        while self.items.len() >= self.capacity {
            self.items.pop_back();
        }
        self.items.push_front(item);
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }
}
