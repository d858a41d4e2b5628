// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Strict first-in-first-out queue with a fixed capacity.
//!
//! `BoundedQueue` is a thin FIFO façade over `BoundedList`: elements enter at
//! the tail and leave from the head. Because storage is a `BoundedList`, the
//! queue inherits duplicate rejection; the same person can never be queued
//! twice on one waitlist. The queue capacity is independent of whatever
//! structure owns it.

use crate::collections::{bounded_list::BoundedList, error::CollectionError};

/// A first-in-first-out queue with a fixed capacity and no duplicates.
///
/// # Examples
///
/// ```rust
/// # use registrar_core::collections::bounded_queue::BoundedQueue;
/// # use registrar_core::collections::error::CollectionError;
///
/// let mut queue = BoundedQueue::new(2);
/// queue.enqueue('a').unwrap();
/// queue.enqueue('b').unwrap();
/// assert_eq!(queue.enqueue('c'), Err(CollectionError::CapacityExceeded { capacity: 2 }));
///
/// assert_eq!(queue.dequeue(), Ok('a'));
/// assert_eq!(queue.dequeue(), Ok('b'));
/// assert_eq!(queue.dequeue(), Err(CollectionError::Empty));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedQueue<T> {
    list: BoundedList<T>,
}

impl<T> BoundedQueue<T>
where
    T: PartialEq,
{
    /// Creates an empty queue that can hold at most `capacity` elements.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            list: BoundedList::new(capacity),
        }
    }

    /// Appends `element` at the tail.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` if the queue is full, `Duplicate` if an equal
    /// element is already queued.
    #[inline]
    pub fn enqueue(&mut self, element: T) -> Result<(), CollectionError> {
        self.list.push(element)
    }

    /// Removes and returns the head, the longest-waiting element.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Empty` if there is nothing to dequeue.
    #[inline]
    pub fn dequeue(&mut self) -> Result<T, CollectionError> {
        if self.list.is_empty() {
            return Err(CollectionError::Empty);
        }
        self.list.remove(0)
    }

    /// Returns a reference to the head without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.list.as_slice().first()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns `true` if the queue holds `capacity` elements.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.list.is_full()
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns the declared capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.list.capacity()
    }

    /// Changes the declared capacity.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::CapacityBelowLength` if `capacity < len()`.
    #[inline]
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), CollectionError> {
        self.list.set_capacity(capacity)
    }

    /// Returns `true` if an element equal to `element` is queued.
    #[inline]
    pub fn contains(&self, element: &T) -> bool {
        self.list.contains(element)
    }

    /// Returns the zero-based distance of `element` from the head.
    #[inline]
    pub fn position(&self, element: &T) -> Option<usize> {
        self.list.position(element)
    }

    /// Removes the first element matching `predicate` and returns it.
    ///
    /// The relative order of all other elements is preserved. Returns `None`
    /// and leaves the queue untouched if nothing matches.
    pub fn remove_first<F>(&mut self, predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.list.iter().position(predicate)?;
        self.list.remove(index).ok()
    }

    /// Removes every element but keeps the declared capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator from head to tail.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> std::fmt::Debug for BoundedQueue<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.list.capacity())
            .field("elements", &self.list.as_slice())
            .finish()
    }
}

impl<T> std::fmt::Display for BoundedQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BoundedQueue(len: {}, capacity: {})",
            self.list.len(),
            self.list.capacity()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut q = BoundedQueue::new(4);
        for v in [3, 1, 4, 2] {
            q.enqueue(v).unwrap();
        }
        assert_eq!(q.peek(), Some(&3));
        assert_eq!(q.dequeue(), Ok(3));
        assert_eq!(q.dequeue(), Ok(1));
        q.enqueue(9).unwrap();
        assert_eq!(q.dequeue(), Ok(4));
        assert_eq!(q.dequeue(), Ok(2));
        assert_eq!(q.dequeue(), Ok(9));
        assert!(q.is_empty());
    }

    #[test]
    fn test_dequeue_empty_reports_empty() {
        let mut q: BoundedQueue<u8> = BoundedQueue::new(1);
        assert_eq!(q.dequeue(), Err(CollectionError::Empty));
        assert_eq!(q.peek(), None);
    }

    #[test]
    fn test_enqueue_full_and_duplicate() {
        let mut q = BoundedQueue::new(2);
        q.enqueue("a").unwrap();
        assert_eq!(q.enqueue("a"), Err(CollectionError::Duplicate));
        q.enqueue("b").unwrap();
        assert!(q.is_full());
        assert_eq!(
            q.enqueue("c"),
            Err(CollectionError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn test_set_capacity_below_len_rejected() {
        let mut q = BoundedQueue::new(3);
        q.enqueue(1).unwrap();
        q.enqueue(2).unwrap();
        assert_eq!(
            q.set_capacity(1),
            Err(CollectionError::CapacityBelowLength {
                capacity: 1,
                len: 2
            })
        );
        q.set_capacity(2).unwrap();
        assert_eq!(q.capacity(), 2);
        assert!(q.is_full());
    }

    #[test]
    fn test_remove_first_preserves_order_of_rest() {
        let mut q = BoundedQueue::new(5);
        for v in [10, 20, 30, 40] {
            q.enqueue(v).unwrap();
        }
        assert_eq!(q.remove_first(|&v| v == 30), Some(30));
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![10, 20, 40]);
        assert_eq!(q.remove_first(|&v| v == 99), None);
        assert_eq!(q.len(), 3);
        assert_eq!(q.position(&40), Some(2));
    }

    #[test]
    fn test_display_and_clear() {
        let mut q = BoundedQueue::new(3);
        q.enqueue(1).unwrap();
        assert_eq!(format!("{}", q), "BoundedQueue(len: 1, capacity: 3)");
        q.clear();
        assert!(q.is_empty());
        assert!(!q.contains(&1));
    }

    #[test]
    fn test_debug_and_display_formatting() {
        let mut q = BoundedQueue::new(3);
        q.enqueue('a').unwrap();
        q.enqueue('b').unwrap();
        assert_eq!(
            format!("{:?}", q),
            "BoundedQueue { capacity: 3, elements: ['a', 'b'] }"
        );
        assert_eq!(q.to_string(), "BoundedQueue(len: 2, capacity: 3)");
    }
}
