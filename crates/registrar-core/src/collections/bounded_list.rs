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

//! Fixed-capacity, duplicate-free sequence.
//!
//! `BoundedList` is the substrate for rosters and waitlists. It behaves like
//! a `Vec` whose length may never exceed a declared capacity and whose
//! elements are pairwise distinct under `PartialEq`. Insertion and removal
//! shift later elements to preserve order, and positional access is by
//! index. Capacity may be raised or lowered at runtime, but never below the
//! number of live elements: shrinking is rejected rather than truncating.
//!
//! All mutating operations validate before touching storage, so a returned
//! `CollectionError` guarantees the list is unchanged.

use crate::collections::error::CollectionError;

/// An ordered, position-addressable list with a fixed capacity that rejects
/// duplicate elements.
///
/// # Examples
///
/// ```rust
/// # use registrar_core::collections::bounded_list::BoundedList;
/// # use registrar_core::collections::error::CollectionError;
///
/// let mut list = BoundedList::new(2);
/// list.push("ada").unwrap();
/// list.add(0, "grace").unwrap();
/// assert_eq!(list.as_slice(), &["grace", "ada"]);
///
/// assert_eq!(list.push("alan"), Err(CollectionError::CapacityExceeded { capacity: 2 }));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedList<T> {
    elements: Vec<T>,
    capacity: usize,
}

impl<T> BoundedList<T> {
    /// Creates an empty list that can hold at most `capacity` elements.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the declared capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if the list holds `capacity` elements.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.elements.len() >= self.capacity
    }

    /// Returns the number of elements that can still be inserted.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.elements.len())
    }

    /// Removes every element but keeps the declared capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns the stored elements in order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the stored elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> BoundedList<T>
where
    T: PartialEq,
{

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::IndexOutOfBounds` if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.elements
            .get(index)
            .ok_or(CollectionError::IndexOutOfBounds {
                index,
                len: self.elements.len(),
            })
    }

    /// Inserts `element` at `index`, shifting all later elements one
    /// position towards the tail.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` if `index > len()`.
    /// - `CapacityExceeded` if the list is full.
    /// - `Duplicate` if an equal element is already stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use registrar_core::collections::bounded_list::BoundedList;
    /// # use registrar_core::collections::error::CollectionError;
    ///
    /// let mut list = BoundedList::new(4);
    /// list.add(0, 1).unwrap();
    /// list.add(1, 3).unwrap();
    /// list.add(1, 2).unwrap();
    /// assert_eq!(list.as_slice(), &[1, 2, 3]);
    /// assert_eq!(list.add(0, 2), Err(CollectionError::Duplicate));
    /// ```
    pub fn add(&mut self, index: usize, element: T) -> Result<(), CollectionError> {
        let len = self.elements.len();
        if index > len {
            return Err(CollectionError::IndexOutOfBounds { index, len });
        }
        if self.is_full() {
            return Err(CollectionError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if self.contains(&element) {
            return Err(CollectionError::Duplicate);
        }

        self.elements.insert(index, element);
        Ok(())
    }

    /// Appends `element` at the tail. Equivalent to `add(len(), element)`.
    #[inline]
    pub fn push(&mut self, element: T) -> Result<(), CollectionError> {
        self.add(self.elements.len(), element)
    }

    /// Removes and returns the element at `index`, shifting all later
    /// elements one position towards the head.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::IndexOutOfBounds` if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
        let len = self.elements.len();
        if index >= len {
            return Err(CollectionError::IndexOutOfBounds { index, len });
        }
        Ok(self.elements.remove(index))
    }

    /// Replaces the element at `index` with `element` and returns the
    /// previous value.
    ///
    /// Replacing an element with an equal value at the same position is
    /// allowed; equality with any *other* stored element is rejected.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` if `index >= len()`.
    /// - `Duplicate` if `element` equals an element at another position.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        let len = self.elements.len();
        if index >= len {
            return Err(CollectionError::IndexOutOfBounds { index, len });
        }
        let clashes = self
            .elements
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && *existing == element);
        if clashes {
            return Err(CollectionError::Duplicate);
        }

        Ok(std::mem::replace(&mut self.elements[index], element))
    }

    /// Changes the declared capacity.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::CapacityBelowLength` if `capacity < len()`;
    /// live elements are never truncated.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), CollectionError> {
        let len = self.elements.len();
        if capacity < len {
            return Err(CollectionError::CapacityBelowLength { capacity, len });
        }
        self.capacity = capacity;
        Ok(())
    }

    /// Returns `true` if an element equal to `element` is stored.
    #[inline]
    pub fn contains(&self, element: &T) -> bool {
        self.elements.iter().any(|e| e == element)
    }

    /// Returns the position of the first element equal to `element`.
    #[inline]
    pub fn position(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == element)
    }
}

impl<'a, T> IntoIterator for &'a BoundedList<T>
where
    T: PartialEq,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> std::fmt::Debug for BoundedList<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedList")
            .field("capacity", &self.capacity)
            .field("elements", &self.elements)
            .finish()
    }
}

impl<T> std::fmt::Display for BoundedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BoundedList(len: {}, capacity: {})",
            self.elements.len(),
            self.capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn filled(capacity: usize, values: &[u32]) -> BoundedList<u32> {
        let mut list = BoundedList::new(capacity);
        for &v in values {
            list.push(v).unwrap();
        }
        list
    }

    #[derive(Debug)]
    struct Opaque(u8);

    #[test]
    fn test_accessors_do_not_require_equality() {
        let list: BoundedList<Opaque> = BoundedList::new(4);
        assert_eq!(list.capacity(), 4);
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.remaining(), 4);
        assert!(list.as_slice().is_empty());
        assert_eq!(list.iter().map(|o| o.0).sum::<u8>(), 0);
        assert_eq!(list.to_string(), "BoundedList(len: 0, capacity: 4)");
        assert_eq!(format!("{:?}", list), "BoundedList { capacity: 4, elements: [] }");
    }

    #[test]
    fn test_new_list_is_empty() {
        let list: BoundedList<u32> = BoundedList::new(3);
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 3);
        assert_eq!(list.remaining(), 3);
        assert!(list.is_empty());
        assert!(!list.is_full());
        assert_eq!(format!("{}", list), "BoundedList(len: 0, capacity: 3)");
    }

    #[test]
    fn test_add_front_middle_back_preserves_order() {
        let mut list = BoundedList::new(5);
        list.add(0, 20).unwrap();
        list.add(0, 10).unwrap();
        list.add(2, 40).unwrap();
        list.add(2, 30).unwrap();
        assert_eq!(list.as_slice(), &[10, 20, 30, 40]);
    }

    #[test]
    fn test_add_rejects_out_of_range_index() {
        let mut list = filled(5, &[1, 2]);
        assert_eq!(
            list.add(3, 9),
            Err(CollectionError::IndexOutOfBounds { index: 3, len: 2 })
        );
        assert_eq!(list.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_add_rejects_when_full() {
        let mut list = filled(2, &[1, 2]);
        assert!(list.is_full());
        assert_eq!(
            list.push(3),
            Err(CollectionError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(list.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut list = filled(5, &[1, 2]);
        assert_eq!(list.push(1), Err(CollectionError::Duplicate));
        assert_eq!(list.add(0, 2), Err(CollectionError::Duplicate));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_get_in_and_out_of_range() {
        let list = filled(3, &[7, 8]);
        assert_eq!(list.get(0), Ok(&7));
        assert_eq!(list.get(1), Ok(&8));
        assert_eq!(
            list.get(2),
            Err(CollectionError::IndexOutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_remove_shifts_elements() {
        let mut list = filled(4, &[1, 2, 3, 4]);
        assert_eq!(list.remove(1), Ok(2));
        assert_eq!(list.as_slice(), &[1, 3, 4]);
        assert_eq!(list.remove(2), Ok(4));
        assert_eq!(list.remove(0), Ok(1));
        assert_eq!(list.as_slice(), &[3]);
        assert_eq!(
            list.remove(1),
            Err(CollectionError::IndexOutOfBounds { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_remove_frees_capacity() {
        let mut list = filled(2, &[1, 2]);
        list.remove(0).unwrap();
        assert!(list.push(3).is_ok());
        assert_eq!(list.as_slice(), &[2, 3]);
    }

    #[test]
    fn test_set_replaces_and_returns_old() {
        let mut list = filled(3, &[1, 2, 3]);
        assert_eq!(list.set(1, 5), Ok(2));
        assert_eq!(list.as_slice(), &[1, 5, 3]);
    }

    #[test]
    fn test_set_same_value_at_same_position_is_allowed() {
        let mut list = filled(3, &[1, 2, 3]);
        assert_eq!(list.set(2, 3), Ok(3));
    }

    #[test]
    fn test_set_rejects_duplicate_of_other_element() {
        let mut list = filled(3, &[1, 2, 3]);
        assert_eq!(list.set(0, 3), Err(CollectionError::Duplicate));
        assert_eq!(
            list.set(3, 9),
            Err(CollectionError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(list.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_set_capacity_grows_and_rejects_shrink_below_len() {
        let mut list = filled(3, &[1, 2, 3]);
        assert_eq!(
            list.set_capacity(2),
            Err(CollectionError::CapacityBelowLength {
                capacity: 2,
                len: 3
            })
        );
        assert_eq!(list.capacity(), 3);

        list.set_capacity(3).unwrap();
        list.set_capacity(5).unwrap();
        assert_eq!(list.capacity(), 5);
        list.push(4).unwrap();
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_contains_position_and_clear() {
        let mut list = filled(4, &[4, 5, 6]);
        assert!(list.contains(&5));
        assert_eq!(list.position(&6), Some(2));
        assert_eq!(list.position(&9), None);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 4);
    }

    #[test]
    fn test_iteration_in_order() {
        let list = filled(3, &[3, 1, 2]);
        let seen: Vec<u32> = (&list).into_iter().copied().collect();
        assert_eq!(seen, vec![3, 1, 2]);
    }

    #[test]
    fn test_random_operations_keep_bounds_and_uniqueness() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut list = BoundedList::new(8);

        for _ in 0..2_000 {
            let len = list.len();
            match rng.random_range(0..3) {
                0 => {
                    let index = rng.random_range(0..=len + 1);
                    let _ = list.add(index, rng.random_range(0..16u32));
                }
                1 => {
                    let index = rng.random_range(0..=len);
                    let _ = list.remove(index);
                }
                _ => {
                    let index = rng.random_range(0..=len);
                    let _ = list.set(index, rng.random_range(0..16u32));
                }
            }

            assert!(list.len() <= list.capacity());
            let slice = list.as_slice();
            for (i, a) in slice.iter().enumerate() {
                assert!(slice[i + 1..].iter().all(|b| b != a));
            }
        }
    }
}
