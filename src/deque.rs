//! Fixed-capacity circular double-ended queue of person indices.
//!
//! This is the solver's work list of unmatched persons. Capacity is set
//! once by [`BoundedDeque::allocate`]; it supports O(1) push/pop at both
//! ends without any heap churn once allocated.

use crate::error::{Error, Result};

/// A fixed-capacity circular buffer of `usize` person indices.
///
/// Re-allocating resets the deque to empty. All mutating operations are
/// O(1) and allocate nothing once `allocate` has run.
#[derive(Debug, Clone)]
pub struct BoundedDeque {
    max_length: usize,
    length: usize,
    begin: usize,
    end: usize,
    container: Vec<usize>,
}

impl BoundedDeque {
    /// Create an empty deque with zero capacity.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_length: 0,
            length: 0,
            begin: 0,
            end: 0,
            container: Vec::new(),
        }
    }

    /// Allocate memory for `size` elements, discarding any previous
    /// contents.
    ///
    /// # Errors
    ///
    /// Never fails in practice (the global allocator aborts rather than
    /// returning an error), but the `Result` is kept so that a capacity
    /// request can be rejected up front; see the `AllocationFailure`
    /// variant's documentation.
    pub fn allocate(&mut self, size: usize) -> Result<()> {
        self.container = Vec::new();
        self.container
            .try_reserve_exact(size)
            .map_err(|e| Error::AllocationFailure(e.to_string()))?;
        self.container.resize(size, 0);
        self.max_length = size;
        self.length = 0;
        self.begin = 0;
        self.end = 0;
        Ok(())
    }

    /// The number of elements currently stored.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Whether the deque currently holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The maximum number of elements this deque can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.max_length
    }

    /// Insert `value` at the front. Silently a no-op if the deque is
    /// already at capacity — the solver guarantees it never overfills.
    pub fn push_front(&mut self, value: usize) {
        if self.max_length == 0 || self.length >= self.max_length {
            return;
        }
        self.begin = if self.begin == 0 {
            self.max_length - 1
        } else {
            self.begin - 1
        };
        if self.length == 0 {
            self.end = self.begin;
        }
        self.container[self.begin] = value;
        self.length += 1;
    }

    /// Insert `value` at the back. Silently a no-op if the deque is
    /// already at capacity.
    pub fn push_back(&mut self, value: usize) {
        if self.max_length == 0 || self.length >= self.max_length {
            return;
        }
        self.end = if self.end == self.max_length - 1 {
            0
        } else {
            self.end + 1
        };
        if self.length == 0 {
            self.begin = self.end;
        }
        self.container[self.end] = value;
        self.length += 1;
    }

    /// Remove and return the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDeque`] if the deque is empty.
    pub fn pop_front(&mut self) -> Result<usize> {
        if self.length == 0 {
            return Err(Error::EmptyDeque);
        }
        let index = self.begin;
        if self.length == 1 {
            self.begin = 0;
            self.end = 0;
        } else {
            self.begin = if self.begin == self.max_length - 1 {
                0
            } else {
                self.begin + 1
            };
        }
        self.length -= 1;
        Ok(self.container[index])
    }

    /// Remove and return the back element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDeque`] if the deque is empty.
    pub fn pop_back(&mut self) -> Result<usize> {
        if self.length == 0 {
            return Err(Error::EmptyDeque);
        }
        let index = self.end;
        if self.length == 1 {
            self.begin = 0;
            self.end = 0;
        } else {
            self.end = if self.end == 0 {
                self.max_length - 1
            } else {
                self.end - 1
            };
        }
        self.length -= 1;
        Ok(self.container[index])
    }

    /// Remove the front element without returning it. No-op if empty.
    pub fn delete_front(&mut self) {
        let _ = self.pop_front();
    }

    /// Remove the back element without returning it. No-op if empty.
    pub fn delete_back(&mut self) {
        let _ = self.pop_back();
    }

    /// Empty the deque without releasing its backing storage.
    pub fn reset(&mut self) {
        self.length = 0;
        self.begin = 0;
        self.end = 0;
    }

    /// Release the backing storage and return to defaults.
    pub fn clear(&mut self) {
        self.container = Vec::new();
        self.max_length = 0;
        self.length = 0;
        self.begin = 0;
        self.end = 0;
    }
}

impl Default for BoundedDeque {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_back_pop_back_is_lifo() {
        let mut dq = BoundedDeque::new();
        dq.allocate(4).unwrap();
        dq.push_back(1);
        dq.push_back(2);
        dq.push_back(3);
        assert_eq!(dq.pop_back().unwrap(), 3);
        assert_eq!(dq.pop_back().unwrap(), 2);
        assert_eq!(dq.pop_back().unwrap(), 1);
        assert!(dq.is_empty());
    }

    #[test]
    fn push_front_pop_front_is_lifo() {
        let mut dq = BoundedDeque::new();
        dq.allocate(4).unwrap();
        dq.push_front(1);
        dq.push_front(2);
        dq.push_front(3);
        assert_eq!(dq.pop_front().unwrap(), 3);
        assert_eq!(dq.pop_front().unwrap(), 2);
        assert_eq!(dq.pop_front().unwrap(), 1);
    }

    #[test]
    fn mixed_front_and_back() {
        let mut dq = BoundedDeque::new();
        dq.allocate(4).unwrap();
        dq.push_back(1);
        dq.push_front(0);
        dq.push_back(2);
        // deque is [0, 1, 2]
        assert_eq!(dq.pop_front().unwrap(), 0);
        assert_eq!(dq.pop_back().unwrap(), 2);
        assert_eq!(dq.pop_front().unwrap(), 1);
        assert!(dq.is_empty());
    }

    #[test]
    fn pop_on_empty_errors() {
        let mut dq = BoundedDeque::new();
        dq.allocate(2).unwrap();
        assert!(matches!(dq.pop_front(), Err(Error::EmptyDeque)));
        assert!(matches!(dq.pop_back(), Err(Error::EmptyDeque)));
    }

    #[test]
    fn push_silently_drops_when_full() {
        let mut dq = BoundedDeque::new();
        dq.allocate(2).unwrap();
        dq.push_back(1);
        dq.push_back(2);
        dq.push_back(3); // dropped, deque stays at capacity 2
        assert_eq!(dq.len(), 2);
        assert_eq!(dq.pop_back().unwrap(), 2);
        assert_eq!(dq.pop_back().unwrap(), 1);
    }

    #[test]
    fn wraps_around_the_circular_buffer() {
        let mut dq = BoundedDeque::new();
        dq.allocate(3).unwrap();
        dq.push_back(1);
        dq.push_back(2);
        dq.push_back(3);
        assert_eq!(dq.pop_front().unwrap(), 1);
        dq.push_back(4); // wraps to index 0 internally
        assert_eq!(dq.pop_front().unwrap(), 2);
        assert_eq!(dq.pop_front().unwrap(), 3);
        assert_eq!(dq.pop_front().unwrap(), 4);
    }

    #[test]
    fn reset_keeps_capacity() {
        let mut dq = BoundedDeque::new();
        dq.allocate(4).unwrap();
        dq.push_back(1);
        dq.push_back(2);
        dq.reset();
        assert!(dq.is_empty());
        assert_eq!(dq.capacity(), 4);
        dq.push_back(5);
        assert_eq!(dq.pop_back().unwrap(), 5);
    }

    #[test]
    fn clear_releases_capacity() {
        let mut dq = BoundedDeque::new();
        dq.allocate(4).unwrap();
        dq.push_back(1);
        dq.clear();
        assert_eq!(dq.capacity(), 0);
        assert!(dq.is_empty());
        dq.push_back(1); // no-op, capacity is zero
        assert!(dq.is_empty());
    }

    #[test]
    fn delete_front_and_back_drop_without_returning() {
        let mut dq = BoundedDeque::new();
        dq.allocate(3).unwrap();
        dq.push_back(1);
        dq.push_back(2);
        dq.push_back(3);
        dq.delete_front();
        dq.delete_back();
        assert_eq!(dq.len(), 1);
        assert_eq!(dq.pop_back().unwrap(), 2);
    }
}
