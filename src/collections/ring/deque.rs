//! `RingDeque`: a growable ring buffer deque.
//!
//! Elements live in a single contiguous buffer whose length is always a power
//! of two. Logical element `i` sits at physical slot `(head + i) & (cap - 1)`,
//! so every positional operation is pure cursor arithmetic. Elements only move
//! when the buffer is resized or when a partially occupied buffer is rotated.
//!
//! Performance Characteristics:
//! - Push/Pop at either end: amortized O(1)
//! - Indexed access: O(1)
//! - Rotation: O(min(|n|, len)), no reallocation
//! - Memory: grows by doubling, shrinks by halving at one-quarter occupancy

use core::fmt;
use core::ops::{Index, IndexMut};

use super::capacity::{
    is_full, min_capacity_for_exponent, should_shrink, wrap_mask, MIN_CAPACITY,
};
use crate::DequeError;

/// A double-ended queue backed by a growable circular buffer.
///
/// Vacated slots hold `None`, so removed values are dropped as soon as they
/// leave the deque rather than lingering in the buffer.
#[derive(Clone)]
pub struct RingDeque<T> {
    /// Ring storage. Empty until the first insertion.
    buffer: Vec<Option<T>>,
    /// Physical index of the logical front.
    head: usize,
    /// Physical index one past the logical back.
    tail: usize,
    /// Number of live elements.
    len: usize,
    /// Floor for shrinking and size of the first allocation.
    min_capacity: usize,
}

impl<T> RingDeque<T> {
    /// Creates an empty deque. Nothing is allocated until the first push.
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            head: 0,
            tail: 0,
            len: 0,
            min_capacity: MIN_CAPACITY,
        }
    }

    /// Creates an empty deque whose minimum capacity is `2^exp`.
    ///
    /// See [`set_min_capacity_exponent`](Self::set_min_capacity_exponent).
    pub const fn with_min_capacity_exponent(exp: u32) -> Self {
        Self {
            buffer: Vec::new(),
            head: 0,
            tail: 0,
            len: 0,
            min_capacity: min_capacity_for_exponent(exp),
        }
    }

    /// Number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing buffer. Always zero or a power of two.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Capacity the deque never shrinks below.
    #[inline(always)]
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Sets the minimum capacity to `2^exp`.
    ///
    /// Values below [`MIN_CAPACITY`] are raised to it. The current buffer is
    /// left alone; the new floor applies to the first allocation and to later
    /// shrink decisions. Raising the floor keeps the deque from bouncing
    /// between sizes when its length swings over a wide range.
    pub fn set_min_capacity_exponent(&mut self, exp: u32) {
        self.min_capacity = min_capacity_for_exponent(exp);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            exponent = exp,
            min_capacity = self.min_capacity,
            "ring deque minimum capacity set"
        );
    }

    #[inline(always)]
    fn mask(&self) -> usize {
        wrap_mask(self.buffer.len())
    }

    #[inline(always)]
    fn next(&self, slot: usize) -> usize {
        (slot + 1) & self.mask()
    }

    #[inline(always)]
    fn prev(&self, slot: usize) -> usize {
        slot.wrapping_sub(1) & self.mask()
    }

    /// Physical slot of logical `index`. Caller guarantees `index < len`.
    #[inline(always)]
    fn physical(&self, index: usize) -> usize {
        (self.head + index) & self.mask()
    }

    fn empty_slots(capacity: usize) -> Vec<Option<T>> {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        slots
    }

    /// Makes room for one more element.
    fn grow_if_full(&mut self) {
        if self.buffer.is_empty() {
            self.buffer = Self::empty_slots(self.min_capacity);
            #[cfg(feature = "tracing")]
            tracing::trace!(capacity = self.min_capacity, "ring deque allocated");
            return;
        }
        if is_full(self.len, self.buffer.len()) {
            self.resize();
        }
    }

    fn shrink_if_excess(&mut self) {
        if should_shrink(self.len, self.buffer.len(), self.min_capacity) {
            self.resize();
        }
    }

    /// Reallocates to exactly twice the current length, unwrapping the ring so
    /// the front lands at slot 0.
    ///
    /// Only called when full (doubling) or at quarter occupancy (halving), so
    /// `2 * len` is always a power of two.
    fn resize(&mut self) {
        let new_capacity = self.len << 1;
        let mut fresh = Vec::with_capacity(new_capacity);
        if self.tail > self.head {
            fresh.extend(self.buffer[self.head..self.tail].iter_mut().map(Option::take));
        } else {
            // Wrapped, or full with head == tail.
            fresh.extend(self.buffer[self.head..].iter_mut().map(Option::take));
            fresh.extend(self.buffer[..self.tail].iter_mut().map(Option::take));
        }
        debug_assert_eq!(fresh.len(), self.len);
        fresh.resize_with(new_capacity, || None);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            old_capacity = self.buffer.len(),
            new_capacity,
            len = self.len,
            "ring deque resized"
        );

        self.buffer = fresh;
        self.head = 0;
        self.tail = self.len;
    }

    /// Appends an element to the back.
    ///
    /// Paired with [`pop_front`](Self::pop_front) this is a FIFO queue; with
    /// [`pop_back`](Self::pop_back) a LIFO stack.
    pub fn push_back(&mut self, value: T) {
        self.grow_if_full();
        self.buffer[self.tail] = Some(value);
        self.tail = self.next(self.tail);
        self.len += 1;
    }

    /// Prepends an element to the front.
    pub fn push_front(&mut self, value: T) {
        self.grow_if_full();
        self.head = self.prev(self.head);
        self.buffer[self.head] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the front element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.buffer[self.head].take();
        self.head = self.next(self.head);
        self.len -= 1;
        self.shrink_if_excess();
        value
    }

    /// Removes and returns the back element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.tail = self.prev(self.tail);
        let value = self.buffer[self.tail].take();
        self.len -= 1;
        self.shrink_if_excess();
        value
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque holds no elements.
    pub fn try_pop_front(&mut self) -> Result<T, DequeError> {
        self.pop_front().ok_or(DequeError::Empty)
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque holds no elements.
    pub fn try_pop_back(&mut self) -> Result<T, DequeError> {
        self.pop_back().ok_or(DequeError::Empty)
    }

    /// Returns a shared reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buffer[self.head].as_ref()
    }

    /// Returns a shared reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buffer[self.prev(self.tail)].as_ref()
    }

    /// Returns an exclusive reference to the front element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        self.buffer[self.head].as_mut()
    }

    /// Returns an exclusive reference to the back element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let back = self.prev(self.tail);
        self.buffer[back].as_mut()
    }

    /// Returns the front element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque holds no elements.
    #[inline]
    pub fn try_front(&self) -> Result<&T, DequeError> {
        self.front().ok_or(DequeError::Empty)
    }

    /// Returns the back element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque holds no elements.
    #[inline]
    pub fn try_back(&self) -> Result<&T, DequeError> {
        self.back().ok_or(DequeError::Empty)
    }

    /// Returns a shared reference to the element at logical `index`, if in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.buffer[self.physical(index)].as_ref()
    }

    /// Returns an exclusive reference to the element at logical `index`, if in bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let slot = self.physical(index);
        self.buffer[slot].as_mut()
    }

    /// Returns the element at logical `index` without removing it.
    ///
    /// `at(0)` is the front and `at(len - 1)` the back. Reading every index
    /// leaves the deque untouched, which is what makes it usable as a
    /// circular log buffer: push new entries at one end, evict the oldest at
    /// the other, and read any entry in between.
    ///
    /// # Errors
    /// Returns [`DequeError::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, DequeError> {
        self.get(index).ok_or(DequeError::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    /// Removes all elements but keeps the current buffer.
    ///
    /// Refilling a cleared deque up to its old capacity allocates nothing.
    pub fn clear(&mut self) {
        let mut slot = self.head;
        for _ in 0..self.len {
            self.buffer[slot] = None;
            slot = self.next(slot);
        }
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Rotates the deque `n` steps front-to-back, or back-to-front when `n`
    /// is negative.
    ///
    /// After `rotate(1)` the old front is the new back. `n` is reduced modulo
    /// the length first, and the deque never resizes while rotating.
    pub fn rotate(&mut self, n: isize) {
        if n >= 0 {
            self.rotate_left(n.unsigned_abs());
        } else {
            self.rotate_right(n.unsigned_abs());
        }
    }

    /// Moves the first `n % len` elements to the back.
    pub fn rotate_left(&mut self, n: usize) {
        if self.len <= 1 {
            return;
        }
        let steps = n % self.len;
        if steps == 0 {
            return;
        }
        let mask = self.mask();
        if self.head == self.tail {
            // Every slot is live: the window just slides.
            self.head = (self.head + steps) & mask;
            self.tail = self.head;
            return;
        }
        for _ in 0..steps {
            self.buffer[self.tail] = self.buffer[self.head].take();
            self.head = (self.head + 1) & mask;
            self.tail = (self.tail + 1) & mask;
        }
    }

    /// Moves the last `n % len` elements to the front.
    pub fn rotate_right(&mut self, n: usize) {
        if self.len <= 1 {
            return;
        }
        let steps = n % self.len;
        if steps == 0 {
            return;
        }
        let mask = self.mask();
        if self.head == self.tail {
            self.head = self.head.wrapping_sub(steps) & mask;
            self.tail = self.head;
            return;
        }
        for _ in 0..steps {
            self.head = self.head.wrapping_sub(1) & mask;
            self.tail = self.tail.wrapping_sub(1) & mask;
            self.buffer[self.head] = self.buffer[self.tail].take();
        }
    }

    /// Live elements in logical order.
    pub(crate) fn ordered(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.buffer[self.physical(i)].as_ref())
    }
}

impl<T> Default for RingDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ordered()).finish()
    }
}

/// Compares logical contents only; capacity and physical layout are ignored.
impl<T: PartialEq> PartialEq for RingDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.ordered().eq(other.ordered())
    }
}

impl<T: Eq> Eq for RingDeque<T> {}

impl<T> Index<usize> for RingDeque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!("index out of range: the len is {} but the index is {index}", self.len),
        }
    }
}

impl<T> IndexMut<usize> for RingDeque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("index out of range: the len is {len} but the index is {index}"),
        }
    }
}

impl<T> FromIterator<T> for RingDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for RingDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}
