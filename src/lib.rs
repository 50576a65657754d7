//! # `ringdeque` - Growable Ring Buffer Deque
//!
//! A double-ended queue backed by a single circular buffer, with amortized
//! O(1) push and pop at both ends, O(1) indexed access, and rotation that
//! never reallocates.
//!
//! ## Design
//!
//! - **Power-of-two capacity**: the buffer length is always `2^k`, so wrapping
//!   an index is `i & (cap - 1)` rather than a division.
//! - **Lazy allocation**: a new deque owns no memory. The first push allocates
//!   the minimum capacity (16 slots unless raised).
//! - **Grow and shrink**: the buffer doubles when an insertion finds it full
//!   and halves when a removal leaves it exactly one quarter full, never going
//!   below the minimum capacity.
//! - **Eager release**: vacated slots are reset to `None`, so removed values
//!   are dropped at removal time.
//! - **Dedicated rotation**: rotating a full buffer only moves the cursors;
//!   rotating a partially filled one moves `|n|` elements across the gap.
//!
//! ## Use Cases
//!
//! - FIFO queues (`push_back` + `pop_front`)
//! - LIFO stacks (`push_back` + `pop_back`)
//! - Bounded circular logs: push new entries, evict the oldest, and read any
//!   entry in place with [`RingDeque::at`]
//!
//! ## Error Model
//!
//! Every accessor that can fail comes in a checked form. `pop_*`, `front`,
//! `back` and `get` return `Option`; `try_pop_*`, `try_front`, `try_back` and
//! `at` return [`DequeError`]. Indexing with `deque[i]` panics when out of range.
//! A failed call never changes the deque.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events on allocation, resize, and minimum
//!   capacity changes.
//!
//! ## Example
//!
//! ```rust
//! use ringdeque::{DequeError, RingDeque};
//!
//! let mut dq = RingDeque::new();
//! dq.push_back(1);
//! dq.push_back(2);
//! dq.push_back(3);
//! assert_eq!(dq.at(1), Ok(&2));
//!
//! dq.rotate(1);
//! assert_eq!(dq.front(), Some(&2));
//! assert_eq!(dq.back(), Some(&1));
//!
//! dq.clear();
//! assert_eq!(dq.try_pop_front(), Err(DequeError::Empty));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;

pub use collections::{RingDeque, MIN_CAPACITY};
pub use error::DequeError;

// Compile-time assertions for the capacity policy
const _: () = {
    use crate::collections::ring::capacity::min_capacity_for_exponent;

    // Wrapping with a mask requires power-of-two sizes.
    assert!(MIN_CAPACITY.is_power_of_two());
    assert!(min_capacity_for_exponent(0) == MIN_CAPACITY);
    assert!(min_capacity_for_exponent(20) == 1 << 20);

    // An unallocated deque is just a `Vec` header plus four words.
    assert!(
        core::mem::size_of::<RingDeque<u64>>()
            == core::mem::size_of::<Vec<Option<u64>>>() + 4 * core::mem::size_of::<usize>()
    );
};
