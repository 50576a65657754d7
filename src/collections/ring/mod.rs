//! Ring-buffer collections.
//!
//! - `deque`: the growable [`RingDeque`]
//! - `capacity`: the power-of-two sizing policy shared by its operations

pub mod capacity;
pub mod deque;
mod serde_impl;

pub use capacity::MIN_CAPACITY;
pub use deque::RingDeque;
