//! Error type for checked deque access.

use core::fmt;

/// The error type for checked [`RingDeque`](crate::RingDeque) operations.
///
/// A failed call never mutates the deque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    /// The deque holds no elements.
    Empty,
    /// A logical index was not below the deque's length.
    IndexOutOfRange {
        /// The requested logical index.
        index: usize,
        /// The length of the deque at the time of the call.
        len: usize,
    },
}

impl fmt::Display for DequeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("deque is empty"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for deque of length {len}")
            }
        }
    }
}

impl std::error::Error for DequeError {}
