//! Collections.
//!
//! Collections are organized by storage strategy:
//! - `ring`: power-of-two circular buffers (deques, log buffers)

pub mod ring;

// Re-export commonly used types from submodules
pub use ring::{RingDeque, MIN_CAPACITY};
