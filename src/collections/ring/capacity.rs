//! Capacity policy for the ring buffer.
//!
//! Capacities are always powers of two so that wrapping an index is a single
//! bitwise AND: `x % n == x & (n - 1)`.

/// Smallest capacity a [`RingDeque`](super::RingDeque) ever allocates or shrinks to.
pub const MIN_CAPACITY: usize = 16;

/// Converts a capacity exponent into a minimum capacity.
///
/// Returns `2^exp`, raised to [`MIN_CAPACITY`] when smaller. An exponent past
/// the width of `usize` has no representable capacity and also yields the floor.
#[inline]
pub const fn min_capacity_for_exponent(exp: u32) -> usize {
    let requested = match 1usize.checked_shl(exp) {
        Some(cap) => cap,
        None => return MIN_CAPACITY,
    };
    if requested > MIN_CAPACITY {
        requested
    } else {
        MIN_CAPACITY
    }
}

/// Mask for wrapping physical indices into a buffer of `capacity` slots.
///
/// `capacity` must be a power of two (or zero, where the mask is unused).
#[inline(always)]
pub(crate) const fn wrap_mask(capacity: usize) -> usize {
    capacity.wrapping_sub(1)
}

/// `true` when the next insertion does not fit.
#[inline(always)]
pub(crate) const fn is_full(len: usize, capacity: usize) -> bool {
    len == capacity
}

/// `true` when a removal has left the buffer exactly one quarter occupied and
/// halving it would not drop below `min_capacity`.
///
/// The trigger is an exact equality: occupancy must land on the quarter mark.
#[inline(always)]
pub(crate) const fn should_shrink(len: usize, capacity: usize, min_capacity: usize) -> bool {
    capacity > min_capacity && (len << 2) == capacity
}
