//! Byte reversal, independent of host orientation
//!
//! Every swap is its own inverse.

/// Exchange the two bytes of `x`
#[inline]
pub const fn swap_u16(x: u16) -> u16 {
    (x << 8) | (x >> 8)
}

/// Reverse the four bytes of `x`
#[inline]
pub const fn swap_u32(x: u32) -> u32 {
    (x >> 24) | ((x >> 8) & 0xff00) | ((x << 8) & 0x00ff_0000) | (x << 24)
}

/// Reverse the eight bytes of `x`
///
/// The low half, swapped, becomes the high half and the high half, swapped,
/// becomes the low half.
#[inline]
pub const fn swap_u64(x: u64) -> u64 {
    ((swap_u32(x as u32) as u64) << 32) | (swap_u32((x >> 32) as u32) as u64)
}
