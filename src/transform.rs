//! Which transform a conversion needs, given host orientation and direction
//!
//! A conversion is either the identity or a full byte swap. The choice only
//! depends on whether the host stores words in the wire order.

use crate::swap::{swap_u16, swap_u32, swap_u64};
use crate::Endian;

/// Direction of a conversion between host and wire order
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Host to big endian
    ToBig,
    /// Big endian to host
    FromBig,
    /// Host to little endian
    ToLittle,
    /// Little endian to host
    FromLittle,
}

impl Direction {
    /// Every direction
    pub const ALL: [Direction; 4] = [
        Direction::ToBig,
        Direction::FromBig,
        Direction::ToLittle,
        Direction::FromLittle,
    ];

    /// Wire order on the far side of the conversion
    pub const fn wire(self) -> Endian {
        match self {
            Direction::ToBig | Direction::FromBig => Endian::Big,
            Direction::ToLittle | Direction::FromLittle => Endian::Little,
        }
    }
}

/// A conversion body
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Transform {
    /// Host storage already matches the wire
    Identity,
    /// Host storage is the reverse of the wire
    Swap,
}

impl Transform {
    /// Transform between a host and a wire order, in either direction
    pub const fn between(host: Endian, wire: Endian) -> Self {
        match (host, wire) {
            (Endian::Little, Endian::Little) | (Endian::Big, Endian::Big) => Transform::Identity,
            (Endian::Little, Endian::Big) | (Endian::Big, Endian::Little) => Transform::Swap,
        }
    }

    /// Transform a `host` needs for `direction`
    pub const fn select(host: Endian, direction: Direction) -> Self {
        Self::between(host, direction.wire())
    }

    /// Apply to a 16 bit word
    #[inline]
    pub const fn apply_u16(self, x: u16) -> u16 {
        match self {
            Transform::Identity => x,
            Transform::Swap => swap_u16(x),
        }
    }

    /// Apply to a 32 bit word
    #[inline]
    pub const fn apply_u32(self, x: u32) -> u32 {
        match self {
            Transform::Identity => x,
            Transform::Swap => swap_u32(x),
        }
    }

    /// Apply to a 64 bit word
    #[inline]
    pub const fn apply_u64(self, x: u64) -> u64 {
        match self {
            Transform::Identity => x,
            Transform::Swap => swap_u64(x),
        }
    }
}
