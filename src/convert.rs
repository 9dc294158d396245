//! Host to wire order conversions
//!
//! Each function body is chosen when the crate is built: a byte swap or the
//! identity, depending on the resolved host orientation. There is no branch
//! at runtime. If the orientation could not be resolved and the `portable`
//! feature is on, the bodies from [`crate::portable`] are used instead.
//!
//! The `network` functions are the big endian ones under another name.

#[cfg(not(any(hostorder_endian = "little", hostorder_endian = "big")))]
use crate::portable;
#[cfg(any(hostorder_endian = "little", hostorder_endian = "big"))]
use crate::swap::{swap_u16, swap_u32, swap_u64};

#[cfg(not(any(
    hostorder_endian = "little",
    hostorder_endian = "big",
    feature = "portable"
)))]
compile_error!(
    "hostorder: host endianness is unknown! please set HOSTORDER_LITTLE_ENDIAN=1 or 0, \
     or enable the `portable` feature"
);

#[cfg(hostorder_endian = "little")]
macro_rules! big_wire {
    ($swap:ident, $portable:ident, $x:expr) => {
        $swap($x)
    };
}

#[cfg(hostorder_endian = "little")]
macro_rules! little_wire {
    ($swap:ident, $portable:ident, $x:expr) => {
        $x
    };
}

#[cfg(hostorder_endian = "big")]
macro_rules! big_wire {
    ($swap:ident, $portable:ident, $x:expr) => {
        $x
    };
}

#[cfg(hostorder_endian = "big")]
macro_rules! little_wire {
    ($swap:ident, $portable:ident, $x:expr) => {
        $swap($x)
    };
}

#[cfg(not(any(hostorder_endian = "little", hostorder_endian = "big")))]
macro_rules! big_wire {
    ($swap:ident, $portable:ident, $x:expr) => {
        portable::$portable($x)
    };
}

#[cfg(not(any(hostorder_endian = "little", hostorder_endian = "big")))]
macro_rules! little_wire {
    ($swap:ident, $portable:ident, $x:expr) => {
        portable::$portable($x)
    };
}

macro_rules! conversions {
    (
        $typ:ty, $swap:ident,
        $to_be:ident, $from_be:ident, $to_le:ident, $from_le:ident,
        $to_network:ident, $from_network:ident
    ) => {
        #[doc = concat!("Host `", stringify!($typ), "` to big endian")]
        #[inline]
        pub const fn $to_be(x: $typ) -> $typ {
            big_wire!($swap, $to_be, x)
        }

        #[doc = concat!("Big endian `", stringify!($typ), "` to host")]
        #[inline]
        pub const fn $from_be(x: $typ) -> $typ {
            big_wire!($swap, $from_be, x)
        }

        #[doc = concat!("Host `", stringify!($typ), "` to little endian")]
        #[inline]
        pub const fn $to_le(x: $typ) -> $typ {
            little_wire!($swap, $to_le, x)
        }

        #[doc = concat!("Little endian `", stringify!($typ), "` to host")]
        #[inline]
        pub const fn $from_le(x: $typ) -> $typ {
            little_wire!($swap, $from_le, x)
        }

        #[doc = concat!("Host `", stringify!($typ), "` to network order, same as [`", stringify!($to_be), "`]")]
        #[inline]
        pub const fn $to_network(x: $typ) -> $typ {
            $to_be(x)
        }

        #[doc = concat!("Network order `", stringify!($typ), "` to host, same as [`", stringify!($from_be), "`]")]
        #[inline]
        pub const fn $from_network(x: $typ) -> $typ {
            $from_be(x)
        }
    };
}

conversions!(
    u16, swap_u16,
    to_be_u16, from_be_u16, to_le_u16, from_le_u16,
    to_network_u16, from_network_u16
);
conversions!(
    u32, swap_u32,
    to_be_u32, from_be_u32, to_le_u32, from_le_u32,
    to_network_u32, from_network_u32
);
conversions!(
    u64, swap_u64,
    to_be_u64, from_be_u64, to_le_u64, from_le_u64,
    to_network_u64, from_network_u64
);
