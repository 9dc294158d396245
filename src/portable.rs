//! Conversions that do not need to know the host orientation
//!
//! Wire bytes are produced and consumed position by position from the value,
//! then laid into (or read out of) host memory as-is. This is correct on any
//! host, at the cost of a loop where the oriented path is a single swap or
//! nothing. These are the bodies [`crate::convert`] uses when the build
//! could not resolve the orientation and the `portable` feature is on.

/// How a host lays a word out in memory
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Memory {
    /// The machine this code runs on
    Native,
    /// A little endian host
    Little,
    /// A big endian host
    Big,
}

macro_rules! memory_impl {
    ($typ:ty, $store:ident, $load:ident) => {
        impl Memory {
            /// Bytes of `x` as this host stores them
            #[inline]
            pub const fn $store(self, x: $typ) -> [u8; core::mem::size_of::<$typ>()] {
                match self {
                    Memory::Native => x.to_ne_bytes(),
                    Memory::Little => x.to_le_bytes(),
                    Memory::Big => x.to_be_bytes(),
                }
            }

            /// Word this host holds when its memory contains `bytes`
            #[inline]
            pub const fn $load(self, bytes: [u8; core::mem::size_of::<$typ>()]) -> $typ {
                match self {
                    Memory::Native => <$typ>::from_ne_bytes(bytes),
                    Memory::Little => <$typ>::from_le_bytes(bytes),
                    Memory::Big => <$typ>::from_be_bytes(bytes),
                }
            }
        }
    };
}

memory_impl!(u16, store_u16, load_u16);
memory_impl!(u32, store_u32, load_u32);
memory_impl!(u64, store_u64, load_u64);

/// Most significant byte at position 0
const fn store_be<const N: usize>(mut x: u64) -> [u8; N] {
    let mut out = [0u8; N];
    let mut i = N;
    while i > 0 {
        i -= 1;
        out[i] = x as u8;
        x >>= 8;
    }
    out
}

const fn load_be<const N: usize>(bytes: [u8; N]) -> u64 {
    let mut x = 0u64;
    let mut i = 0;
    while i < N {
        x = (x << 8) | bytes[i] as u64;
        i += 1;
    }
    x
}

/// Least significant byte at position 0
const fn store_le<const N: usize>(mut x: u64) -> [u8; N] {
    let mut out = [0u8; N];
    let mut i = 0;
    while i < N {
        out[i] = x as u8;
        x >>= 8;
        i += 1;
    }
    out
}

const fn load_le<const N: usize>(bytes: [u8; N]) -> u64 {
    let mut x = 0u64;
    let mut i = N;
    while i > 0 {
        i -= 1;
        x = (x << 8) | bytes[i] as u64;
    }
    x
}

macro_rules! portable_impl {
    (
        $typ:ty, $store:ident, $load:ident,
        $to_be_in:ident, $from_be_in:ident, $to_le_in:ident, $from_le_in:ident,
        $to_be:ident, $from_be:ident, $to_le:ident, $from_le:ident
    ) => {
        #[doc = concat!("Host `", stringify!($typ), "` to big endian, on a host with `memory`")]
        #[inline]
        pub const fn $to_be_in(memory: Memory, x: $typ) -> $typ {
            memory.$load(store_be(x as u64))
        }

        #[doc = concat!("Big endian `", stringify!($typ), "` to host, on a host with `memory`")]
        #[inline]
        pub const fn $from_be_in(memory: Memory, x: $typ) -> $typ {
            load_be(memory.$store(x)) as $typ
        }

        #[doc = concat!("Host `", stringify!($typ), "` to little endian, on a host with `memory`")]
        #[inline]
        pub const fn $to_le_in(memory: Memory, x: $typ) -> $typ {
            memory.$load(store_le(x as u64))
        }

        #[doc = concat!("Little endian `", stringify!($typ), "` to host, on a host with `memory`")]
        #[inline]
        pub const fn $from_le_in(memory: Memory, x: $typ) -> $typ {
            load_le(memory.$store(x)) as $typ
        }

        #[doc = concat!("Host `", stringify!($typ), "` to big endian")]
        #[inline]
        pub const fn $to_be(x: $typ) -> $typ {
            $to_be_in(Memory::Native, x)
        }

        #[doc = concat!("Big endian `", stringify!($typ), "` to host")]
        #[inline]
        pub const fn $from_be(x: $typ) -> $typ {
            $from_be_in(Memory::Native, x)
        }

        #[doc = concat!("Host `", stringify!($typ), "` to little endian")]
        #[inline]
        pub const fn $to_le(x: $typ) -> $typ {
            $to_le_in(Memory::Native, x)
        }

        #[doc = concat!("Little endian `", stringify!($typ), "` to host")]
        #[inline]
        pub const fn $from_le(x: $typ) -> $typ {
            $from_le_in(Memory::Native, x)
        }
    };
}

portable_impl!(
    u16, store_u16, load_u16,
    to_be_u16_in, from_be_u16_in, to_le_u16_in, from_le_u16_in,
    to_be_u16, from_be_u16, to_le_u16, from_le_u16
);
portable_impl!(
    u32, store_u32, load_u32,
    to_be_u32_in, from_be_u32_in, to_le_u32_in, from_le_u32_in,
    to_be_u32, from_be_u32, to_le_u32, from_le_u32
);
portable_impl!(
    u64, store_u64, load_u64,
    to_be_u64_in, from_be_u64_in, to_le_u64_in, from_le_u64_in,
    to_be_u64, from_be_u64, to_le_u64, from_le_u64
);
