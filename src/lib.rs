/*!

# hostorder: host endianness at compile time

The byte order of the compilation target is resolved by the build script and
exposed as constants. Conversions between host order and big endian ("network
order") or little endian wire order are provided for `u16`, `u32` and `u64`.
Each conversion compiles to either a byte swap or nothing; the choice is made
when the crate is built, never at runtime.

The resolution tries, in order, and stops at the first answer:

1. an explicit override, `HOSTORDER_LITTLE_ENDIAN=1|0` or `HOSTORDER_BIG_ENDIAN=1|0`
   in the build environment (setting one implies the other)
2. the compiler's own `target_endian`
3. the architecture of the target triple (`mipsel`, `armebv7r`, `aarch64_be`, ...)
4. the target operating system, for platforms that exist in only one orientation

If nothing answers, the build fails and asks for an override. See the
[hostorder-resolve](hostorder_resolve) crate for the details of each step.

# Example

```rust
use hostorder::prelude::*;

let wire = to_be_u32(0xdead_beef);
assert_eq!([0xde, 0xad, 0xbe, 0xef], wire.to_ne_bytes());
assert_eq!(0xdead_beef, from_be_u32(wire));

if hostorder::LITTLE_ENDIAN {
    assert_eq!(0xadde, to_be_u16(0xdead));
    assert_eq!(0xdead, to_le_u16(0xdead));
} else {
    assert_eq!(0xdead, to_be_u16(0xdead));
    assert_eq!(0xadde, to_le_u16(0xdead));
}
```

Branching on [`LITTLE_ENDIAN`] or [`BIG_ENDIAN`] costs nothing: both are
constants and the untaken branch is removed, yet it is still type checked.

# Features

- `std` (default): `std::error::Error` for the parse errors.
- `portable`: when the orientation cannot be resolved, build anyway and use the
  [portable] conversions, which work on any host. The orientation constants
  are not defined in that case, so code needing only conversions can safely
  turn this on.
- `diagnostics`: print the resolution trace as build warnings. Setting
  `HOSTORDER_DEBUG=1` in the build environment has the same effect.
- `logging`: enable `log` output in the resolver.

## no_std

The crate is `no_std` without the `std` feature.
*/
#![warn(missing_docs)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod convert;
pub mod portable;
pub mod prelude;
pub mod swap;
pub mod transform;

pub use hostorder_resolve::{Endian, ParseEndianError, ParseSourceError, Source};

/// Host orientation
#[cfg(hostorder_endian = "little")]
pub const HOST_ENDIAN: Endian = Endian::Little;

/// Host orientation
#[cfg(hostorder_endian = "big")]
pub const HOST_ENDIAN: Endian = Endian::Big;

/// Is the host little endian
#[cfg(any(hostorder_endian = "little", hostorder_endian = "big"))]
pub const LITTLE_ENDIAN: bool = HOST_ENDIAN.is_le();

/// Is the host big endian
#[cfg(any(hostorder_endian = "little", hostorder_endian = "big"))]
pub const BIG_ENDIAN: bool = !LITTLE_ENDIAN;

/// Host orientation, `None` when only the portable conversions are available
#[cfg(any(hostorder_endian = "little", hostorder_endian = "big"))]
pub const DETECTED: Option<Endian> = Some(HOST_ENDIAN);

/// Host orientation, `None` when only the portable conversions are available
#[cfg(not(any(hostorder_endian = "little", hostorder_endian = "big")))]
pub const DETECTED: Option<Endian> = None;

/// The resolution step which supplied [`HOST_ENDIAN`]
#[cfg(hostorder_source = "override")]
pub const RESOLVED_BY: Source = Source::Override;

/// The resolution step which supplied [`HOST_ENDIAN`]
#[cfg(hostorder_source = "builtin")]
pub const RESOLVED_BY: Source = Source::Builtin;

/// The resolution step which supplied [`HOST_ENDIAN`]
#[cfg(hostorder_source = "architecture")]
pub const RESOLVED_BY: Source = Source::Architecture;

/// The resolution step which supplied [`HOST_ENDIAN`]
#[cfg(hostorder_source = "platform")]
pub const RESOLVED_BY: Source = Source::Platform;
