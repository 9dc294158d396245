/*!
Build-time endianness resolution for [hostorder](https://crates.io/crates/hostorder).

The orientation of the compilation target is determined by a chain of steps,
each either answering or passing to the next:

1. `HOSTORDER_LITTLE_ENDIAN` / `HOSTORDER_BIG_ENDIAN`, when the build invoker sets one
2. the compiler's own `target_endian`
3. the architecture component of the target triple, against two allowlists
4. the target operating system, for platforms that only exist in one orientation

Without the `std` feature only the shared types ([`Endian`], [`Source`]) are
available, so the runtime crate can depend on them from `no_std` code.

```rust
# #[cfg(feature = "std")]
# fn main() {
use hostorder_resolve::{Endian, Outcome, Resolver, Source, Target};

let target = Target::default().with_triple("mipsel-unknown-linux-gnu");
let outcome = Resolver::new().resolve(&target).unwrap();
match outcome {
    Outcome::Resolved(r) => {
        assert_eq!(Endian::Little, r.endian);
        assert_eq!(Source::Architecture, r.source);
    }
    Outcome::Portable => unreachable!(),
}
# }
# #[cfg(not(feature = "std"))]
# fn main() {}
```
*/
#![warn(missing_docs)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod arch;
mod endian;
pub mod platform;
mod source;

pub mod error;
pub mod overrides;
pub mod resolver;
pub mod target;

pub use crate::endian::{Endian, ParseEndianError};
pub use crate::source::{ParseSourceError, Source};

#[cfg(feature = "std")]
pub use crate::error::ResolveError;
#[cfg(feature = "std")]
pub use crate::overrides::Overrides;
#[cfg(feature = "std")]
pub use crate::resolver::{Outcome, Resolution, Resolver, Step};
#[cfg(feature = "std")]
pub use crate::target::Target;
