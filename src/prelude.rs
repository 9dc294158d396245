/*! Crate prelude

[What is a prelude?](std::prelude)
*/
pub use crate::convert::*;
pub use crate::swap::{swap_u16, swap_u32, swap_u64};
pub use crate::Endian;
