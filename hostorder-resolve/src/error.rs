#![cfg(feature = "std")]

use crate::overrides::{BIG_ENDIAN_VAR, LITTLE_ENDIAN_VAR};

/// Resolution errors
#[derive(Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// No step of the chain could determine the orientation and portable mode is off
    Undetermined {
        /// Target triple, if cargo provided one
        target: Option<String>,
    },
    /// Both overrides were given and they do not describe one orientation
    ConflictingOverrides {
        /// Value of the little endian override
        little: bool,
        /// Value of the big endian override
        big: bool,
    },
    /// An override variable holds something other than a boolean
    InvalidOverride {
        /// Name of the variable
        var: &'static str,
        /// Its contents
        value: String,
    },
}

impl core::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            ResolveError::Undetermined { ref target } => {
                write!(
                    f,
                    "could not detect endianness for target `{}`! please set {}=1 or 0 \
                     (or {}), or enable the `portable` feature",
                    target.as_deref().unwrap_or("unknown"),
                    LITTLE_ENDIAN_VAR,
                    BIG_ENDIAN_VAR,
                )
            }
            ResolveError::ConflictingOverrides { little, big } => write!(
                f,
                "conflicting overrides: {}={} and {}={}",
                LITTLE_ENDIAN_VAR, little as u8, BIG_ENDIAN_VAR, big as u8
            ),
            ResolveError::InvalidOverride { var, ref value } => {
                write!(f, "invalid value for {}: `{}`, expected 1 or 0", var, value)
            }
        }
    }
}

impl std::error::Error for ResolveError {}
