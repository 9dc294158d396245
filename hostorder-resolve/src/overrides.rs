#![cfg(feature = "std")]
//! Orientation supplied by the build invoker

use crate::{Endian, ResolveError};

/// Forces little endian when `1`, big endian when `0`
pub const LITTLE_ENDIAN_VAR: &str = "HOSTORDER_LITTLE_ENDIAN";
/// Forces big endian when `1`, little endian when `0`
pub const BIG_ENDIAN_VAR: &str = "HOSTORDER_BIG_ENDIAN";

/// The two override switches, as given
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Overrides {
    /// Parsed `HOSTORDER_LITTLE_ENDIAN`
    pub little: Option<bool>,
    /// Parsed `HOSTORDER_BIG_ENDIAN`
    pub big: Option<bool>,
}

fn parse_switch(var: &'static str, value: &str) -> Result<bool, ResolveError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ResolveError::InvalidOverride {
            var,
            value: value.to_string(),
        }),
    }
}

impl Overrides {
    /// Parse the raw variable contents, an empty value counts as unset
    pub fn parse(little: Option<&str>, big: Option<&str>) -> Result<Self, ResolveError> {
        let switch = |var, value: Option<&str>| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(|v| parse_switch(var, v))
                .transpose()
        };
        Ok(Overrides {
            little: switch(LITTLE_ENDIAN_VAR, little)?,
            big: switch(BIG_ENDIAN_VAR, big)?,
        })
    }

    /// Collapse into one orientation, deriving the missing switch from the given one
    pub fn normalize(self) -> Result<Option<Endian>, ResolveError> {
        let as_endian = |little: bool| if little { Endian::Little } else { Endian::Big };
        match (self.little, self.big) {
            (None, None) => Ok(None),
            (Some(little), None) => Ok(Some(as_endian(little))),
            (None, Some(big)) => Ok(Some(as_endian(!big))),
            (Some(little), Some(big)) if little == !big => Ok(Some(as_endian(little))),
            (Some(little), Some(big)) => Err(ResolveError::ConflictingOverrides { little, big }),
        }
    }
}
