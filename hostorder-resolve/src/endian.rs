//! Byte orientation of a host or a wire format

use core::fmt;
use core::str::FromStr;

/// An endian
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Endian {
    /// Little endian, least significant byte first
    Little,
    /// Big endian, most significant byte first
    Big,
}

/// Error returned when parsing a `Endian` using [`from_str`]
///
/// [`from_str`]: Endian::from_str()
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEndianError {}

impl Endian {
    /// Network order is big endian.
    pub const NETWORK: Endian = Endian::Big;

    /// Is it little endian
    pub const fn is_le(self) -> bool {
        matches!(self, Endian::Little)
    }

    /// Is it big endian
    pub const fn is_be(self) -> bool {
        matches!(self, Endian::Big)
    }

    /// The other orientation
    pub const fn opposite(self) -> Self {
        match self {
            Endian::Little => Endian::Big,
            Endian::Big => Endian::Little,
        }
    }

    /// Name as accepted by [`FromStr`] and emitted in `cfg` values
    pub const fn as_str(self) -> &'static str {
        match self {
            Endian::Little => "little",
            Endian::Big => "big",
        }
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endian {
    type Err = ParseEndianError;

    /// Parse a `Endian` from a string.
    /// # Examples
    /// ```rust
    /// use std::str::FromStr;
    /// use hostorder_resolve::Endian;
    /// assert_eq!(FromStr::from_str("little"), Ok(Endian::Little));
    /// assert_eq!(FromStr::from_str("be"), Ok(Endian::Big));
    /// assert!(<Endian as FromStr>::from_str("middle").is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "little" | "le" => Ok(Endian::Little),
            "big" | "be" => Ok(Endian::Big),
            _ => Err(ParseEndianError {}),
        }
    }
}

impl fmt::Display for ParseEndianError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of `little`, `le`, `big`, `be`")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseEndianError {}
