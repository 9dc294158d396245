//! Where a resolved orientation came from

use core::fmt;
use core::str::FromStr;

/// The step of the resolution chain which supplied the orientation
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Source {
    /// `HOSTORDER_LITTLE_ENDIAN` or `HOSTORDER_BIG_ENDIAN` was set by the build invoker
    Override,
    /// The compiler's own `target_endian`
    Builtin,
    /// The architecture component of the target triple
    Architecture,
    /// The target operating system
    Platform,
}

/// Error returned when parsing a `Source` using [`from_str`]
///
/// [`from_str`]: Source::from_str()
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSourceError {}

impl Source {
    /// Detection steps, in the order they are attempted.
    ///
    /// [`Source::Override`] is not a probe: overrides are consulted before any of these.
    pub const PROBES: [Source; 3] = [Source::Builtin, Source::Architecture, Source::Platform];

    /// Short name, used as the `hostorder_source` cfg value
    pub const fn as_str(self) -> &'static str {
        match self {
            Source::Override => "override",
            Source::Builtin => "builtin",
            Source::Architecture => "architecture",
            Source::Platform => "platform",
        }
    }

    /// Human readable description for build diagnostics
    pub const fn describe(self) -> &'static str {
        match self {
            Source::Override => "taking endianness from HOSTORDER_* override",
            Source::Builtin => "taking endianness from built-in target_endian",
            Source::Architecture => "detected endianness from target CPU architecture",
            Source::Platform => "taking endianness from target platform",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = ParseSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "override" => Ok(Source::Override),
            "builtin" => Ok(Source::Builtin),
            "architecture" => Ok(Source::Architecture),
            "platform" => Ok(Source::Platform),
            _ => Err(ParseSourceError {}),
        }
    }
}

impl fmt::Display for ParseSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of `override`, `builtin`, `architecture`, `platform`")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseSourceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for source in [
            Source::Override,
            Source::Builtin,
            Source::Architecture,
            Source::Platform,
        ] {
            assert_eq!(Ok(source), source.as_str().parse());
        }
        assert_eq!(Err(ParseSourceError {}), "header".parse::<Source>());
    }

    #[test]
    fn test_probe_order() {
        assert_eq!(
            [Source::Builtin, Source::Architecture, Source::Platform],
            Source::PROBES
        );
        assert!(!Source::PROBES.contains(&Source::Override));
    }
}
