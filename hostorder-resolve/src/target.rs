#![cfg(feature = "std")]
//! Snapshot of the build environment cargo hands to a build script

use std::env;

use crate::overrides::{BIG_ENDIAN_VAR, LITTLE_ENDIAN_VAR};
use crate::{arch, platform, Endian, Source};

/// Variables a build script should be rerun for
pub const TRACKED_VARS: [&str; 3] = [LITTLE_ENDIAN_VAR, BIG_ENDIAN_VAR, "HOSTORDER_DEBUG"];

/// What is known about the compilation target
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Target {
    /// `CARGO_CFG_TARGET_ENDIAN`
    pub endian: Option<String>,
    /// `TARGET`, the full triple
    pub triple: Option<String>,
    /// `CARGO_CFG_TARGET_OS`
    pub os: Option<String>,
    /// Raw `HOSTORDER_LITTLE_ENDIAN`
    pub little_override: Option<String>,
    /// Raw `HOSTORDER_BIG_ENDIAN`
    pub big_override: Option<String>,
}

impl Target {
    /// Read the target description from the environment of a build script
    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).ok();
        Target {
            endian: var("CARGO_CFG_TARGET_ENDIAN"),
            triple: var("TARGET"),
            os: var("CARGO_CFG_TARGET_OS"),
            little_override: var(LITTLE_ENDIAN_VAR),
            big_override: var(BIG_ENDIAN_VAR),
        }
    }

    /// Set the compiler's `target_endian`
    pub fn with_endian(mut self, endian: &str) -> Self {
        self.endian = Some(endian.to_string());
        self
    }

    /// Set the target triple
    pub fn with_triple(mut self, triple: &str) -> Self {
        self.triple = Some(triple.to_string());
        self
    }

    /// Set the target operating system
    pub fn with_os(mut self, os: &str) -> Self {
        self.os = Some(os.to_string());
        self
    }

    /// Set the raw override switches
    pub fn with_overrides(mut self, little: Option<&str>, big: Option<&str>) -> Self {
        self.little_override = little.map(str::to_string);
        self.big_override = big.map(str::to_string);
        self
    }

    /// Run one detection step.
    ///
    /// `None` means the step is inconclusive for this target.
    /// [`Source::Override`] is never answered here, see [`crate::Overrides`].
    pub fn probe(&self, source: Source) -> Option<Endian> {
        match source {
            Source::Override => None,
            Source::Builtin => self.endian.as_deref().and_then(|e| e.parse().ok()),
            Source::Architecture => self
                .triple
                .as_deref()
                .map(arch::arch_token)
                .and_then(arch::classify),
            Source::Platform => self.os.as_deref().and_then(platform::classify),
        }
    }
}
