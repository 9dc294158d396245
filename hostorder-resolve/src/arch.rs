//! Architecture allowlists
//!
//! The architecture component of a target triple (`mipsel`, `armebv7r`,
//! `aarch64_be`, ...) is matched against a little endian allowlist first,
//! then a big endian one. The lists must stay disjoint.

use crate::Endian;

/// One allowlist entry
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// The whole token
    Exact(&'static str),
    /// Any token starting with this
    Prefix(&'static str),
}

impl Pattern {
    /// Does `arch` match this entry
    pub fn matches(self, arch: &str) -> bool {
        match self {
            Pattern::Exact(name) => arch == name,
            Pattern::Prefix(prefix) => arch.starts_with(prefix),
        }
    }
}

/// Architectures which are always little endian
pub const LITTLE: &[Pattern] = &[
    Pattern::Exact("x86"),
    Pattern::Exact("x86_64"),
    Pattern::Exact("x86_64h"),
    Pattern::Exact("i386"),
    Pattern::Exact("i486"),
    Pattern::Exact("i586"),
    Pattern::Exact("i686"),
    Pattern::Exact("aarch64"),
    Pattern::Prefix("arm64"),
    Pattern::Exact("arm"),
    Pattern::Prefix("armv"),
    Pattern::Prefix("thumbv"),
    Pattern::Exact("mipsel"),
    Pattern::Exact("mips64el"),
    Pattern::Exact("mipsisa32r6el"),
    Pattern::Exact("mipsisa64r6el"),
    Pattern::Exact("powerpc64le"),
    Pattern::Prefix("riscv"),
    Pattern::Prefix("wasm"),
    Pattern::Prefix("loongarch"),
    Pattern::Exact("bpfel"),
    Pattern::Exact("hexagon"),
    Pattern::Prefix("nvptx"),
    Pattern::Exact("avr"),
    Pattern::Exact("msp430"),
    Pattern::Exact("xtensa"),
    Pattern::Exact("csky"),
];

/// Architectures which are always big endian
pub const BIG: &[Pattern] = &[
    Pattern::Exact("armeb"),
    Pattern::Prefix("armebv"),
    Pattern::Prefix("thumbeb"),
    Pattern::Exact("aarch64_be"),
    Pattern::Exact("mips"),
    Pattern::Exact("mips64"),
    Pattern::Exact("mipsisa32r6"),
    Pattern::Exact("mipsisa64r6"),
    Pattern::Exact("powerpc"),
    Pattern::Exact("powerpc64"),
    Pattern::Prefix("sparc"),
    Pattern::Exact("s390x"),
    Pattern::Exact("m68k"),
    Pattern::Exact("bpfeb"),
];

/// Architecture component of a target triple
pub fn arch_token(triple: &str) -> &str {
    triple.split('-').next().unwrap_or(triple)
}

/// Look `arch` up in the allowlists, little endian first
pub fn classify(arch: &str) -> Option<Endian> {
    if LITTLE.iter().any(|p| p.matches(arch)) {
        Some(Endian::Little)
    } else if BIG.iter().any(|p| p.matches(arch)) {
        Some(Endian::Big)
    } else {
        None
    }
}
