//! Operating systems whose every supported target shares one byte order

use crate::Endian;

/// Orientation implied by `target_os`, if the platform only exists in one
pub fn classify(os: &str) -> Option<Endian> {
    match os {
        "windows" | "macos" | "ios" | "tvos" | "watchos" | "visionos" | "android" | "fuchsia"
        | "emscripten" | "wasi" | "uefi" | "horizon" | "psp" | "vita" => Some(Endian::Little),
        "aix" => Some(Endian::Big),
        _ => None,
    }
}
