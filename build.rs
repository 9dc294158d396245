use std::env;

use hostorder_resolve::target::TRACKED_VARS;
use hostorder_resolve::{Outcome, Resolver, Source, Target};

fn main() {
    #[cfg(feature = "logging")]
    let _ = env_logger::try_init();

    println!("cargo::rerun-if-changed=build.rs");
    for var in TRACKED_VARS {
        println!("cargo::rerun-if-env-changed={var}");
    }
    println!("cargo::rustc-check-cfg=cfg(hostorder_endian, values(\"little\", \"big\"))");
    println!(
        "cargo::rustc-check-cfg=cfg(hostorder_source, values(\"override\", \"builtin\", \"architecture\", \"platform\"))"
    );

    let portable = env::var_os("CARGO_FEATURE_PORTABLE").is_some();
    let diagnostics = env::var_os("CARGO_FEATURE_DIAGNOSTICS").is_some()
        || env::var("HOSTORDER_DEBUG").is_ok_and(|v| !v.is_empty() && v != "0");

    let target = Target::from_env();
    let mut resolver = Resolver::new().portable(portable);
    let outcome = match resolver.resolve(&target) {
        Ok(outcome) => outcome,
        Err(e) => panic!("hostorder: {e}"),
    };

    if diagnostics {
        for step in resolver.trace() {
            let verdict = step.verdict.map_or("inconclusive", |e| e.as_str());
            println!("cargo::warning=hostorder: {}: {}", step.source, verdict);
        }
    }

    match outcome {
        Outcome::Resolved(resolution) => {
            if diagnostics {
                println!(
                    "cargo::warning=hostorder: {} ({})",
                    resolution.source.describe(),
                    resolution.endian
                );
            }
            if resolution.source == Source::Override {
                if let Some(builtin) = target.probe(Source::Builtin) {
                    if builtin != resolution.endian {
                        println!(
                            "cargo::warning=hostorder: override forces {} endian but the compiler targets {} endian",
                            resolution.endian, builtin
                        );
                    }
                }
            }
            println!("cargo::rustc-cfg=hostorder_endian=\"{}\"", resolution.endian);
            println!("cargo::rustc-cfg=hostorder_source=\"{}\"", resolution.source);
        }
        Outcome::Portable => {
            if diagnostics {
                println!("cargo::warning=hostorder: endianness undetermined, using portable conversions");
            }
        }
    }
}
