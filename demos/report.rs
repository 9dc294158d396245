//! Print which orientation this program was compiled for
//!
//! `RUST_LOG=debug cargo run --example report`

use hostorder::prelude::*;

fn main() {
    env_logger::init();

    let Some(host) = hostorder::DETECTED else {
        println!("this program was compiled without a known endianness, using portable conversions");
        log::debug!("to_be_u32(0xdeadbeef) = {:02x?}", to_be_u32(0xdead_beef).to_ne_bytes());
        return;
    };

    println!("this program was compiled for {host} endian");
    #[cfg(any(hostorder_endian = "little", hostorder_endian = "big"))]
    log::debug!("resolved by: {}", hostorder::RESOLVED_BY.describe());

    if host.is_le() {
        println!("yes, the endianness is little!");
    } else {
        println!("yes, the endianness is BIG!");
    }

    let x = 0xdead_beef_cafe_babe_u64;
    log::info!("host     {:02x?}", x.to_ne_bytes());
    log::info!("big      {:02x?}", to_be_u64(x).to_ne_bytes());
    log::info!("little   {:02x?}", to_le_u64(x).to_ne_bytes());
    log::info!("swapped  {:02x?}", swap_u64(x).to_ne_bytes());
}
