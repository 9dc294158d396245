use hostorder::prelude::*;

// everything is usable where only constants are allowed
const SWAPPED: u64 = swap_u64(0xdead_beef_cafe_babe);
const WIRE: u32 = to_network_u32(0xdead_beef);
const BACK: u16 = from_le_u16(to_le_u16(0xdead));

const _: () = assert!(SWAPPED == 0xbeba_feca_efbe_adde);
const _: () = assert!(from_network_u32(WIRE) == 0xdead_beef);
const _: () = assert!(BACK == 0xdead);

fn main() {
    let buf = [0u8; 4];
    assert_eq!(0, from_be_u32(u32::from_ne_bytes(buf)));
}
