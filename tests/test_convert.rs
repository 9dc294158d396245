//! Conversions against the byte layouts a wire format expects

use assert_hex::assert_eq_hex;
use hexlit::hex;
use hostorder::prelude::*;
use rstest::*;

#[rstest(input, be, le,
    case(0xdead, hex!("DEAD"), hex!("ADDE")),
    case(0x0001, hex!("0001"), hex!("0100")),
    case(0xffff, hex!("FFFF"), hex!("FFFF")),
)]
fn test_u16_layout(input: u16, be: [u8; 2], le: [u8; 2]) {
    assert_eq!(be, to_be_u16(input).to_ne_bytes());
    assert_eq!(le, to_le_u16(input).to_ne_bytes());
    assert_eq_hex!(input, from_be_u16(u16::from_ne_bytes(be)));
    assert_eq_hex!(input, from_le_u16(u16::from_ne_bytes(le)));
}

#[rstest(input, be, le,
    case(0xdead_beef, hex!("DEADBEEF"), hex!("EFBEADDE")),
    case(0x0000_0001, hex!("00000001"), hex!("01000000")),
)]
fn test_u32_layout(input: u32, be: [u8; 4], le: [u8; 4]) {
    assert_eq!(be, to_be_u32(input).to_ne_bytes());
    assert_eq!(le, to_le_u32(input).to_ne_bytes());
    assert_eq_hex!(input, from_be_u32(u32::from_ne_bytes(be)));
    assert_eq_hex!(input, from_le_u32(u32::from_ne_bytes(le)));
}

#[rstest(input, be, le,
    case(0xdead_beef_cafe_babe, hex!("DEADBEEFCAFEBABE"), hex!("BEBAFECAEFBEADDE")),
    case(0x0000_0000_0000_0001, hex!("0000000000000001"), hex!("0100000000000000")),
)]
fn test_u64_layout(input: u64, be: [u8; 8], le: [u8; 8]) {
    assert_eq!(be, to_be_u64(input).to_ne_bytes());
    assert_eq!(le, to_le_u64(input).to_ne_bytes());
    assert_eq_hex!(input, from_be_u64(u64::from_ne_bytes(be)));
    assert_eq_hex!(input, from_le_u64(u64::from_ne_bytes(le)));
}

#[test]
fn test_round_trip() {
    for x in [0u64, 1, 0xdead_beef_cafe_babe, u64::MAX, 0x8000_0000_0000_0000] {
        assert_eq!(x, from_be_u64(to_be_u64(x)));
        assert_eq!(x, from_le_u64(to_le_u64(x)));
        assert_eq!(x, from_network_u64(to_network_u64(x)));

        let x = x as u32;
        assert_eq!(x, from_be_u32(to_be_u32(x)));
        assert_eq!(x, from_le_u32(to_le_u32(x)));

        let x = x as u16;
        assert_eq!(x, from_be_u16(to_be_u16(x)));
        assert_eq!(x, from_le_u16(to_le_u16(x)));
    }
}

#[test]
fn test_big_is_swapped_little() {
    for x in 0..=u16::MAX {
        assert_eq!(to_be_u16(x), swap_u16(to_le_u16(x)));
        assert_eq!(from_be_u16(x), swap_u16(from_le_u16(x)));
    }
    for x in [0u32, 0xdead_beef, 0x0102_0304, u32::MAX] {
        assert_eq_hex!(to_be_u32(x), swap_u32(to_le_u32(x)));
    }
    for x in [0u64, 0xdead_beef_cafe_babe, 0x0102_0304_0506_0708, u64::MAX] {
        assert_eq_hex!(to_be_u64(x), swap_u64(to_le_u64(x)));
    }
}

#[test]
fn test_network_alias() {
    for x in 0..=u16::MAX {
        assert_eq!(to_be_u16(x), to_network_u16(x));
        assert_eq!(from_be_u16(x), from_network_u16(x));
    }
    for x in [0u32, 0xdead_beef, u32::MAX] {
        assert_eq!(to_be_u32(x), to_network_u32(x));
        assert_eq!(from_be_u32(x), from_network_u32(x));
    }
    for x in [0u64, 0xdead_beef_cafe_babe, u64::MAX] {
        assert_eq!(to_be_u64(x), to_network_u64(x));
        assert_eq!(from_be_u64(x), from_network_u64(x));
    }
}

#[test]
fn test_host_scenario_u16() {
    match hostorder::DETECTED {
        Some(Endian::Little) => {
            assert_eq_hex!(0xadde, to_be_u16(0xdead));
            assert_eq_hex!(swap_u16(0xdead), to_be_u16(0xdead));
            assert_eq_hex!(0xdead, to_le_u16(0xdead));
        }
        Some(Endian::Big) => {
            assert_eq_hex!(0xdead, to_be_u16(0xdead));
            assert_eq_hex!(0xadde, to_le_u16(0xdead));
        }
        None => assert_eq!(cfg!(target_endian = "little"), to_be_u16(0xdead) == 0xadde),
    }
}
