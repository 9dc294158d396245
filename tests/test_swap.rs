use assert_hex::assert_eq_hex;
use hostorder::prelude::*;
use rstest::*;

const SAMPLES_U16: [u16; 6] = [0x0000, 0x0001, 0x00ff, 0x1234, 0xdead, 0xffff];
const SAMPLES_U32: [u32; 6] = [
    0x0000_0000,
    0x0000_0001,
    0x1234_5678,
    0x8000_0000,
    0xdead_beef,
    0xffff_ffff,
];
const SAMPLES_U64: [u64; 6] = [
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0001,
    0x0123_4567_89ab_cdef,
    0x0000_0000_ffff_ffff,
    0xdead_beef_cafe_babe,
    0xffff_ffff_ffff_ffff,
];

#[test]
fn test_self_inverse() {
    for x in SAMPLES_U16 {
        assert_eq_hex!(x, swap_u16(swap_u16(x)));
    }
    for x in SAMPLES_U32 {
        assert_eq_hex!(x, swap_u32(swap_u32(x)));
    }
    for x in SAMPLES_U64 {
        assert_eq_hex!(x, swap_u64(swap_u64(x)));
    }
}

#[test]
fn test_self_inverse_exhaustive_u16() {
    for x in 0..=u16::MAX {
        assert_eq!(x, swap_u16(swap_u16(x)));
        assert_eq!(x.swap_bytes(), swap_u16(x));
    }
}

#[rstest(input,
    case(0x0000_0000_0000_0000),
    case(0xffff_ffff_ffff_ffff),
)]
fn test_swap_u64_fixed_points(input: u64) {
    assert_eq_hex!(input, swap_u64(input));
}

// the halves must not collapse into one another
#[rstest(input, expected,
    case(0x0000_0000_dead_beef, 0xefbe_adde_0000_0000),
    case(0xdead_beef_0000_0000, 0x0000_0000_efbe_adde),
    case(0xdead_beef_cafe_babe, 0xbeba_feca_efbe_adde),
)]
fn test_swap_u64_halves(input: u64, expected: u64) {
    assert_eq_hex!(expected, swap_u64(input));
}

#[test]
fn test_swap_reverses_memory() {
    assert_eq!([0xef, 0xbe, 0xad, 0xde], swap_u32(0xdead_beef).to_be_bytes());
    let mut reversed = 0xdead_beef_cafe_babe_u64.to_ne_bytes();
    reversed.reverse();
    assert_eq!(reversed, swap_u64(0xdead_beef_cafe_babe).to_ne_bytes());
}
