//! Byte-swap primitives: concrete values, involution and strategy
//! equivalence.

use endianness::{
    SwapBytes,
    swap::{self, native, portable},
    swap16,
    swap32,
    swap64,
};
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn concrete_byte_reversals() {
    assert_eq!(swap16(0xABCD), 0xCDAB);
    assert_eq!(swap32(0x1234_5678), 0x7856_3412);
    assert_eq!(swap64(0x0102_0304_0506_0708), 0x0807_0605_0403_0201);
}

#[rstest]
#[case([0x12, 0x34, 0x56, 0x78], [0x78, 0x56, 0x34, 0x12])]
#[case([0x00, 0x00, 0x00, 0xFF], [0xFF, 0x00, 0x00, 0x00])]
#[case([0xDE, 0xAD, 0xBE, 0xEF], [0xEF, 0xBE, 0xAD, 0xDE])]
fn output_byte_i_is_input_byte_mirrored(#[case] input: [u8; 4], #[case] expected: [u8; 4]) {
    let swapped = swap32(u32::from_be_bytes(input));
    assert_eq!(swapped.to_be_bytes(), expected);
}

#[test]
fn strategy_is_reported() {
    let name = swap::STRATEGY.to_string();
    assert!(name == "native" || name == "portable");
}

proptest! {
    #[test]
    fn swap_is_an_involution(a in any::<u16>(), b in any::<u32>(), c in any::<u64>()) {
        prop_assert_eq!(swap16(swap16(a)), a);
        prop_assert_eq!(swap32(swap32(b)), b);
        prop_assert_eq!(swap64(swap64(c)), c);
    }

    #[test]
    fn native_and_portable_agree(a in any::<u16>(), b in any::<u32>(), c in any::<u64>()) {
        prop_assert_eq!(native::swap16(a), portable::swap16(a));
        prop_assert_eq!(native::swap32(b), portable::swap32(b));
        prop_assert_eq!(native::swap64(c), portable::swap64(c));
    }

    #[test]
    fn swap_reverses_byte_arrays(c in any::<u64>()) {
        let mut reversed = c.to_ne_bytes();
        reversed.reverse();
        prop_assert_eq!(swap64(c).to_ne_bytes(), reversed);
    }

    #[test]
    fn trait_matches_free_functions(a in any::<u16>(), b in any::<u32>(), c in any::<u64>()) {
        prop_assert_eq!(a.swap(), swap16(a));
        prop_assert_eq!(b.swap(), swap32(b));
        prop_assert_eq!(c.swap(), swap64(c));
    }
}
