//! Byte-swap primitives for 16, 32 and 64-bit unsigned integers.
//!
//! Two interchangeable strategies are provided:
//!
//! - [`native`] uses the toolchain's byte-reverse intrinsic, which lowers to a single `bswap`/`rev`
//!   instruction where the target has one.
//! - [`portable`] spells out the mask-and-shift permutation.
//!
//! The crate-root [`swap16`], [`swap32`] and [`swap64`] use [`native`]
//! unless the `portable-swap` feature is enabled. Both strategies are total
//! and produce identical results for every input.

use std::fmt;

/// Intrinsic-backed byte swaps.
pub mod native {
    /// Reverse the bytes of a `u16`.
    #[inline]
    #[must_use]
    pub const fn swap16(value: u16) -> u16 { value.swap_bytes() }

    /// Reverse the bytes of a `u32`.
    #[inline]
    #[must_use]
    pub const fn swap32(value: u32) -> u32 { value.swap_bytes() }

    /// Reverse the bytes of a `u64`.
    #[inline]
    #[must_use]
    pub const fn swap64(value: u64) -> u64 { value.swap_bytes() }
}

/// Mask-and-shift byte swaps.
///
/// Each byte is isolated with a mask, moved to its mirrored offset and the
/// results are OR-ed together.
pub mod portable {
    /// Reverse the bytes of a `u16`.
    #[inline]
    #[must_use]
    pub const fn swap16(value: u16) -> u16 { ((value >> 8) & 0x00ff) | ((value & 0x00ff) << 8) }

    /// Reverse the bytes of a `u32`.
    #[inline]
    #[must_use]
    pub const fn swap32(value: u32) -> u32 {
        ((value & 0xff00_0000) >> 24)
            | ((value & 0x00ff_0000) >> 8)
            | ((value & 0x0000_ff00) << 8)
            | ((value & 0x0000_00ff) << 24)
    }

    /// Reverse the bytes of a `u64`.
    #[inline]
    #[must_use]
    pub const fn swap64(value: u64) -> u64 {
        ((value & 0xff00_0000_0000_0000) >> 56)
            | ((value & 0x00ff_0000_0000_0000) >> 40)
            | ((value & 0x0000_ff00_0000_0000) >> 24)
            | ((value & 0x0000_00ff_0000_0000) >> 8)
            | ((value & 0x0000_0000_ff00_0000) << 8)
            | ((value & 0x0000_0000_00ff_0000) << 24)
            | ((value & 0x0000_0000_0000_ff00) << 40)
            | ((value & 0x0000_0000_0000_00ff) << 56)
    }
}

#[cfg(not(feature = "portable-swap"))]
use self::native as selected;
#[cfg(feature = "portable-swap")]
use self::portable as selected;

/// The byte-swap implementation compiled into this build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Toolchain intrinsic.
    Native,
    /// Mask-and-shift fallback.
    Portable,
}

impl Strategy {
    /// Lower-case name of the strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Portable => "portable",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Strategy behind [`swap16`], [`swap32`] and [`swap64`].
#[cfg(not(feature = "portable-swap"))]
pub const STRATEGY: Strategy = Strategy::Native;
/// Strategy behind [`swap16`], [`swap32`] and [`swap64`].
#[cfg(feature = "portable-swap")]
pub const STRATEGY: Strategy = Strategy::Portable;

/// Reverse the bytes of a `u16`.
///
/// # Examples
///
/// ```
/// assert_eq!(endianness::swap16(0xABCD), 0xCDAB);
/// ```
#[inline]
#[must_use]
pub const fn swap16(value: u16) -> u16 { selected::swap16(value) }

/// Reverse the bytes of a `u32`.
///
/// # Examples
///
/// ```
/// assert_eq!(endianness::swap32(0x1234_5678), 0x7856_3412);
/// ```
#[inline]
#[must_use]
pub const fn swap32(value: u32) -> u32 { selected::swap32(value) }

/// Reverse the bytes of a `u64`.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     endianness::swap64(0x0102_0304_0506_0708),
///     0x0807_0605_0403_0201
/// );
/// ```
#[inline]
#[must_use]
pub const fn swap64(value: u64) -> u64 { selected::swap64(value) }

mod sealed {
    pub trait Sealed {}

    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Unsigned integer widths with a byte-swap primitive.
///
/// Sealed: implemented for `u16`, `u32` and `u64` only.
pub trait SwapBytes: sealed::Sealed + Copy {
    /// Reverse the byte order of `self`.
    #[must_use]
    fn swap(self) -> Self;
}

macro_rules! impl_swap_bytes {
    ($($t:ty => $swap:ident),* $(,)?) => {
        $(
            impl SwapBytes for $t {
                #[inline]
                fn swap(self) -> Self { $swap(self) }
            }
        )*
    };
}

impl_swap_bytes!(u16 => swap16, u32 => swap32, u64 => swap64);

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0xABCD, 0xCDAB)]
    #[case(0x0000, 0x0000)]
    #[case(0x00FF, 0xFF00)]
    #[case(0x1234, 0x3412)]
    fn swap16_reverses_bytes(#[case] input: u16, #[case] expected: u16) {
        assert_eq!(native::swap16(input), expected);
        assert_eq!(portable::swap16(input), expected);
        assert_eq!(swap16(input), expected);
    }

    #[rstest]
    #[case(0x1234_5678, 0x7856_3412)]
    #[case(0x0000_00FF, 0xFF00_0000)]
    #[case(0xFFFF_FFFF, 0xFFFF_FFFF)]
    fn swap32_reverses_bytes(#[case] input: u32, #[case] expected: u32) {
        assert_eq!(native::swap32(input), expected);
        assert_eq!(portable::swap32(input), expected);
        assert_eq!(swap32(input), expected);
    }

    #[rstest]
    #[case(0x0102_0304_0506_0708, 0x0807_0605_0403_0201)]
    #[case(0x0000_0000_0000_00FF, 0xFF00_0000_0000_0000)]
    #[case(0, 0)]
    fn swap64_reverses_bytes(#[case] input: u64, #[case] expected: u64) {
        assert_eq!(native::swap64(input), expected);
        assert_eq!(portable::swap64(input), expected);
        assert_eq!(swap64(input), expected);
    }

    #[test]
    fn swapped_bytes_mirror_the_input() {
        let bytes = swap32(u32::from_ne_bytes([0x12, 0x34, 0x56, 0x78])).to_ne_bytes();
        assert_eq!(bytes, [0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn trait_dispatches_to_width() {
        assert_eq!(0xABCD_u16.swap(), 0xCDAB);
        assert_eq!(0x1234_5678_u32.swap(), 0x7856_3412);
        assert_eq!(0x0102_0304_0506_0708_u64.swap(), 0x0807_0605_0403_0201);
    }

    #[test]
    fn strategy_matches_feature() {
        let expected = if cfg!(feature = "portable-swap") {
            Strategy::Portable
        } else {
            Strategy::Native
        };
        assert_eq!(STRATEGY, expected);
    }

    const SWAPPED_AT_COMPILE_TIME: u32 = swap32(0xDEAD_BEEF);

    #[test]
    fn usable_in_const_context() {
        assert_eq!(SWAPPED_AT_COMPILE_TIME, 0xEFBE_ADDE);
    }
}
