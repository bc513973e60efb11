//! Value-level operations behind the `endianness` binary.
//!
//! Values arrive as `u64` from the command line and are narrowed to the
//! requested [`Width`] before any conversion.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::{
    HostOrder,
    detect::{ByteOrder, Rule},
    host,
    swap::{self, Strategy, SwapBytes},
};

/// Integer width selected for an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    /// 16 bits.
    W16,
    /// 32 bits.
    W32,
    /// 64 bits.
    W64,
}

impl Width {
    /// Number of bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Number of hex digits needed to print a full value.
    #[must_use]
    pub const fn hex_digits(self) -> usize {
        match self {
            Self::W16 => 4,
            Self::W32 => 8,
            Self::W64 => 16,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "u{}", self.bits()) }
}

/// Conversion direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Host to network order.
    HostToNetwork,
    /// Network to host order.
    NetworkToHost,
    /// Host to big-endian order.
    HostToBig,
    /// Big-endian to host order.
    BigToHost,
    /// Host to little-endian order.
    HostToLittle,
    /// Little-endian to host order.
    LittleToHost,
}

impl Direction {
    fn apply<T: HostOrder>(self, value: T) -> T {
        match self {
            Self::HostToNetwork => value.host_to_network(),
            Self::NetworkToHost => value.network_to_host(),
            Self::HostToBig => value.host_to_big(),
            Self::BigToHost => value.big_to_host(),
            Self::HostToLittle => value.host_to_little(),
            Self::LittleToHost => value.little_to_host(),
        }
    }
}

/// Errors raised while applying an operation to a command-line value.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InspectError {
    /// The value has bits set above the selected width.
    #[error("value {value:#x} does not fit in {width}")]
    OutOfRange {
        /// Value as supplied.
        value: u64,
        /// Selected width.
        width: Width,
    },
}

/// How this build handles byte order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostReport {
    /// Host byte order.
    pub order: ByteOrder,
    /// Detection rule that decided it.
    pub rule: Rule,
    /// Byte-swap implementation in use.
    pub strategy: Strategy,
}

impl fmt::Display for HostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "host order:    {}-endian", self.order)?;
        writeln!(f, "resolved by:   {}", self.rule)?;
        write!(f, "swap strategy: {}", self.strategy)
    }
}

/// Describe the byte-order decisions baked into this build.
#[must_use]
pub fn describe_host() -> HostReport {
    let report = HostReport {
        order: host::HOST_ORDER,
        rule: host::RESOLVED_BY,
        strategy: swap::STRATEGY,
    };
    debug!(
        order = %report.order,
        rule = %report.rule,
        strategy = %report.strategy,
        "described host byte order"
    );
    report
}

fn narrow<T: TryFrom<u64>>(value: u64, width: Width) -> Result<T, InspectError> {
    T::try_from(value).map_err(|_| InspectError::OutOfRange { value, width })
}

fn map_width<F16, F32, F64>(
    value: u64,
    width: Width,
    on16: F16,
    on32: F32,
    on64: F64,
) -> Result<u64, InspectError>
where
    F16: FnOnce(u16) -> u16,
    F32: FnOnce(u32) -> u32,
    F64: FnOnce(u64) -> u64,
{
    Ok(match width {
        Width::W16 => u64::from(on16(narrow(value, width)?)),
        Width::W32 => u64::from(on32(narrow(value, width)?)),
        Width::W64 => on64(value),
    })
}

/// Byte-swap `value` at `width`.
///
/// # Errors
///
/// Returns [`InspectError::OutOfRange`] if `value` does not fit in `width`.
pub fn swap_value(width: Width, value: u64) -> Result<u64, InspectError> {
    let swapped = map_width(
        value,
        width,
        <u16 as SwapBytes>::swap,
        <u32 as SwapBytes>::swap,
        <u64 as SwapBytes>::swap,
    )?;
    debug!(%width, value, swapped, "swapped value");
    Ok(swapped)
}

/// Convert `value` at `width` in `direction`.
///
/// # Errors
///
/// Returns [`InspectError::OutOfRange`] if `value` does not fit in `width`.
pub fn convert_value(width: Width, direction: Direction, value: u64) -> Result<u64, InspectError> {
    let converted = map_width(
        value,
        width,
        |v| direction.apply(v),
        |v| direction.apply(v),
        |v| direction.apply(v),
    )?;
    debug!(%width, ?direction, value, converted, "converted value");
    Ok(converted)
}

/// Format `value` as zero-padded hex for `width`.
#[must_use]
pub fn format_value(width: Width, value: u64) -> String {
    format!("{value:#0digits$x}", digits = width.hex_digits() + 2)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tracing_test::traced_test;

    use super::*;

    #[rstest]
    #[case(Width::W16, 0xABCD, 0xCDAB)]
    #[case(Width::W32, 0x1234_5678, 0x7856_3412)]
    #[case(Width::W64, 0x0102_0304_0506_0708, 0x0807_0605_0403_0201)]
    fn swaps_at_each_width(#[case] width: Width, #[case] value: u64, #[case] expected: u64) {
        assert_eq!(swap_value(width, value), Ok(expected));
    }

    #[rstest]
    #[case(Width::W16, 0x1_0000)]
    #[case(Width::W32, 0x1_0000_0000)]
    fn rejects_values_wider_than_width(#[case] width: Width, #[case] value: u64) {
        let err = swap_value(width, value).unwrap_err();
        assert_eq!(err, InspectError::OutOfRange { value, width });
        assert_eq!(
            err.to_string(),
            format!("value {value:#x} does not fit in {width}")
        );
    }

    #[rstest]
    #[case(Direction::HostToNetwork, Direction::NetworkToHost)]
    #[case(Direction::HostToBig, Direction::BigToHost)]
    #[case(Direction::HostToLittle, Direction::LittleToHost)]
    fn directions_invert(#[case] there: Direction, #[case] back: Direction) {
        for (width, value) in [
            (Width::W16, 0x1234),
            (Width::W32, 0x1234_5678),
            (Width::W64, 0x0102_0304_0506_0708),
        ] {
            let converted = convert_value(width, there, value).expect("value fits");
            assert_eq!(convert_value(width, back, converted), Ok(value));
        }
    }

    #[test]
    fn network_conversion_matches_host_order() {
        let converted =
            convert_value(Width::W32, Direction::HostToNetwork, 0x1234_5678).expect("value fits");
        let expected = match host::HOST_ORDER {
            ByteOrder::Little => 0x7856_3412,
            ByteOrder::Big => 0x1234_5678,
        };
        assert_eq!(converted, expected);
    }

    #[rstest]
    #[case(Width::W16, 0xCDAB, "0xcdab")]
    #[case(Width::W32, 0x12, "0x00000012")]
    #[case(Width::W64, 1, "0x0000000000000001")]
    fn formats_padded_hex(#[case] width: Width, #[case] value: u64, #[case] expected: &str) {
        assert_eq!(format_value(width, value), expected);
    }

    #[test]
    fn report_describes_the_build() {
        let report = describe_host();
        assert_eq!(report.order, host::host_order());
        assert_eq!(report.strategy, swap::STRATEGY);
        let text = report.to_string();
        assert!(text.contains(&format!("host order:    {}-endian", report.order)));
        assert!(text.contains("resolved by:   builtin"));
    }

    #[test]
    #[traced_test]
    fn describing_the_host_is_logged() {
        let _ = describe_host();
        assert!(logs_contain("described host byte order"));
    }

    #[test]
    #[traced_test]
    fn conversions_are_logged() {
        let _ = convert_value(Width::W16, Direction::HostToLittle, 0x1234);
        assert!(logs_contain("converted value"));
        assert!(logs_contain("direction=HostToLittle"));
    }
}
