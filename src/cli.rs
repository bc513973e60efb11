//! Command line interface for the `endianness` binary.
//!
//! Shared with `build.rs`, which renders the man page from it.

use std::num::ParseIntError;

use clap::{Parser, Subcommand, ValueEnum};

/// Command line arguments for the `endianness` binary.
#[derive(Debug, Parser)]
#[command(
    name = "endianness",
    version,
    about = "Inspect the host byte order and convert integers between byte orders"
)]
pub struct Cli {
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Operations offered by the binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the host byte order, how it was resolved and the swap strategy.
    Info,
    /// Reverse the bytes of a value.
    Swap {
        /// Integer width in bits.
        #[arg(short, long, value_enum, default_value_t = WidthArg::W32)]
        width: WidthArg,
        /// Value to swap, decimal or `0x`-prefixed hex.
        #[arg(value_parser = parse_value)]
        value: u64,
    },
    /// Convert a value between host order and a canonical order.
    Convert {
        /// Integer width in bits.
        #[arg(short, long, value_enum, default_value_t = WidthArg::W32)]
        width: WidthArg,
        /// Conversion direction.
        #[arg(short, long, value_enum)]
        direction: DirectionArg,
        /// Value to convert, decimal or `0x`-prefixed hex.
        #[arg(value_parser = parse_value)]
        value: u64,
    },
}

/// Integer width accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WidthArg {
    /// 16 bits.
    #[value(name = "16")]
    W16,
    /// 32 bits.
    #[value(name = "32")]
    W32,
    /// 64 bits.
    #[value(name = "64")]
    W64,
}

/// Conversion direction accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Host order to network order.
    HostToNetwork,
    /// Network order to host order.
    NetworkToHost,
    /// Host order to big-endian.
    HostToBig,
    /// Big-endian to host order.
    BigToHost,
    /// Host order to little-endian.
    HostToLittle,
    /// Little-endian to host order.
    LittleToHost,
}

/// Parse a decimal or `0x`-prefixed hexadecimal value. Underscores are
/// ignored.
///
/// # Errors
///
/// Returns the underlying [`ParseIntError`] if the digits are invalid or
/// the value exceeds `u64`.
pub fn parse_value(raw: &str) -> Result<u64, ParseIntError> {
    let digits: String = raw.chars().filter(|&c| c != '_').collect();
    match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => digits.parse(),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rstest::rstest;

    use super::*;

    #[test]
    fn parses_info() {
        let cli = Cli::parse_from(["endianness", "info"]);
        assert!(matches!(cli.command, Command::Info));
    }

    #[test]
    fn parses_swap_with_width() {
        let cli = Cli::parse_from(["endianness", "swap", "--width", "16", "0xABCD"]);
        assert!(matches!(
            cli.command,
            Command::Swap {
                width: WidthArg::W16,
                value: 0xABCD,
            }
        ));
    }

    #[test]
    fn swap_defaults_to_32_bits() {
        let cli = Cli::parse_from(["endianness", "swap", "305419896"]);
        assert!(matches!(
            cli.command,
            Command::Swap {
                width: WidthArg::W32,
                value: 0x1234_5678,
            }
        ));
    }

    #[test]
    fn parses_convert_direction() {
        let cli = Cli::parse_from([
            "endianness",
            "convert",
            "-w",
            "64",
            "-d",
            "host-to-little",
            "0x01",
        ]);
        assert!(matches!(
            cli.command,
            Command::Convert {
                width: WidthArg::W64,
                direction: DirectionArg::HostToLittle,
                value: 1,
            }
        ));
    }

    #[test]
    fn convert_requires_direction() {
        assert!(Cli::try_parse_from(["endianness", "convert", "1"]).is_err());
    }

    #[rstest]
    #[case("42", 42)]
    #[case("0x2A", 42)]
    #[case("0X2a", 42)]
    #[case("0x1234_5678", 0x1234_5678)]
    #[case("18446744073709551615", u64::MAX)]
    fn parses_values(#[case] raw: &str, #[case] expected: u64) {
        assert_eq!(parse_value(raw), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("0x")]
    #[case("0xZZ")]
    #[case("18446744073709551616")]
    fn rejects_bad_values(#[case] raw: &str) {
        assert!(parse_value(raw).is_err());
    }
}
