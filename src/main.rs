//! Command-line front end for the `endianness` library.
//!
//! Reports how this build resolved the host byte order and applies the
//! swap and conversion primitives to values given on the command line.

mod cli;

use clap::Parser;
use cli::{Cli, Command, DirectionArg, WidthArg};
use endianness::inspect::{self, Direction, Width};

impl From<WidthArg> for Width {
    fn from(arg: WidthArg) -> Self {
        match arg {
            WidthArg::W16 => Self::W16,
            WidthArg::W32 => Self::W32,
            WidthArg::W64 => Self::W64,
        }
    }
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::HostToNetwork => Self::HostToNetwork,
            DirectionArg::NetworkToHost => Self::NetworkToHost,
            DirectionArg::HostToBig => Self::HostToBig,
            DirectionArg::BigToHost => Self::BigToHost,
            DirectionArg::HostToLittle => Self::HostToLittle,
            DirectionArg::LittleToHost => Self::LittleToHost,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Applications embedding the library should install their own subscriber.
    tracing_subscriber::fmt::init();

    match Cli::parse().command {
        Command::Info => println!("{}", inspect::describe_host()),
        Command::Swap { width, value } => {
            let width = Width::from(width);
            let swapped = inspect::swap_value(width, value)?;
            println!("{}", inspect::format_value(width, swapped));
        }
        Command::Convert {
            width,
            direction,
            value,
        } => {
            let width = Width::from(width);
            let converted = inspect::convert_value(width, direction.into(), value)?;
            println!("{}", inspect::format_value(width, converted));
        }
    }
    Ok(())
}
