#![doc(html_root_url = "https://docs.rs/endianness/latest")]
//! Host/network byte-order conversions without platform network headers.
//!
//! The host byte order is decided once, at build time, by the
//! [`detect`] decision table run from `build.rs`. Every conversion is then
//! compiled as either the identity or a byte swap, with no per-call
//! branching. If the order cannot be determined the build fails rather than
//! guess; set `ENDIANNESS_HOST_ORDER=little|big` for targets the detector
//! does not know.
//!
//! ```
//! use endianness::{hton16, ntoh16, swap16};
//!
//! let wire = hton16(0x1234);
//! assert_eq!(wire.to_ne_bytes(), [0x12, 0x34]);
//! assert_eq!(ntoh16(wire), 0x1234);
//! assert_eq!(swap16(0xABCD), 0xCDAB);
//! ```

pub mod convert;
pub mod detect;
pub mod error;
pub mod host;
pub mod inspect;
pub mod swap;
pub mod wire;

#[cfg(feature = "endian-names")]
pub use convert::endian::*;
pub use convert::{HostOrder, network::*};
pub use detect::ByteOrder;
pub use error::WireError;
pub use host::{HOST_ORDER, host_order, is_big_endian, is_little_endian};
pub use swap::{SwapBytes, swap16, swap32, swap64};
