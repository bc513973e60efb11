//! Host/network conversions. Network order is big-endian.
//!
//! # Examples
//!
//! ```
//! use endianness::{hton32, ntoh32};
//!
//! let wire = hton32(0x1234_5678);
//! assert_eq!(wire.to_ne_bytes(), [0x12, 0x34, 0x56, 0x78]);
//! assert_eq!(ntoh32(wire), 0x1234_5678);
//! ```

use super::big;

/// Host order to network order, 16 bits.
#[inline]
#[must_use]
pub const fn hton16(value: u16) -> u16 { big::w16(value) }

/// Network order to host order, 16 bits.
#[inline]
#[must_use]
pub const fn ntoh16(value: u16) -> u16 { big::w16(value) }

/// Host order to network order, 32 bits.
#[inline]
#[must_use]
pub const fn hton32(value: u32) -> u32 { big::w32(value) }

/// Network order to host order, 32 bits.
#[inline]
#[must_use]
pub const fn ntoh32(value: u32) -> u32 { big::w32(value) }

/// Host order to network order, 64 bits.
#[inline]
#[must_use]
pub const fn hton64(value: u64) -> u64 { big::w64(value) }

/// Network order to host order, 64 bits.
#[inline]
#[must_use]
pub const fn ntoh64(value: u64) -> u64 { big::w64(value) }
