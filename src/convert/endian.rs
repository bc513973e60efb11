//! The `htobe16`/`be16toh` naming family.
//!
//! These mirror names that some platform bindings already export. They are
//! re-exported at the crate root only with the `endian-names` feature, so a
//! consumer that glob-imports such bindings can turn the feature off and
//! reach them through this module instead.
//!
//! The big-endian functions are the same operations as
//! [`network`](super::network).

use super::{big, little};

/// Host order to big-endian, 16 bits.
#[inline]
#[must_use]
pub const fn htobe16(value: u16) -> u16 { big::w16(value) }

/// Big-endian to host order, 16 bits.
#[inline]
#[must_use]
pub const fn be16toh(value: u16) -> u16 { big::w16(value) }

/// Host order to little-endian, 16 bits.
#[inline]
#[must_use]
pub const fn htole16(value: u16) -> u16 { little::w16(value) }

/// Little-endian to host order, 16 bits.
#[inline]
#[must_use]
pub const fn le16toh(value: u16) -> u16 { little::w16(value) }

/// Host order to big-endian, 32 bits.
#[inline]
#[must_use]
pub const fn htobe32(value: u32) -> u32 { big::w32(value) }

/// Big-endian to host order, 32 bits.
#[inline]
#[must_use]
pub const fn be32toh(value: u32) -> u32 { big::w32(value) }

/// Host order to little-endian, 32 bits.
///
/// # Examples
///
/// ```
/// use endianness::convert::endian::htole32;
///
/// assert_eq!(htole32(0x1234_5678).to_ne_bytes(), [0x78, 0x56, 0x34, 0x12]);
/// ```
#[inline]
#[must_use]
pub const fn htole32(value: u32) -> u32 { little::w32(value) }

/// Little-endian to host order, 32 bits.
#[inline]
#[must_use]
pub const fn le32toh(value: u32) -> u32 { little::w32(value) }

/// Host order to big-endian, 64 bits.
#[inline]
#[must_use]
pub const fn htobe64(value: u64) -> u64 { big::w64(value) }

/// Big-endian to host order, 64 bits.
#[inline]
#[must_use]
pub const fn be64toh(value: u64) -> u64 { big::w64(value) }

/// Host order to little-endian, 64 bits.
#[inline]
#[must_use]
pub const fn htole64(value: u64) -> u64 { little::w64(value) }

/// Little-endian to host order, 64 bits.
#[inline]
#[must_use]
pub const fn le64toh(value: u64) -> u64 { little::w64(value) }
