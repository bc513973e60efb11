//! Byte-array helpers built on the host-order conversions.
//!
//! The fixed-width functions move a single integer field to or from its
//! on-wire bytes. [`bytes_to_u64`] and [`u64_to_bytes`] handle fields whose
//! width and order are only known at run time.

use crate::{
    convert::{endian, network},
    detect::ByteOrder,
    error::{Result, WireError},
};

/// Serialise a `u16` in network byte order (big-endian).
///
/// # Examples
///
/// ```
/// use endianness::wire::write_network_u16;
///
/// assert_eq!(write_network_u16(0x1234), [0x12, 0x34]);
/// ```
#[must_use]
pub const fn write_network_u16(value: u16) -> [u8; 2] { network::hton16(value).to_ne_bytes() }

/// Parse a network-order `u16` from its on-wire representation.
///
/// # Examples
///
/// ```
/// use endianness::wire::read_network_u16;
///
/// assert_eq!(read_network_u16([0x12, 0x34]), 0x1234);
/// ```
#[must_use]
pub const fn read_network_u16(bytes: [u8; 2]) -> u16 { network::ntoh16(u16::from_ne_bytes(bytes)) }

/// Serialise a `u32` in network byte order (big-endian).
///
/// # Examples
///
/// ```
/// use endianness::wire::write_network_u32;
///
/// assert_eq!(write_network_u32(0x1234_5678), [0x12, 0x34, 0x56, 0x78]);
/// ```
#[must_use]
pub const fn write_network_u32(value: u32) -> [u8; 4] { network::hton32(value).to_ne_bytes() }

/// Parse a network-order `u32` from its on-wire representation.
#[must_use]
pub const fn read_network_u32(bytes: [u8; 4]) -> u32 { network::ntoh32(u32::from_ne_bytes(bytes)) }

/// Serialise a `u64` in network byte order (big-endian).
///
/// # Examples
///
/// ```
/// use endianness::wire::write_network_u64;
///
/// assert_eq!(
///     write_network_u64(0x1122_3344_5566_7788),
///     [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]
/// );
/// ```
#[must_use]
pub const fn write_network_u64(value: u64) -> [u8; 8] { network::hton64(value).to_ne_bytes() }

/// Parse a network-order `u64` from its on-wire representation.
#[must_use]
pub const fn read_network_u64(bytes: [u8; 8]) -> u64 { network::ntoh64(u64::from_ne_bytes(bytes)) }

/// Serialise a `u16` in little-endian order.
#[must_use]
pub const fn write_little_u16(value: u16) -> [u8; 2] { endian::htole16(value).to_ne_bytes() }

/// Parse a little-endian `u16`.
#[must_use]
pub const fn read_little_u16(bytes: [u8; 2]) -> u16 { endian::le16toh(u16::from_ne_bytes(bytes)) }

/// Serialise a `u32` in little-endian order.
///
/// # Examples
///
/// ```
/// use endianness::wire::write_little_u32;
///
/// assert_eq!(write_little_u32(0x1234_5678), [0x78, 0x56, 0x34, 0x12]);
/// ```
#[must_use]
pub const fn write_little_u32(value: u32) -> [u8; 4] { endian::htole32(value).to_ne_bytes() }

/// Parse a little-endian `u32`.
#[must_use]
pub const fn read_little_u32(bytes: [u8; 4]) -> u32 { endian::le32toh(u32::from_ne_bytes(bytes)) }

/// Serialise a `u64` in little-endian order.
#[must_use]
pub const fn write_little_u64(value: u64) -> [u8; 8] { endian::htole64(value).to_ne_bytes() }

/// Parse a little-endian `u64`.
#[must_use]
pub const fn read_little_u64(bytes: [u8; 8]) -> u64 { endian::le64toh(u64::from_ne_bytes(bytes)) }

fn check_width(width: usize) -> Result<()> {
    if matches!(width, 1 | 2 | 4 | 8) {
        Ok(())
    } else {
        Err(WireError::UnsupportedWidth(width))
    }
}

/// Decode a `width`-byte unsigned integer stored in `order` from the front
/// of `bytes`.
///
/// # Errors
///
/// Returns [`WireError::UnsupportedWidth`] unless `width` is 1, 2, 4 or 8,
/// and [`WireError::Truncated`] if `bytes` is shorter than `width`.
///
/// # Examples
///
/// ```
/// use endianness::{ByteOrder, wire::bytes_to_u64};
///
/// assert_eq!(bytes_to_u64(&[0x12, 0x34], 2, ByteOrder::Big), Ok(0x1234));
/// assert_eq!(bytes_to_u64(&[0x34, 0x12], 2, ByteOrder::Little), Ok(0x1234));
/// ```
pub fn bytes_to_u64(bytes: &[u8], width: usize, order: ByteOrder) -> Result<u64> {
    check_width(width)?;
    let field = bytes.get(..width).ok_or(WireError::Truncated {
        have: bytes.len(),
        need: width,
    })?;

    let mut buf = [0u8; 8];
    match order {
        ByteOrder::Big => buf[8 - width..].copy_from_slice(field),
        ByteOrder::Little => buf[..width].copy_from_slice(field),
    }
    Ok(order.decode(u64::from_ne_bytes(buf)))
}

/// Encode `value` as a `width`-byte unsigned integer in `order` at the front
/// of `out`, zeroing the remaining bytes.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`WireError::UnsupportedWidth`] unless `width` is 1, 2, 4 or 8,
/// and [`WireError::ValueTooLarge`] if `value` does not fit in `width`
/// bytes.
#[must_use = "encoded byte count must be used"]
pub fn u64_to_bytes(value: u64, width: usize, order: ByteOrder, out: &mut [u8; 8]) -> Result<usize> {
    check_width(width)?;
    if width < 8 && value >> (8 * width) != 0 {
        return Err(WireError::ValueTooLarge { value, width });
    }

    let encoded = order.encode(value).to_ne_bytes();
    match order {
        ByteOrder::Big => out[..width].copy_from_slice(&encoded[8 - width..]),
        ByteOrder::Little => out[..width].copy_from_slice(&encoded[..width]),
    }
    out[width..].fill(0);

    Ok(width)
}
