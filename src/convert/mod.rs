//! Host-order conversions derived from [`HOST_ORDER`](crate::HOST_ORDER).
//!
//! Every conversion is either the identity or the width's byte swap. The
//! choice is made once, by the `host_order` cfg, for all widths together:
//!
//! | host   | network / big | little   |
//! |--------|---------------|----------|
//! | little | swap          | identity |
//! | big    | identity      | swap     |
//!
//! Two naming families expose the same six directions:
//! [`network`] (`hton16`, `ntoh16`, ...) and [`endian`] (`htobe16`,
//! `be16toh`, `htole16`, `le16toh`, ...).

pub mod endian;
pub mod network;

use crate::{detect::ByteOrder, swap::SwapBytes};

mod identity {
    #[inline]
    pub const fn w16(value: u16) -> u16 { value }

    #[inline]
    pub const fn w32(value: u32) -> u32 { value }

    #[inline]
    pub const fn w64(value: u64) -> u64 { value }
}

mod swapped {
    use crate::swap;

    #[inline]
    pub const fn w16(value: u16) -> u16 { swap::swap16(value) }

    #[inline]
    pub const fn w32(value: u32) -> u32 { swap::swap32(value) }

    #[inline]
    pub const fn w64(value: u64) -> u64 { swap::swap64(value) }
}

#[cfg(host_order = "little")]
use self::{identity as little, swapped as big};
#[cfg(host_order = "big")]
use self::{identity as big, swapped as little};

/// Conversions between host order and the canonical orders, as methods.
///
/// Implemented for `u16`, `u32` and `u64`; each method is the free function
/// of the same direction.
///
/// # Examples
///
/// ```
/// use endianness::HostOrder;
///
/// let wire = 0x1234_u16.host_to_network();
/// assert_eq!(wire.to_ne_bytes(), [0x12, 0x34]);
/// assert_eq!(wire.network_to_host(), 0x1234);
/// ```
pub trait HostOrder: SwapBytes {
    /// Host order to network (big-endian) order.
    #[must_use]
    fn host_to_network(self) -> Self;
    /// Network (big-endian) order to host order.
    #[must_use]
    fn network_to_host(self) -> Self;
    /// Host order to big-endian order.
    #[must_use]
    fn host_to_big(self) -> Self;
    /// Big-endian order to host order.
    #[must_use]
    fn big_to_host(self) -> Self;
    /// Host order to little-endian order.
    #[must_use]
    fn host_to_little(self) -> Self;
    /// Little-endian order to host order.
    #[must_use]
    fn little_to_host(self) -> Self;
}

macro_rules! impl_host_order {
    ($(
        $t:ty => $hton:ident, $ntoh:ident, $htobe:ident, $betoh:ident, $htole:ident, $letoh:ident;
    )*) => {
        $(
            impl HostOrder for $t {
                #[inline]
                fn host_to_network(self) -> Self { network::$hton(self) }

                #[inline]
                fn network_to_host(self) -> Self { network::$ntoh(self) }

                #[inline]
                fn host_to_big(self) -> Self { endian::$htobe(self) }

                #[inline]
                fn big_to_host(self) -> Self { endian::$betoh(self) }

                #[inline]
                fn host_to_little(self) -> Self { endian::$htole(self) }

                #[inline]
                fn little_to_host(self) -> Self { endian::$letoh(self) }
            }
        )*
    };
}

impl_host_order! {
    u16 => hton16, ntoh16, htobe16, be16toh, htole16, le16toh;
    u32 => hton32, ntoh32, htobe32, be32toh, htole32, le32toh;
    u64 => hton64, ntoh64, htobe64, be64toh, htole64, le64toh;
}

impl ByteOrder {
    /// Convert a host-order `value` into this byte order.
    ///
    /// For formats whose order is only known at run time, such as a header
    /// flag. The host order itself is still the build-time constant.
    ///
    /// # Examples
    ///
    /// ```
    /// use endianness::ByteOrder;
    ///
    /// let encoded = ByteOrder::Little.encode(0x1234_5678_u32);
    /// assert_eq!(encoded.to_ne_bytes(), [0x78, 0x56, 0x34, 0x12]);
    /// ```
    #[inline]
    #[must_use]
    pub fn encode<T: HostOrder>(self, value: T) -> T {
        match self {
            Self::Little => value.host_to_little(),
            Self::Big => value.host_to_big(),
        }
    }

    /// Convert a `value` stored in this byte order into host order.
    #[inline]
    #[must_use]
    pub fn decode<T: HostOrder>(self, value: T) -> T {
        match self {
            Self::Little => value.little_to_host(),
            Self::Big => value.big_to_host(),
        }
    }
}
