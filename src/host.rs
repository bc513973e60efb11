//! The host byte order resolved for this build.
//!
//! `build.rs` runs the [`detect`](crate::detect) decision table and emits
//! exactly one `host_order` cfg value. Everything here is a constant of that
//! choice; nothing is recomputed at run time.

use crate::detect::{ByteOrder, Rule};

#[cfg(not(any(host_order = "little", host_order = "big")))]
compile_error!(
    "the host byte order was not resolved by the build script; set ENDIANNESS_HOST_ORDER=little \
     or ENDIANNESS_HOST_ORDER=big"
);

/// Byte order of the processor this build targets.
#[cfg(host_order = "little")]
pub const HOST_ORDER: ByteOrder = ByteOrder::Little;
/// Byte order of the processor this build targets.
#[cfg(host_order = "big")]
pub const HOST_ORDER: ByteOrder = ByteOrder::Big;

/// Detection rule that decided [`HOST_ORDER`].
#[cfg(host_order_rule = "builtin")]
pub const RESOLVED_BY: Rule = Rule::Builtin;
/// Detection rule that decided [`HOST_ORDER`].
#[cfg(host_order_rule = "byte-order-macros")]
pub const RESOLVED_BY: Rule = Rule::ByteOrderMacros;
/// Detection rule that decided [`HOST_ORDER`].
#[cfg(host_order_rule = "architecture")]
pub const RESOLVED_BY: Rule = Rule::Architecture;
/// Detection rule that decided [`HOST_ORDER`].
#[cfg(host_order_rule = "override")]
pub const RESOLVED_BY: Rule = Rule::Override;

// The resolved order must agree with the compiler's own target_endian.
const _: () = assert!(
    matches!(HOST_ORDER, ByteOrder::Little) == cfg!(target_endian = "little"),
    "resolved host byte order disagrees with the compiler's target_endian"
);

/// Byte order of the processor this build targets.
#[inline]
#[must_use]
pub const fn host_order() -> ByteOrder { HOST_ORDER }

/// Whether the host stores the least significant byte first.
#[inline]
#[must_use]
pub const fn is_little_endian() -> bool { matches!(HOST_ORDER, ByteOrder::Little) }

/// Whether the host stores the most significant byte first.
#[inline]
#[must_use]
pub const fn is_big_endian() -> bool { matches!(HOST_ORDER, ByteOrder::Big) }

impl ByteOrder {
    /// Whether this is the host's own order.
    #[inline]
    #[must_use]
    pub const fn is_host(self) -> bool {
        matches!(
            (self, HOST_ORDER),
            (ByteOrder::Little, ByteOrder::Little) | (ByteOrder::Big, ByteOrder::Big)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agrees_with_target_endian() {
        let expected = if cfg!(target_endian = "little") {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        };
        assert_eq!(host_order(), expected);
    }

    #[test]
    fn exactly_one_predicate_holds() {
        assert_ne!(is_little_endian(), is_big_endian());
        assert!(HOST_ORDER.is_host());
    }

    #[test]
    fn repeated_reads_agree() {
        assert_eq!(host_order(), host_order());
        assert_eq!(host_order(), HOST_ORDER);
    }

    #[test]
    fn cargo_builds_resolve_through_the_builtin() {
        assert_eq!(RESOLVED_BY, Rule::Builtin);
    }
}
