//! Build-time byte-order detection.
//!
//! `build.rs` evaluates [`resolve`] once per build and turns the result into
//! the `host_order` cfg that selects every conversion in the crate. The
//! library compiles the same decision table so it can be inspected and
//! tested against synthetic build environments.
//!
//! # Precedence
//!
//! 1. The compiler's own byte-order indicator ([`Rule::Builtin`]).
//! 2. A byte-order macro triple: an order value compared against named
//!    little/big constants ([`Rule::ByteOrderMacros`]).
//! 3. The architecture component of the target triple, looked up in
//!    [`ARCH_TABLE`] ([`Rule::Architecture`]).
//! 4. An explicit `ENDIANNESS_HOST_ORDER` override ([`Rule::Override`]).
//!
//! If none of these apply, detection fails. No order is ever assumed.

use std::{collections::BTreeMap, fmt, str::FromStr};

use thiserror::Error;

/// Environment variable naming the intended order when detection is
/// inconclusive.
pub const OVERRIDE_VAR: &str = "ENDIANNESS_HOST_ORDER";

/// Environment variable carrying the compiler's byte-order indicator.
pub const BUILTIN_VAR: &str = "CARGO_CFG_TARGET_ENDIAN";

/// Environment variable carrying the target triple.
pub const TARGET_VAR: &str = "TARGET";

/// Byte order of a multi-byte integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least significant byte first.
    Little,
    /// Most significant byte first. Network order.
    Big,
}

impl ByteOrder {
    /// Lower-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Little => "little",
            Self::Big => "big",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// A string that names neither byte order.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unrecognised byte order `{0}`: expected `little` or `big`")]
pub struct ParseByteOrderError(pub String);

impl FromStr for ByteOrder {
    type Err = ParseByteOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "little" => Ok(Self::Little),
            "big" => Ok(Self::Big),
            _ => Err(ParseByteOrderError(s.to_owned())),
        }
    }
}

/// The detection rule that decided the host order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Dedicated compiler indicator.
    Builtin,
    /// Byte-order macro triple.
    ByteOrderMacros,
    /// Architecture table lookup.
    Architecture,
    /// Explicit override.
    Override,
}

impl Rule {
    /// Kebab-case name, also used as the `host_order_rule` cfg value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::ByteOrderMacros => "byte-order-macros",
            Self::Architecture => "architecture",
            Self::Override => "override",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Outcome of a successful detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The host byte order.
    pub order: ByteOrder,
    /// The rule that decided it.
    pub rule: Rule,
}

/// Reasons detection refuses to produce an order.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DetectError {
    /// No signal resolved the order and no override was supplied.
    #[error(
        "byte order could not be determined for target `{target}`; set \
         ENDIANNESS_HOST_ORDER=little or ENDIANNESS_HOST_ORDER=big to state it explicitly"
    )]
    Undetermined {
        /// Target triple, or `<unknown>` when none was supplied.
        target: String,
    },

    /// The override contradicts a conclusive signal.
    #[error("ENDIANNESS_HOST_ORDER={given} conflicts with {detected} detected by the {rule} rule")]
    OverrideConflict {
        /// Order named by the override.
        given: ByteOrder,
        /// Order the signals resolved to.
        detected: ByteOrder,
        /// Rule that resolved it.
        rule: Rule,
    },

    /// The override names neither order.
    #[error("invalid ENDIANNESS_HOST_ORDER: {0}")]
    InvalidOverride(#[from] ParseByteOrderError),
}

/// Names of an order value and the constants it is compared against.
#[derive(Clone, Copy, Debug)]
pub struct MacroTriple {
    /// Name holding the order value.
    pub order: &'static str,
    /// Name of the little-endian constant.
    pub little: &'static str,
    /// Name of the big-endian constant.
    pub big: &'static str,
}

impl MacroTriple {
    fn selects(&self, defines: &BTreeMap<String, String>, order: ByteOrder) -> bool {
        let constant = match order {
            ByteOrder::Little => self.little,
            ByteOrder::Big => self.big,
        };
        match (expand(defines, self.order), expand(defines, constant)) {
            (Some(value), Some(expected)) => value == expected,
            _ => false,
        }
    }
}

/// Conventional byte-order macro triples, in precedence order.
pub static MACRO_TRIPLES: [MacroTriple; 4] = [
    MacroTriple {
        order: "__BYTE_ORDER__",
        little: "__ORDER_LITTLE_ENDIAN__",
        big: "__ORDER_BIG_ENDIAN__",
    },
    MacroTriple {
        order: "__BYTE_ORDER",
        little: "__LITTLE_ENDIAN",
        big: "__BIG_ENDIAN",
    },
    MacroTriple {
        order: "_BYTE_ORDER",
        little: "_LITTLE_ENDIAN",
        big: "_BIG_ENDIAN",
    },
    MacroTriple {
        order: "BYTE_ORDER",
        little: "LITTLE_ENDIAN",
        big: "BIG_ENDIAN",
    },
];

/// Compiler flags that name the order directly.
static BUILTIN_FLAGS: [(&str, ByteOrder); 2] = [
    ("__LITTLE_ENDIAN__", ByteOrder::Little),
    ("__BIG_ENDIAN__", ByteOrder::Big),
];

/// How an [`ARCH_TABLE`] entry matches an architecture identifier.
#[derive(Clone, Copy, Debug)]
pub enum ArchMatch {
    /// The whole identifier.
    Exact(&'static str),
    /// A leading part of the identifier.
    Prefix(&'static str),
}

impl ArchMatch {
    fn matches(self, arch: &str) -> bool {
        match self {
            Self::Exact(name) => arch == name,
            Self::Prefix(prefix) => arch.starts_with(prefix),
        }
    }
}

/// Architecture identifiers with a known byte order. First match wins.
///
/// Big-endian `eb`/`_be` variants come before their little-endian base
/// prefixes.
pub const ARCH_TABLE: &[(ArchMatch, ByteOrder)] = &[
    (ArchMatch::Prefix("armeb"), ByteOrder::Big),
    (ArchMatch::Prefix("thumbeb"), ByteOrder::Big),
    (ArchMatch::Exact("aarch64_be"), ByteOrder::Big),
    (ArchMatch::Exact("mips"), ByteOrder::Big),
    (ArchMatch::Exact("mips64"), ByteOrder::Big),
    (ArchMatch::Exact("mipsisa32r6"), ByteOrder::Big),
    (ArchMatch::Exact("mipsisa64r6"), ByteOrder::Big),
    (ArchMatch::Exact("powerpc"), ByteOrder::Big),
    (ArchMatch::Exact("powerpc64"), ByteOrder::Big),
    (ArchMatch::Exact("s390x"), ByteOrder::Big),
    (ArchMatch::Exact("sparc"), ByteOrder::Big),
    (ArchMatch::Exact("sparc64"), ByteOrder::Big),
    (ArchMatch::Exact("sparcv9"), ByteOrder::Big),
    (ArchMatch::Exact("m68k"), ByteOrder::Big),
    (ArchMatch::Exact("bpfeb"), ByteOrder::Big),
    (ArchMatch::Prefix("arm"), ByteOrder::Little),
    (ArchMatch::Prefix("thumb"), ByteOrder::Little),
    (ArchMatch::Exact("aarch64"), ByteOrder::Little),
    (ArchMatch::Exact("mipsel"), ByteOrder::Little),
    (ArchMatch::Exact("mips64el"), ByteOrder::Little),
    (ArchMatch::Exact("mipsisa32r6el"), ByteOrder::Little),
    (ArchMatch::Exact("mipsisa64r6el"), ByteOrder::Little),
    (ArchMatch::Exact("powerpc64le"), ByteOrder::Little),
    (ArchMatch::Exact("x86_64"), ByteOrder::Little),
    (ArchMatch::Exact("i386"), ByteOrder::Little),
    (ArchMatch::Exact("i486"), ByteOrder::Little),
    (ArchMatch::Exact("i586"), ByteOrder::Little),
    (ArchMatch::Exact("i686"), ByteOrder::Little),
    (ArchMatch::Exact("ia64"), ByteOrder::Little),
    (ArchMatch::Prefix("riscv32"), ByteOrder::Little),
    (ArchMatch::Prefix("riscv64"), ByteOrder::Little),
    (ArchMatch::Exact("loongarch64"), ByteOrder::Little),
    (ArchMatch::Exact("wasm32"), ByteOrder::Little),
    (ArchMatch::Exact("wasm64"), ByteOrder::Little),
    (ArchMatch::Exact("bpfel"), ByteOrder::Little),
    (ArchMatch::Exact("nvptx64"), ByteOrder::Little),
];

/// Look up an architecture identifier in [`ARCH_TABLE`].
#[must_use]
pub fn arch_order(arch: &str) -> Option<ByteOrder> {
    ARCH_TABLE
        .iter()
        .find(|(pattern, _)| pattern.matches(arch))
        .map(|&(_, order)| order)
}

/// Look up the architecture component of a target triple.
#[must_use]
pub fn target_order(target: &str) -> Option<ByteOrder> {
    target.split('-').next().and_then(arch_order)
}

/// Everything the detector may consult.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Signals {
    /// Compiler byte-order indicator (`little` or `big`).
    pub builtin: Option<String>,
    /// Named values that may carry a byte-order macro triple or flag.
    pub defines: BTreeMap<String, String>,
    /// Target triple.
    pub target: Option<String>,
    /// Explicit override.
    pub override_order: Option<String>,
}

impl Signals {
    /// Collect signals through `lookup`, typically `std::env::var`.
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let defines = define_names()
            .filter_map(|name| lookup(name).map(|value| (name.to_owned(), value)))
            .collect();
        Self {
            builtin: lookup(BUILTIN_VAR),
            defines,
            target: lookup(TARGET_VAR),
            override_order: lookup(OVERRIDE_VAR),
        }
    }

    /// Variables a user may set to steer detection.
    pub fn watched_vars() -> impl Iterator<Item = &'static str> {
        define_names().chain(std::iter::once(OVERRIDE_VAR))
    }

    /// Add a named value.
    #[must_use]
    pub fn define(mut self, name: &str, value: &str) -> Self {
        self.defines.insert(name.to_owned(), value.to_owned());
        self
    }
}

fn define_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_FLAGS
        .iter()
        .map(|&(name, _)| name)
        .chain(
            MACRO_TRIPLES
                .iter()
                .flat_map(|triple| [triple.order, triple.little, triple.big]),
        )
}

/// Follow a value through other names, so `BYTE_ORDER=__BYTE_ORDER`
/// compares by what `__BYTE_ORDER` holds.
fn expand<'a>(defines: &'a BTreeMap<String, String>, name: &str) -> Option<&'a str> {
    const MAX_HOPS: usize = 8;

    let mut value = defines.get(name)?.trim();
    for _ in 0..MAX_HOPS {
        match defines.get(value) {
            Some(next) => value = next.trim(),
            None => break,
        }
    }
    Some(value)
}

fn builtin_order(signals: &Signals) -> Option<ByteOrder> {
    if let Some(order) = signals
        .builtin
        .as_deref()
        .and_then(|value| value.parse().ok())
    {
        return Some(order);
    }
    BUILTIN_FLAGS
        .iter()
        .find(|(name, _)| signals.defines.contains_key(*name))
        .map(|&(_, order)| order)
}

fn macro_order(defines: &BTreeMap<String, String>) -> Option<ByteOrder> {
    let selected = |order| MACRO_TRIPLES.iter().any(|triple| triple.selects(defines, order));
    if selected(ByteOrder::Big) {
        return Some(ByteOrder::Big);
    }
    if selected(ByteOrder::Little) {
        return Some(ByteOrder::Little);
    }
    bare_flag_order(defines)
}

/// A lone `_BIG_ENDIAN` or `_LITTLE_ENDIAN` flag with no `_BYTE_ORDER`.
///
/// Headers that define both as constants are left to the triple check.
fn bare_flag_order(defines: &BTreeMap<String, String>) -> Option<ByteOrder> {
    if defines.contains_key("_BYTE_ORDER") {
        return None;
    }
    match (
        defines.contains_key("_BIG_ENDIAN"),
        defines.contains_key("_LITTLE_ENDIAN"),
    ) {
        (true, false) => Some(ByteOrder::Big),
        (false, true) => Some(ByteOrder::Little),
        _ => None,
    }
}

fn resolved(rule: Rule) -> impl Fn(ByteOrder) -> Resolution {
    move |order| Resolution { order, rule }
}

fn detect(signals: &Signals) -> Option<Resolution> {
    builtin_order(signals)
        .map(resolved(Rule::Builtin))
        .or_else(|| macro_order(&signals.defines).map(resolved(Rule::ByteOrderMacros)))
        .or_else(|| {
            signals
                .target
                .as_deref()
                .and_then(target_order)
                .map(resolved(Rule::Architecture))
        })
}

/// Resolve the host byte order from `signals`.
///
/// # Errors
///
/// Returns [`DetectError::Undetermined`] when no signal applies and no
/// override is given, [`DetectError::OverrideConflict`] when an override
/// contradicts a conclusive signal, and [`DetectError::InvalidOverride`]
/// when the override names neither order.
pub fn resolve(signals: &Signals) -> Result<Resolution, DetectError> {
    let given = signals
        .override_order
        .as_deref()
        .map(str::parse::<ByteOrder>)
        .transpose()?;

    match (detect(signals), given) {
        (Some(resolution), Some(given)) if given != resolution.order => {
            Err(DetectError::OverrideConflict {
                given,
                detected: resolution.order,
                rule: resolution.rule,
            })
        }
        (Some(resolution), _) => Ok(resolution),
        (None, Some(order)) => Ok(Resolution {
            order,
            rule: Rule::Override,
        }),
        (None, None) => Err(DetectError::Undetermined {
            target: signals
                .target
                .clone()
                .unwrap_or_else(|| "<unknown>".to_owned()),
        }),
    }
}
