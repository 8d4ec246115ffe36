//! The fixed catalog of character-class fragments and structured patterns.
//!
//! Fragments are written for the body of a bracket class (`[...]`), so a literal
//! `-` is always escaped. That keeps them valid whichever token the builder puts
//! in front of them. Structured patterns are full sequence expressions and are
//! framed by [`Framing::exact`](crate::patterns::builder::Framing::exact).
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::str::FromStr;

use crate::errors::CharClassError;

/// Unicode letters and combining marks.
pub const ALPHA: &str = r"\pL\pM";
/// Letters, marks and numbers.
pub const ALPHANUMERIC: &str = r"\pL\pM\pN";
/// Letters, marks, numbers and the literals `.`, `_` and `-`.
pub const ALPHADASH: &str = r"\pL\pM\pN._\-";
/// ASCII digits only.
pub const DIGITS: &str = "0-9";
/// Signed decimal grammar. Framed as a bracket class its metacharacters are
/// set members, which is how both the numeric filter and matcher use it.
pub const NUMERIC: &str = r"\-?\d*(\.\d+)?";

/// The whitespace token the match builder inserts when whitespace is allowed.
pub const WHITESPACE: &str = r"\s";

/// Five capturing hex groups, 8-4-4-4-12, used to regroup a stripped UUID.
pub const UUID_GROUPS: &str =
    "([0-9a-f]{8})([0-9a-f]{4})([0-9a-f]{4})([0-9a-f]{4})([0-9a-f]{12})";

/// One capturing IPv6 hextet of 1-4 hex digits.
pub const IPV6_HEXTET_GROUP: &str = "([0-9a-f]{1,4})";

/// One capturing IPv4 octet constrained to 0-255.
pub const IPV4_OCTET_GROUP: &str = "((?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]|[0-9]))";

/// Canonical hyphenated UUID.
pub const UUID: &str = "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}";

/// Dotted-quad IPv4 address.
pub const IPV4: &str = concat!(
    r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]|[0-9])\.",
    r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]|[0-9])\.",
    r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]|[0-9])\.",
    r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]|[0-9])",
);

/// IPv6 address in full, compressed or IPv4-suffixed form.
pub const IPV6: &str = concat!(
    "(?:[0-9a-f]{1,4}:){7}[0-9a-f]{1,4}",
    "|(?:[0-9a-f]{1,4}:){1,7}:",
    "|(?:[0-9a-f]{1,4}:){1,6}:[0-9a-f]{1,4}",
    "|(?:[0-9a-f]{1,4}:){1,5}(?::[0-9a-f]{1,4}){1,2}",
    "|(?:[0-9a-f]{1,4}:){1,4}(?::[0-9a-f]{1,4}){1,3}",
    "|(?:[0-9a-f]{1,4}:){1,3}(?::[0-9a-f]{1,4}){1,4}",
    "|(?:[0-9a-f]{1,4}:){1,2}(?::[0-9a-f]{1,4}){1,5}",
    "|[0-9a-f]{1,4}:(?::[0-9a-f]{1,4}){1,6}",
    "|:(?:(?::[0-9a-f]{1,4}){1,7}|:)",
    r"|(?:[0-9a-f]{1,4}:){6}(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]|[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]|[0-9])",
    r"|(?:[0-9a-f]{1,4}:){1,4}:(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]|[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]|[0-9])",
    r"|::(?:ffff(?::0{1,4})?:)?(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]|[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]|[0-9])",
);

/// The closed set of built-in classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Alpha,
    Alphadash,
    Alphanumeric,
    Digits,
    Numeric,
    Uuid,
    Ipv4,
    Ipv6,
}

impl CharClass {
    pub const ALL: [CharClass; 8] = [
        CharClass::Alpha,
        CharClass::Alphadash,
        CharClass::Alphanumeric,
        CharClass::Digits,
        CharClass::Numeric,
        CharClass::Uuid,
        CharClass::Ipv4,
        CharClass::Ipv6,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Alpha => "alpha",
            CharClass::Alphadash => "alphadash",
            CharClass::Alphanumeric => "alphanumeric",
            CharClass::Digits => "digits",
            CharClass::Numeric => "numeric",
            CharClass::Uuid => "uuid",
            CharClass::Ipv4 => "ipv4",
            CharClass::Ipv6 => "ipv6",
        }
    }

    /// Bracket fragment for the flat classes, `None` for structured formats.
    pub fn fragment(self) -> Option<&'static str> {
        match self {
            CharClass::Alpha => Some(ALPHA),
            CharClass::Alphadash => Some(ALPHADASH),
            CharClass::Alphanumeric => Some(ALPHANUMERIC),
            CharClass::Digits => Some(DIGITS),
            CharClass::Numeric => Some(NUMERIC),
            CharClass::Uuid | CharClass::Ipv4 | CharClass::Ipv6 => None,
        }
    }

    /// Structured formats are reassembled when filtering and ignore the
    /// whitespace flag when matching.
    pub fn is_structured(self) -> bool {
        self.fragment().is_none()
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharClass {
    type Err = CharClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "alpha" => Ok(CharClass::Alpha),
            "alphadash" | "alpha_dash" => Ok(CharClass::Alphadash),
            "alphanumeric" | "alpha_num" => Ok(CharClass::Alphanumeric),
            "digits" => Ok(CharClass::Digits),
            "numeric" => Ok(CharClass::Numeric),
            "uuid" => Ok(CharClass::Uuid),
            "ip" | "ipv4" => Ok(CharClass::Ipv4),
            "ipv6" => Ok(CharClass::Ipv6),
            _ => Err(CharClassError::UnknownClass(s.to_string())),
        }
    }
}
