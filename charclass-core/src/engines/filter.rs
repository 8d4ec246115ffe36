// charclass-core/src/engines/filter.rs
//! Stripping and structured reassembly.
//!
//! Flat classes only strip. UUID, IPv4 and IPv6 strip first, then regroup what
//! survived with a capturing pattern and put the separators back. When the
//! surviving text does not fit the expected groups the fallbacks differ:
//! UUID returns the stripped text, IPv4 and IPv6 return an empty string.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::catalog::{ALPHANUMERIC, DIGITS, IPV4_OCTET_GROUP, IPV6_HEXTET_GROUP, UUID_GROUPS, WHITESPACE};
use crate::config::EngineOptions;
use crate::engines::matcher::{capture_groups, glue};
use crate::errors::CharClassError;
use crate::patterns::builder::{build_replace_pattern, Framing};

/// Number of hextets in a full IPv6 address.
pub const IPV6_HEXTETS: usize = 8;

const UUID_TEMPLATE: &str = "${1}-${2}-${3}-${4}-${5}";

/// Replaces every match of the replace-shaped pattern with `replacement`.
///
/// `replacement` is a regex replacement template, so `$0` refers to the run
/// being replaced.
pub fn replace(
    subject: &str,
    fragment: &str,
    replacement: &str,
    framing: Framing<'_>,
    options: &EngineOptions,
) -> Result<String, CharClassError> {
    let pattern = build_replace_pattern(fragment, framing);
    let regex = pattern.compile(options)?;
    Ok(regex.replace_all(subject, replacement).into_owned())
}

/// Strips to alphanumerics and regroups as 8-4-4-4-12. Anything other than
/// exactly 32 hex digits is returned stripped but ungrouped.
pub fn uuid(subject: &str, options: &EngineOptions) -> Result<String, CharClassError> {
    let stripped = replace(subject, ALPHANUMERIC, "", Framing::replace(), options)?;
    let regrouped = replace(
        &stripped,
        UUID_GROUPS,
        UUID_TEMPLATE,
        Framing::new("^", "$").case_insensitive(),
        options,
    )?;
    if regrouped == stripped {
        debug!("UUID regrouping did not apply to '{}'; returning stripped text.", stripped);
    }
    Ok(regrouped)
}

/// Strips to digits and glues four 0-255 octets with `.`. Digits that do not
/// split into exactly four octets give an empty string.
pub fn ipv4(subject: &str, options: &EngineOptions) -> Result<String, CharClassError> {
    let stripped = replace(subject, DIGITS, "", Framing::replace(), options)?;
    glue(&stripped, &IPV4_OCTET_GROUP.repeat(4), ".", false, Framing::exact(), options)
}

/// Strips to alphanumerics and regroups into hextets.
///
/// The group count is `len / 4` and the groups are captured from the start of
/// the stripped text; a trailing remainder shorter than a full group is dropped.
/// Fewer than eight groups are written with `::` after the first group; eight
/// groups are written in full. More than eight, or none, give an empty string.
/// Hextet values are not range checked.
pub fn ipv6(subject: &str, options: &EngineOptions) -> Result<String, CharClassError> {
    let compact = replace(subject, WHITESPACE, "", Framing::new("", "+"), options)?;
    let stripped = replace(&compact, ALPHANUMERIC, "", Framing::replace(), options)?;

    let group_count = stripped.chars().count() / 4;
    if group_count == 0 || group_count > IPV6_HEXTETS {
        debug!("'{}' yields {} hextet groups; returning empty string.", stripped, group_count);
        return Ok(String::new());
    }

    let groups = capture_groups(
        &stripped,
        &IPV6_HEXTET_GROUP.repeat(group_count),
        false,
        Framing::new("^", "").case_insensitive(),
        options,
    )?;
    let Some(groups) = groups else {
        debug!("'{}' does not split into {} hextets; returning empty string.", stripped, group_count);
        return Ok(String::new());
    };

    Ok(join_hextets(&groups))
}

fn join_hextets(groups: &[String]) -> String {
    if groups.len() == IPV6_HEXTETS {
        return groups.join(":");
    }
    let mut out = String::new();
    let mut rest = groups.iter();
    if let Some(first) = rest.next() {
        out.push_str(first);
        out.push_str("::");
    }
    if let Some(second) = rest.next() {
        out.push_str(second);
    }
    for group in rest {
        out.push(':');
        out.push_str(group);
    }
    out
}
