//! Canonical display names for individual endpoints.
//!
//! Strips the random suffix the planner appends to temporary intermediates
//! and keeps versioned-store names readable.

use crate::defaults::NULL_IDENTIFIER;
use crate::descriptor::SourceDescriptor;
use crate::paths::leaf_component;
use regex::Regex;
use std::sync::LazyLock;

/// `<base>_<counter>_<32 uppercase alphanumerics>`
///
/// The base never spans a line terminator (`\r`, `\n`, NEL, LS, PS).
static TEMP_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^\r\n\x{85}\x{2028}\x{2029}]*?)_[0-9]+_[A-Z0-9]{32}$").unwrap()
});

static ALL_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Strip a generated temporary suffix, if `name` carries one.
pub fn canonical_name(name: &str) -> &str {
    match TEMP_SUFFIX.captures(name).and_then(|caps| caps.get(1)) {
        Some(base) => base.as_str(),
        None => name,
    }
}

/// Display name of a non-composite endpoint.
///
/// Path-backed endpoints are reduced to their leaf component. Temporary
/// endpoints lose their generated suffix when `strip_temp_suffix` is set.
/// A purely numeric result is treated as a store version and prefixed
/// with the parent segment of the raw identifier (`mystore/7`).
pub fn resolve_path_name(descriptor: &SourceDescriptor, strip_temp_suffix: bool) -> String {
    let raw = descriptor.identifier().unwrap_or(NULL_IDENTIFIER);

    let mut name = if descriptor.is_path() {
        leaf_component(raw)
    } else {
        raw
    };

    if strip_temp_suffix && descriptor.is_temporary() {
        let base = canonical_name(name);
        if base.len() != name.len() {
            tracing::trace!(from = name, to = base, "stripped temporary suffix");
        }
        name = base;
    }

    if ALL_DIGITS.is_match(name) {
        if let Some(parent) = version_parent(raw) {
            return format!("{}/{}", parent, name);
        }
    }

    name.to_string()
}

/// Second-to-last `/` segment of `raw`, ignoring trailing empty segments.
fn version_parent(raw: &str) -> Option<&str> {
    let mut tokens: Vec<&str> = raw.split('/').collect();
    while tokens.last() == Some(&"") {
        tokens.pop();
    }
    if tokens.len() > 1 {
        Some(tokens[tokens.len() - 2])
    } else {
        None
    }
}
