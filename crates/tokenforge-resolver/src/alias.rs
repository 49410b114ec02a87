//! Alias resolution.
//!
//! An alias is a string that is exactly `{<path>}`. It resolves one hop
//! against the primitive map: a primitive that is itself an alias is returned
//! as-is.

use tokenforge_core::{PrimitiveMap, Scalar};
use tracing::debug;

/// Path referenced by `raw` if it is a whole-string alias.
pub fn alias_target(raw: &str) -> Option<&str> {
    let target = raw.strip_prefix('{')?.strip_suffix('}')?;
    if target.is_empty() || target.contains('}') {
        return None;
    }
    Some(target)
}

/// Resolve a leaf against the primitives.
///
/// Non-strings and non-alias strings pass through unchanged. An alias whose
/// target is missing (or null) also passes through, leaving the `{...}` text
/// as the value.
pub fn resolve_alias<'a>(raw: &'a Scalar, primitives: &'a PrimitiveMap) -> &'a Scalar {
    let Some(target) = raw.as_str().and_then(alias_target) else {
        return raw;
    };

    match primitives.get(target) {
        Some(value) if !value.is_null() => value,
        _ => {
            debug!(alias = target, "unresolved alias kept as literal");
            raw
        }
    }
}
