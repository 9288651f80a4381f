//! Hierarchical location helpers.

/// Final component of a hierarchical location.
///
/// Accepts plain paths (`/warehouse/orders`) and URIs
/// (`hdfs://nn:8020/warehouse/orders`); the scheme and authority are never
/// part of the leaf. Trailing separators are ignored, so `/a/b/` yields `b`.
/// The root (and an empty path) yields an empty string.
pub fn leaf_component(location: &str) -> &str {
    let path = strip_scheme_and_authority(location);
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

fn strip_scheme_and_authority(location: &str) -> &str {
    match location.split_once("://") {
        Some((_scheme, rest)) => rest.split_once('/').map_or("", |(_authority, path)| path),
        None => location,
    }
}
