//! Extraction of the single integer parameter carried by the path info.

/// The header in which Spin passes the path relative to the component route.
pub const PATH_INFO_HEADER: &str = "spin-path-info";

/// Parses the integer parameter from a path info such as `/42`.
///
/// The path info must be exactly one `/`-prefixed segment holding a base-10
/// integer. Anything else yields `None`.
pub fn parse_param(path_info: &str) -> Option<i64> {
    let mut segments = path_info.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(""), Some(segment), None) => segment.parse().ok(),
        _ => None,
    }
}

/// Like [`parse_param`], falling back to `default` when no parameter is present.
pub fn param_or(path_info: &str, default: i64) -> i64 {
    parse_param(path_info).unwrap_or(default)
}
