//! Release-id matching and numeric version ordering

use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

/// Releases the mod targets: 1.21.x patch versions only
static SUPPORTED_RELEASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1\.21\.\d+$").expect("valid regex"));

/// Whether a manifest id names a release in the supported 1.21.x series
pub fn is_supported_release(id: &str) -> bool {
    SUPPORTED_RELEASE_RE.is_match(id)
}

/// Parse a dotted-numeric version into a semver::Version, normalizing
/// partial versions by padding missing components with zeros.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.21" -> Version(1, 21, 0)
/// - "1.21.4" -> Version(1, 21, 4)
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Sort version ids newest first by numeric component comparison.
/// Unparseable ids sink to the end.
pub fn sort_newest_first(ids: &mut [String]) {
    ids.sort_by(|a, b| match (parse_version(a), parse_version(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
