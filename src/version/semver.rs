use semver::Version;
use serde::Serialize;

/// Direction of a version mismatch, for reporting only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Drift {
    /// Descriptor declares a newer version than the client reports
    Ahead,
    /// Descriptor declares an older version than the client reports
    Behind,
    /// Both sides are equal once normalized (e.g. `1.0` vs `1.0.0`)
    Equivalent,
    /// At least one side is not a semver-like version
    Incomparable,
}

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "1" or "1.2" by padding with zeros.
/// Versions with more than three components do not parse.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Describe how the declared version relates to the expected one.
///
/// Never used to decide pass or fail.
pub fn drift(declared: &str, expected: &str) -> Drift {
    let (Some(declared), Some(expected)) = (parse_version(declared), parse_version(expected))
    else {
        return Drift::Incomparable;
    };

    match declared.cmp(&expected) {
        std::cmp::Ordering::Greater => Drift::Ahead,
        std::cmp::Ordering::Less => Drift::Behind,
        std::cmp::Ordering::Equal => Drift::Equivalent,
    }
}
