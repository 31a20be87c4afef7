//! Common types for version checking

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Opaque version token such as `0.6.9` or `1.2.3.4`.
///
/// Compared by exact string equality. No numeric parsing or normalization
/// happens here, so `1.0` and `1.0.0` are different versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionString(String);

impl VersionString {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VersionString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VersionString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VersionString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The authoritative version declaration found in a descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDeclaration {
    /// Descriptor the declaration was read from
    pub path: PathBuf,
    /// Declared version (the quoted value)
    pub version: VersionString,
    /// Line number (0-indexed)
    pub line: usize,
    /// Byte column of the version value within the line (0-indexed)
    pub column: usize,
}
