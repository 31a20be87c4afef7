//! Build descriptor parser
//!
//! Finds the line that declares the published version, e.g. in a
//! `build.gradle.kts` publication block:
//!
//! ```text
//! publishing {
//!     publications {
//!         register<MavenPublication>("release") {
//!             version = "0.1.4"
//!         }
//!     }
//! }
//! ```
//!
//! Only the first matching line counts. Later declarations are never read.

use std::io::{self, BufRead};

use regex::Regex;
use tracing::debug;

/// A version declaration matched in descriptor text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMatch {
    /// Quoted value, digits and dots only
    pub version: String,
    /// Line number (0-indexed)
    pub line: usize,
    /// Byte column of the value within the line (0-indexed)
    pub column: usize,
}

/// Parser for version declaration lines
pub struct DescriptorParser {
    /// Regex for `version = "1.2.3"` with free surrounding whitespace
    version_line_re: Regex,
}

impl DescriptorParser {
    pub const VERSION_LINE_PATTERN: &'static str =
        r#"^\s*version\s*=\s*"(?<version>[0-9.]+)"\s*$"#;

    pub fn new() -> Self {
        Self {
            version_line_re: Regex::new(Self::VERSION_LINE_PATTERN)
                .expect("version line pattern is a valid regex"),
        }
    }

    /// Match a single line, returning the declared value and its column
    pub fn match_line<'a>(&self, line: &'a str) -> Option<(&'a str, usize)> {
        let caps = self.version_line_re.captures(line)?;
        let version = caps.name("version")?;
        Some((version.as_str(), version.start()))
    }

    /// Scan lines in order and stop at the first version declaration.
    ///
    /// Read errors (including invalid UTF-8) are returned as soon as they
    /// occur; lines after the first match are never pulled from the reader.
    pub fn scan<R: BufRead>(&self, reader: R) -> io::Result<Option<VersionMatch>> {
        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some((version, column)) = self.match_line(&line) {
                debug!("Version declaration {} found on line {}", version, line_num);
                return Ok(Some(VersionMatch {
                    version: version.to_string(),
                    line: line_num,
                    column,
                }));
            }
        }

        Ok(None)
    }

    /// Scan in-memory descriptor content
    pub fn parse(&self, content: &str) -> Option<VersionMatch> {
        // Reading from a byte slice cannot fail.
        self.scan(content.as_bytes()).ok().flatten()
    }
}

impl Default for DescriptorParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"version = "0.1.4""#, Some("0.1.4"))]
    #[case(r#"            version = "0.1.4""#, Some("0.1.4"))]
    #[case("\tversion = \"0.6.9\"", Some("0.6.9"))]
    #[case(r#"version="1.2.3""#, Some("1.2.3"))]
    #[case(r#"  version   =   "1.2.3"   "#, Some("1.2.3"))]
    #[case("  version = \"1.2.3\"\r", Some("1.2.3"))]
    #[case(r#"version = "1.2.3.4""#, Some("1.2.3.4"))]
    #[case(r#"version = "1""#, Some("1"))]
    #[case(r#"version = "1.2.3-beta""#, None)] // value limited to digits and dots
    #[case(r#"version = "v1.2.3""#, None)]
    #[case(r#"version = """#, None)]
    #[case(r#"version = '1.2.3'"#, None)]
    #[case(r#"version = "1.2.3" // release"#, None)]
    #[case(r#"versionName = "1.2.3""#, None)]
    #[case(r#"tokio = { version = "1.49", features = ["full"] }"#, None)]
    #[case(r#"// version = "1.2.3""#, None)]
    #[case(r#"VERSION = "1.2.3""#, None)]
    #[case("", None)]
    fn match_line_returns_expected(#[case] line: &str, #[case] expected: Option<&str>) {
        let parser = DescriptorParser::new();
        assert_eq!(parser.match_line(line).map(|(v, _)| v), expected);
    }

    #[test]
    fn match_line_reports_column_of_value() {
        let parser = DescriptorParser::new();
        let (version, column) = parser.match_line(r#"    version = "0.6.9""#).unwrap();
        assert_eq!(version, "0.6.9");
        assert_eq!(column, 15);
    }

    #[test]
    fn parse_extracts_version_from_gradle_publication() {
        let parser = DescriptorParser::new();
        let content = r#"android {
    namespace = "ai.example"
    compileSdk = 34
}

publishing {
    publications {
        register<MavenPublication>("release") {
            groupId = "ai.example"
            artifactId = "client-sdk"
            version = "0.1.4"
        }
    }
}
"#;
        let result = parser.parse(content).unwrap();
        assert_eq!(
            result,
            VersionMatch {
                version: "0.1.4".to_string(),
                line: 10,
                column: 23,
            }
        );
    }

    #[test]
    fn parse_first_declaration_wins() {
        let parser = DescriptorParser::new();
        let content = r#"
  version = "1.0.0"
  version = "2.0.0"
"#;
        let result = parser.parse(content).unwrap();
        assert_eq!(result.version, "1.0.0");
        assert_eq!(result.line, 1);
    }

    #[test]
    fn parse_skips_non_matching_version_lines_before_declaration() {
        let parser = DescriptorParser::new();
        let content = r#"
  version = "1.0.0-SNAPSHOT"
  version = libs.versions.sdk
  version = "1.0.1"
"#;
        let result = parser.parse(content).unwrap();
        assert_eq!(result.version, "1.0.1");
        assert_eq!(result.line, 3);
    }

    #[test]
    fn parse_returns_none_without_declaration() {
        let parser = DescriptorParser::new();
        let content = r#"plugins {
    `maven-publish`
}
"#;
        assert_eq!(parser.parse(content), None);
    }

    #[test]
    fn scan_propagates_invalid_utf8() {
        let parser = DescriptorParser::new();
        let content: &[u8] = b"plugins {}\n\xff\xfe\n  version = \"1.0.0\"\n";
        let err = parser.scan(content).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn scan_stops_before_invalid_content_after_first_match() {
        let parser = DescriptorParser::new();
        let content: &[u8] = b"  version = \"1.0.0\"\n\xff\xfe\n";
        let result = parser.scan(content).unwrap().unwrap();
        assert_eq!(result.version, "1.0.0");
    }
}
