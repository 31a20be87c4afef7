//! Check outcome reporting for the command line

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::version::error::CheckError;
use crate::version::semver::{Drift, drift};
use crate::version::types::{VersionDeclaration, VersionString};

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Mismatch,
    NotFound,
    Unreadable,
}

impl CheckStatus {
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckStatus::Pass)
    }
}

/// Serializable summary of a check, printed as text or JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub status: CheckStatus,
    pub descriptor: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared: Option<VersionString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<VersionString>,
    /// Line of the declaration (0-indexed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Only set for mismatches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift: Option<Drift>,
    pub message: String,
}

impl CheckReport {
    /// Build a report from the result of `VersionConsistencyChecker::verify`
    pub fn from_verify(
        descriptor: &Path,
        expected: &VersionString,
        result: &Result<VersionDeclaration, CheckError>,
    ) -> Self {
        match result {
            Ok(declaration) => Self {
                status: CheckStatus::Pass,
                descriptor: descriptor.to_path_buf(),
                declared: Some(declaration.version.clone()),
                expected: Some(expected.clone()),
                line: Some(declaration.line),
                drift: None,
                message: format!("SDK version {} matches {}", expected, descriptor.display()),
            },
            Err(err) => Self::from_error(descriptor, Some(expected), err),
        }
    }

    /// Build a report from the result of `VersionConsistencyChecker::extract`
    pub fn from_extract(
        descriptor: &Path,
        result: &Result<VersionDeclaration, CheckError>,
    ) -> Self {
        match result {
            Ok(declaration) => Self {
                status: CheckStatus::Pass,
                descriptor: descriptor.to_path_buf(),
                declared: Some(declaration.version.clone()),
                expected: None,
                line: Some(declaration.line),
                drift: None,
                message: format!(
                    "{}:{}:{}: version {}",
                    descriptor.display(),
                    declaration.line + 1,
                    declaration.column + 1,
                    declaration.version
                ),
            },
            Err(err) => Self::from_error(descriptor, None, err),
        }
    }

    fn from_error(descriptor: &Path, expected: Option<&VersionString>, err: &CheckError) -> Self {
        let (status, declared, line, drift) = match err {
            CheckError::DescriptorUnreadable { .. } => (CheckStatus::Unreadable, None, None, None),
            CheckError::NotFound { .. } => (CheckStatus::NotFound, None, None, None),
            CheckError::Mismatch {
                declared,
                expected,
                line,
            } => (
                CheckStatus::Mismatch,
                Some(declared.clone()),
                Some(*line),
                Some(drift(declared.as_str(), expected.as_str())),
            ),
        };

        Self {
            status,
            descriptor: descriptor.to_path_buf(),
            declared,
            expected: expected.cloned(),
            line,
            drift,
            message: err.to_string(),
        }
    }

    /// Single-line human readable form
    pub fn to_text(&self) -> String {
        match self.drift {
            Some(Drift::Ahead) => format!("{} (descriptor is ahead of the client)", self.message),
            Some(Drift::Behind) => format!("{} (descriptor is behind the client)", self.message),
            _ => self.message.clone(),
        }
    }
}
