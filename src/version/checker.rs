//! Version consistency check between a build descriptor and a client constant

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::parser::descriptor::DescriptorParser;
use crate::version::error::CheckError;
use crate::version::types::{VersionDeclaration, VersionString};

/// Checks that a descriptor declares the same version the client reports
#[derive(Default)]
pub struct VersionConsistencyChecker {
    parser: DescriptorParser,
}

impl VersionConsistencyChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the authoritative version declaration from a descriptor.
    ///
    /// The file handle is held only for the duration of the scan and is
    /// closed on every return path.
    pub fn extract(&self, descriptor_path: &Path) -> Result<VersionDeclaration, CheckError> {
        debug!("Scanning descriptor {:?}", descriptor_path);

        let unreadable = |source: io::Error| CheckError::DescriptorUnreadable {
            path: descriptor_path.to_path_buf(),
            source,
        };

        let file = File::open(descriptor_path).map_err(unreadable)?;
        let found = self
            .parser
            .scan(BufReader::new(file))
            .map_err(unreadable)?;

        let Some(found) = found else {
            warn!("No version declaration in {:?}", descriptor_path);
            return Err(CheckError::NotFound {
                path: descriptor_path.to_path_buf(),
            });
        };

        Ok(VersionDeclaration {
            path: descriptor_path.to_path_buf(),
            version: VersionString::new(found.version),
            line: found.line,
            column: found.column,
        })
    }

    /// Check the descriptor against `expected`, returning the declaration on success
    pub fn verify(
        &self,
        descriptor_path: &Path,
        expected: &VersionString,
    ) -> Result<VersionDeclaration, CheckError> {
        let declaration = self.extract(descriptor_path)?;

        if declaration.version != *expected {
            warn!(
                "Descriptor {:?} declares {} but client reports {}",
                descriptor_path, declaration.version, expected
            );
            return Err(CheckError::Mismatch {
                declared: declaration.version,
                expected: expected.clone(),
                line: declaration.line,
            });
        }

        info!(
            "Descriptor {:?} matches client version {}",
            descriptor_path, expected
        );
        Ok(declaration)
    }

    /// Check the descriptor against `expected`
    pub fn check(&self, descriptor_path: &Path, expected: &VersionString) -> Result<(), CheckError> {
        self.verify(descriptor_path, expected).map(|_| ())
    }
}

/// Run a one-shot check with a fresh checker
pub fn check(descriptor_path: &Path, expected: &VersionString) -> Result<(), CheckError> {
    VersionConsistencyChecker::new().check(descriptor_path, expected)
}
