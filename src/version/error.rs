use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::version::types::VersionString;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Failed to read descriptor {}: {source}", path.display())]
    DescriptorUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to find SDK version in {}", path.display())]
    NotFound { path: PathBuf },

    #[error("SDK version mismatch: descriptor declares \"{declared}\" but client reports \"{expected}\"")]
    Mismatch {
        declared: VersionString,
        expected: VersionString,
        /// Line of the stale declaration (0-indexed)
        line: usize,
    },
}
