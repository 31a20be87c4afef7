use std::path::{Path, PathBuf};

// =============================================================================
// Descriptor location
// =============================================================================

/// Descriptor file looked up in the anchor directory when no path is given
pub const DEFAULT_DESCRIPTOR_FILE_NAME: &str = "build.gradle.kts";

/// Environment variable holding an explicit descriptor path
pub const DESCRIPTOR_ENV: &str = "SDK_VERSION_GATE_DESCRIPTOR";

/// Environment variable holding the expected client version
pub const EXPECTED_ENV: &str = "SDK_VERSION_GATE_EXPECTED";

// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding a `tracing_subscriber::EnvFilter` directive
pub const LOG_ENV: &str = "SDK_VERSION_GATE_LOG";

/// Filter used when `SDK_VERSION_GATE_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Where to look for the build descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorLocation {
    /// Explicit descriptor path, absolute or relative to `anchor`
    pub path: Option<PathBuf>,
    /// Directory relative paths are resolved against
    pub anchor: Option<PathBuf>,
    /// File name joined onto the anchor when no explicit path is given
    pub file_name: String,
}

impl Default for DescriptorLocation {
    fn default() -> Self {
        Self {
            path: None,
            anchor: None,
            file_name: DEFAULT_DESCRIPTOR_FILE_NAME.to_string(),
        }
    }
}

impl DescriptorLocation {
    /// Resolves the descriptor path against the current directory.
    /// An unavailable current directory falls back to `.`.
    pub fn resolve(&self) -> PathBuf {
        self.resolve_with_env(
            std::env::var(DESCRIPTOR_ENV).ok(),
            std::env::current_dir().ok(),
        )
    }

    /// Resolution order: explicit path, then `env_path`, then
    /// `<anchor>/<file_name>`. The anchor defaults to `current_dir`.
    ///
    /// `path` is normally filled from the same environment variable by the
    /// CLI; `env_path` covers library callers that build the location by hand.
    pub fn resolve_with_env(
        &self,
        env_path: Option<String>,
        current_dir: Option<PathBuf>,
    ) -> PathBuf {
        let anchor = self
            .anchor
            .clone()
            .or(current_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        let explicit = self
            .path
            .clone()
            .or_else(|| env_path.filter(|p| !p.is_empty()).map(PathBuf::from));

        match explicit {
            Some(path) => anchored(&anchor, path),
            None => anchor.join(&self.file_name),
        }
    }
}

fn anchored(anchor: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        anchor.join(path)
    }
}
