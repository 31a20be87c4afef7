//! Descriptor fixture utilities

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A trimmed-down Android library build script with a publication block
pub const GRADLE_DESCRIPTOR: &str = r#"plugins {
    alias(libs.plugins.android.library)
    `maven-publish`
}

android {
    namespace = "ai.example"
    compileSdk = 34
}

publishing {
    publications {
        register<MavenPublication>("release") {
            groupId = "ai.example"
            artifactId = "client-sdk"
            version = "{VERSION}"
        }
    }
}
"#;

/// Render `GRADLE_DESCRIPTOR` with the given version
pub fn gradle_descriptor(version: &str) -> String {
    GRADLE_DESCRIPTOR.replace("{VERSION}", version)
}

/// Write `content` to `file_name` inside a fresh temporary directory.
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn create_descriptor(file_name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(file_name);
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}
