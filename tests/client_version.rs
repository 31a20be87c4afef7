//! The client's reported SDK version must match the version this crate
//! declares in its own Cargo.toml.

use std::path::Path;

use sdk_version_gate::session::SDK_VERSION;
use sdk_version_gate::version::{VersionConsistencyChecker, VersionString};

#[test]
fn sdk_version_matches_cargo_manifest() {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");

    let declaration = VersionConsistencyChecker::new()
        .verify(&manifest, &VersionString::from(SDK_VERSION))
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(declaration.version.as_str(), SDK_VERSION);
}
