//! Client session metadata

/// SDK version reported by this client.
///
/// A literal, independent of `CARGO_PKG_VERSION`; `tests/client_version.rs`
/// checks it against the `version` declared in `Cargo.toml`.
pub const SDK_VERSION: &str = "0.1.4";
