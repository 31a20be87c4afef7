//! Version consistency layer
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Descriptor  │────▶│   Parser    │────▶│   Checker   │◀──── expected
//! │   (file)    │     │ (first hit) │     │ (exact eq)  │      (client)
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │   Semver    │
//!                                         │(drift hint) │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Reads the descriptor and compares the declared version
//! - [`error`]: Error type for a failed check
//! - [`semver`]: Informational ordering between mismatched versions
//! - [`types`]: `VersionString` and `VersionDeclaration`

pub mod checker;
pub mod error;
pub mod semver;
pub mod types;

pub use checker::{VersionConsistencyChecker, check};
pub use error::CheckError;
pub use types::{VersionDeclaration, VersionString};
