//! Build-consistency gate for client SDK versions.
//!
//! Reads the version a build descriptor declares (for example
//! `version = "0.1.4"` in `build.gradle.kts`) and checks it against the
//! version constant compiled into the client.

pub mod config;
pub mod logging;
pub mod parser;
pub mod report;
pub mod session;
pub mod version;
