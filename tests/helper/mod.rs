//! Shared test utilities

#![allow(dead_code)]

pub mod descriptor;

pub use descriptor::{GRADLE_DESCRIPTOR, create_descriptor, gradle_descriptor};
