//! Parser layer
//! - descriptor.rs: version declaration scanner for build descriptors

pub mod descriptor;

pub use descriptor::{DescriptorParser, VersionMatch};
