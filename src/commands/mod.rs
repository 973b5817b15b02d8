//! Command implementations for BundleMe CLI

pub mod bundle;
pub mod completions;
pub mod version;
