//! CLI command implementations.

pub mod analyze;
pub mod common;
pub mod convert;
pub mod detect;
pub mod targets;
pub mod version;
