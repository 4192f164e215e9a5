//! Command implementations.

pub mod completion;
pub mod config;
pub mod deployment;
pub mod version;
