//! Configuration module for copy operations
//!
//! This module provides the immutable `CopyConfig` and its builder. A host
//! builds one at startup and hands it to [`crate::Copier`]; nothing in the
//! crate reads host flags from globals.

pub mod builder;
pub mod types;

pub use builder::CopyConfigBuilder;
pub use types::CopyConfig;
