//! Core data structures for Gensrc.
//!
//! This module contains the foundational types used throughout Gensrc:
//! - Build-axis identity (TargetKey)
//! - Parsed list files and their registry arena (SourceList, ListRegistry)
//! - Resolved targets and the overall resolution result

pub mod list;
pub mod resolution;
pub mod target;
pub mod target_key;

pub use list::{ListId, ListRegistry, SourceList};
pub use resolution::Resolution;
pub use target::Target;
pub use target_key::TargetKey;
