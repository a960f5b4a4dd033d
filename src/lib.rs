//! Gensrc - a build-target source-list resolver.
//!
//! This crate provides the core library functionality for Gensrc:
//! parsing declarative `.sources` list files, resolving the correct
//! list-file pair for each (host platform, profile) build axis, and
//! aggregating the final set of source files for a library.

pub mod aggregate;
pub mod core;
pub mod matcher;
pub mod ops;
pub mod parser;
pub mod resolver;
pub mod util;

pub use core::{
    list::{ListId, ListRegistry, SourceList},
    resolution::Resolution,
    target::Target,
    target_key::TargetKey,
};

pub use util::diagnostic::{Diagnostic, Diagnostics, Severity};
