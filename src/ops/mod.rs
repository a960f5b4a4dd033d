//! High-level operations.
//!
//! This module contains the implementation of Gensrc commands.

pub mod resolve;

pub use resolve::{
    all_sources, resolve_file_pair, resolve_library, target_sources, unexpectedly_empty,
    ResolveOptions,
};
