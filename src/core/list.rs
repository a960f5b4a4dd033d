//! Parsed list files and the registry arena that owns them.
//!
//! A `SourceList` is the in-memory form of one declarative list file.
//! Lists are owned by a `ListRegistry`, an arena keyed by canonical file
//! path, and referenced everywhere else by copyable `ListId` indices.
//! Registering a list *before* its body is read is what breaks include
//! cycles: a list that includes itself resolves to its own, still
//! populating, entry instead of recursing forever.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Index of a `SourceList` within its owning `ListRegistry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(usize);

/// One `(base directory, pattern)` entry from a list file.
///
/// The pattern is matched relative to `base_dir`; the resulting paths are
/// later re-expressed relative to the library root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    pub base_dir: PathBuf,
    pub pattern: String,
}

impl PatternEntry {
    pub fn new(base_dir: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        PatternEntry {
            base_dir: base_dir.into(),
            pattern: pattern.into(),
        }
    }
}

/// One parsed list file.
#[derive(Debug)]
pub struct SourceList {
    /// Canonical absolute path of the file. Registry key.
    path: PathBuf,
    /// Whether this file was parsed in the exclusions role.
    is_exclusions: bool,
    /// Ordered inclusion patterns, in file line order.
    pub includes: Vec<PatternEntry>,
    /// Ordered exclusion patterns, in file line order. Inline exclusions
    /// land here too, even inside a sources-role list.
    pub excludes: Vec<PatternEntry>,
    /// Lists pulled in via `#include`, in directive order.
    pub children: Vec<ListId>,
}

impl SourceList {
    pub fn new(path: impl Into<PathBuf>, is_exclusions: bool) -> Self {
        SourceList {
            path: path.into(),
            is_exclusions,
            includes: Vec::new(),
            excludes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_exclusions(&self) -> bool {
        self.is_exclusions
    }

    /// A list that declared nothing at all. Used to decide whether an
    /// empty final result is legitimate.
    pub fn is_trivially_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty() && self.children.is_empty()
    }
}

/// Arena of parsed lists, keyed by canonical path.
///
/// Sources-role and exclusions-role lists live in separate registries;
/// the same on-disk file could in principle serve both roles.
#[derive(Debug, Default)]
pub struct ListRegistry {
    lists: Vec<SourceList>,
    by_path: HashMap<PathBuf, ListId>,
    /// Every canonical path ever looked up, hit or miss. Consulted by the
    /// orphaned-legacy-filename check after resolution.
    probed: HashSet<PathBuf>,
}

impl ListRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously registered list, recording the probe.
    pub fn lookup(&mut self, path: &Path) -> Option<ListId> {
        self.probed.insert(path.to_path_buf());
        self.by_path.get(path).copied()
    }

    /// Register a list under its canonical path. The caller fills in the
    /// body afterwards through `get_mut`.
    pub fn insert(&mut self, list: SourceList) -> ListId {
        let id = ListId(self.lists.len());
        self.probed.insert(list.path.clone());
        self.by_path.insert(list.path.clone(), id);
        self.lists.push(list);
        id
    }

    pub fn get(&self, id: ListId) -> &SourceList {
        &self.lists[id.0]
    }

    pub fn get_mut(&mut self, id: ListId) -> &mut SourceList {
        &mut self.lists[id.0]
    }

    /// Whether any lookup or insert touched this path during the run.
    pub fn was_probed(&self, path: &Path) -> bool {
        self.probed.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceList> {
        self.lists.iter()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
