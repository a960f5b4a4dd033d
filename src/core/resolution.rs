//! The aggregate output of one resolver invocation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::list::ListRegistry;
use crate::core::target::Target;
use crate::core::target_key::TargetKey;
use crate::util::diagnostic::Diagnostics;

/// Everything one top-level resolution produced: the target map, the two
/// list registries, and the accumulated diagnostics.
///
/// Created once per invocation; the registries and diagnostics are filled
/// in as resolution walks the list-file graph, then the whole result is
/// handed to the caller read-only.
#[derive(Debug)]
pub struct Resolution {
    /// Absolute library root all result paths are relative to.
    root: PathBuf,
    /// Resolved targets by key. A `BTreeMap` keeps iteration stable.
    pub targets: BTreeMap<TargetKey, Target>,
    /// Registry of sources-role lists.
    pub sources: ListRegistry,
    /// Registry of exclusions-role lists, kept separate from sources.
    pub exclusions: ListRegistry,
    /// Recoverable problems recorded during the run.
    pub diagnostics: Diagnostics,
}

impl Resolution {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Resolution {
            root: root.into(),
            targets: BTreeMap::new(),
            sources: ListRegistry::new(),
            exclusions: ListRegistry::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn target(&self, key: &TargetKey) -> Option<&Target> {
        self.targets.get(key)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.error_count()
    }

    /// Whether any sources-role list parsed during the run declared
    /// anything. When false, an empty final result is legitimate.
    pub fn parsed_nonempty_sources(&self) -> bool {
        self.sources.iter().any(|list| !list.is_trivially_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::list::{PatternEntry, SourceList};

    #[test]
    fn test_empty_resolution() {
        let res = Resolution::new("/tmp/lib");
        assert_eq!(res.error_count(), 0);
        assert!(res.targets.is_empty());
        assert!(!res.parsed_nonempty_sources());
    }

    #[test]
    fn test_parsed_nonempty_sources() {
        let mut res = Resolution::new("/tmp/lib");
        res.sources.insert(SourceList::new("/tmp/lib/empty.sources", false));
        assert!(!res.parsed_nonempty_sources());

        let id = res.sources.insert(SourceList::new("/tmp/lib/a.sources", false));
        res.sources
            .get_mut(id)
            .includes
            .push(PatternEntry::new("/tmp/lib", "*.cs"));
        assert!(res.parsed_nonempty_sources());
    }
}
