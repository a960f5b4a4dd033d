//! Resolved build targets.

use crate::core::list::ListId;
use crate::core::target_key::TargetKey;

/// One resolved build configuration: a key bound to its list-file pair.
///
/// A fallback target shares its list ids with some more specific target;
/// it records that no dedicated list file was found for its key.
#[derive(Debug, Clone)]
pub struct Target {
    /// The axis this target was resolved for.
    pub key: TargetKey,
    /// The sources list, in the sources registry.
    pub sources: ListId,
    /// The exclusions list, in the exclusions registry, when a
    /// `.exclude.sources` companion exists. An axis-specific sources file
    /// never borrows a less-specific exclusions file.
    pub exclusions: Option<ListId>,
    /// True when this entry reuses another target's lists because no
    /// dedicated file existed for its key.
    pub is_fallback: bool,
}

impl Target {
    pub fn new(key: TargetKey, sources: ListId, exclusions: Option<ListId>) -> Self {
        Target {
            key,
            sources,
            exclusions,
            is_fallback: false,
        }
    }

    /// A fallback entry sharing `from`'s lists, registered under `key`.
    pub fn fallback_from(key: TargetKey, from: &Target) -> Self {
        Target {
            key,
            sources: from.sources,
            exclusions: from.exclusions,
            is_fallback: true,
        }
    }
}
