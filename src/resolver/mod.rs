//! Target resolution.
//!
//! For each build axis, locates the dedicated sources/exclusions list
//! files by trying candidate filename prefixes from most to least
//! specific, and records a fallback entry (sharing the coarser target's
//! lists) when no dedicated file exists.
//!
//! Filename convention: `{platform}_{profile}_{name}.sources`,
//! `{profile}_{name}.sources`, `{platform}_defaultprofile_{name}.sources`
//! (with the old-style `{platform}_{name}.sources` still honored), and
//! `{name}.sources`, each with an optional `.exclude.sources` companion.

pub mod errors;
pub mod prune;

pub use errors::ResolveError;

use std::path::Path;

use crate::core::resolution::Resolution;
use crate::core::target::Target;
use crate::core::target_key::TargetKey;
use crate::parser::{parse_list, Role};
use crate::util::fs;

/// Profile token used in platform-only default filenames.
pub const DEFAULT_PROFILE_TOKEN: &str = "defaultprofile";

/// Suffix of sources list files.
pub const SOURCES_SUFFIX: &str = ".sources";

/// Suffix of exclusions list files.
pub const EXCLUSIONS_SUFFIX: &str = ".exclude.sources";

/// Resolve every (platform, profile) axis for a library.
///
/// `root` must already be canonical. When `prune` is set, redundant
/// fallback entries are stripped after resolution so the target map
/// reflects only meaningfully distinct configurations.
pub fn resolve_targets(
    root: &Path,
    name: &str,
    platforms: &[String],
    profiles: &[String],
    prune: bool,
) -> Resolution {
    let mut resolution = Resolution::new(root);
    let default_key = TargetKey::unqualified();

    try_resolve(
        &mut resolution,
        root,
        &[name.to_string()],
        default_key.clone(),
        None,
    );

    for profile in profiles {
        let profile_key = TargetKey::for_profile(profile);
        try_resolve(
            &mut resolution,
            root,
            &[format!("{}_{}", profile, name)],
            profile_key.clone(),
            Some(&default_key),
        );

        for platform in platforms {
            let fallback = if resolution.targets.contains_key(&profile_key) {
                profile_key.clone()
            } else {
                default_key.clone()
            };
            try_resolve(
                &mut resolution,
                root,
                &[format!("{}_{}_{}", platform, profile, name)],
                TargetKey::new(platform, profile),
                Some(&fallback),
            );
        }

        if prune {
            prune::prune_platforms_for_profile(&mut resolution, profile, platforms);
        }
    }

    for platform in platforms {
        try_resolve(
            &mut resolution,
            root,
            &[
                format!("{}_{}_{}", platform, DEFAULT_PROFILE_TOKEN, name),
                format!("{}_{}", platform, name),
            ],
            TargetKey::for_platform(platform),
            Some(&default_key),
        );
    }

    check_orphaned_platform_files(&mut resolution, root, name, platforms);

    if prune {
        prune::prune_profiles(&mut resolution, profiles);
        prune::prune_platform_defaults(&mut resolution, platforms);
    }

    resolution
}

/// Try candidate prefixes in order; the first with an existing sources
/// file wins. With no hit, fall back to sharing `fallback`'s lists, and
/// with no fallback either the key gets no entry at all.
fn try_resolve(
    resolution: &mut Resolution,
    root: &Path,
    candidates: &[String],
    key: TargetKey,
    fallback: Option<&TargetKey>,
) {
    for prefix in candidates {
        let sources_path = root.join(format!("{}{}", prefix, SOURCES_SUFFIX));
        if !sources_path.is_file() {
            continue;
        }

        let Some(sources) = parse_list(&sources_path, Role::Sources, root, resolution) else {
            // unreadable; error recorded, treat the candidate as absent
            continue;
        };

        // The exclusions companion is optional, and an axis-specific
        // sources file never borrows a less-specific exclusions file.
        let exclusions_path = root.join(format!("{}{}", prefix, EXCLUSIONS_SUFFIX));
        let exclusions = if exclusions_path.is_file() {
            parse_list(&exclusions_path, Role::Exclusions, root, resolution)
        } else {
            None
        };

        tracing::debug!("target {} uses {}", key, sources_path.display());
        resolution
            .targets
            .insert(key.clone(), Target::new(key, sources, exclusions));
        return;
    }

    if let Some(fallback_key) = fallback {
        if let Some(from) = resolution.targets.get(fallback_key).cloned() {
            tracing::debug!("target {} falls back to {}", key, fallback_key);
            resolution
                .targets
                .insert(key.clone(), Target::fallback_from(key, &from));
        }
    }
}

/// An old-style platform-only file that exists on disk but was never
/// touched by any registry lookup likely indicates a naming mismatch
/// (e.g. shadowed by a `defaultprofile` file) the resolver silently
/// ignored.
fn check_orphaned_platform_files(
    resolution: &mut Resolution,
    root: &Path,
    name: &str,
    platforms: &[String],
) {
    for platform in platforms {
        let legacy = root.join(format!("{}_{}{}", platform, name, SOURCES_SUFFIX));
        if !legacy.is_file() {
            continue;
        }
        let canonical = fs::normalize_path(&legacy);
        if !resolution.sources.was_probed(&canonical) && !resolution.exclusions.was_probed(&canonical)
        {
            resolution.diagnostics.error(format!(
                "platform sources file {} exists but was never consulted",
                legacy.display()
            ));
        }
    }
}
