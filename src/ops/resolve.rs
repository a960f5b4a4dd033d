//! Library resolution entry points.
//!
//! Drives the target resolver and the aggregator for the two caller
//! modes: a library directory with a name and axis universes, or an
//! explicit sources/exclusions file pair.

use std::path::Path;

use anyhow::Result;

use crate::aggregate;
use crate::core::resolution::Resolution;
use crate::core::target::Target;
use crate::core::target_key::TargetKey;
use crate::parser::{parse_list, Role};
use crate::resolver::{self, ResolveError};
use crate::util::fs;

/// Options for a directory-mode resolution.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Known host platform names to iterate.
    pub platforms: Vec<String>,
    /// Known profile names to iterate.
    pub profiles: Vec<String>,
    /// Strip redundant fallback targets after resolution.
    pub prune: bool,
}

/// Resolve all configured axes for `name` inside `root`.
pub fn resolve_library(root: &Path, name: &str, opts: &ResolveOptions) -> Result<Resolution> {
    let root = root.canonicalize().map_err(|_| ResolveError::LibraryDirNotFound {
        path: root.to_path_buf(),
    })?;

    tracing::info!("resolving {} in {}", name, root.display());
    Ok(resolver::resolve_targets(
        &root,
        name,
        &opts.platforms,
        &opts.profiles,
        opts.prune,
    ))
}

/// Resolve one explicit sources/exclusions file pair, registered under
/// the unqualified key. `base_override` replaces the sources file's own
/// directory as the pattern base.
pub fn resolve_file_pair(
    sources: &Path,
    exclusions: Option<&Path>,
    base_override: Option<&Path>,
) -> Result<Resolution> {
    let sources = sources
        .canonicalize()
        .map_err(|_| ResolveError::SourcesFileNotFound {
            path: sources.to_path_buf(),
        })?;

    let base = match base_override {
        Some(dir) => fs::normalize_path(dir),
        None => sources
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| ResolveError::SourcesFileNotFound {
                path: sources.clone(),
            })?,
    };

    let mut resolution = Resolution::new(&base);

    let sources_id = parse_list(&sources, Role::Sources, &base, &mut resolution).ok_or(
        ResolveError::SourcesFileUnreadable {
            path: sources.clone(),
        },
    )?;

    let exclusions_id = match exclusions {
        Some(path) if path.is_file() => {
            parse_list(&fs::normalize_path(path), Role::Exclusions, &base, &mut resolution)
        }
        Some(path) => {
            resolution
                .diagnostics
                .warning(format!("exclusions file not found: {}", path.display()));
            None
        }
        None => None,
    };

    let key = TargetKey::unqualified();
    resolution
        .targets
        .insert(key.clone(), Target::new(key, sources_id, exclusions_id));
    Ok(resolution)
}

/// Aggregate one target's sources. `None` when the key has no entry.
pub fn target_sources(resolution: &mut Resolution, key: &TargetKey) -> Option<Vec<String>> {
    let target = resolution.targets.get(key)?.clone();
    Some(aggregate::collect_target(resolution, &target))
}

/// Aggregate every target, case-sensitively deduplicated and sorted by
/// raw byte order.
pub fn all_sources(resolution: &mut Resolution) -> Vec<String> {
    let targets: Vec<Target> = resolution.targets.values().cloned().collect();

    let mut out = Vec::new();
    for target in &targets {
        out.extend(aggregate::collect_target(resolution, target));
    }
    out.sort_unstable();
    out.dedup();
    out
}

/// An empty result is only legitimate when every sources list parsed
/// during the run was itself empty.
pub fn unexpectedly_empty(resolution: &Resolution, files: &[String]) -> bool {
    files.is_empty() && resolution.parsed_nonempty_sources()
}
