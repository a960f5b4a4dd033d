//! Source aggregation.
//!
//! Walks a target's sources list and its transitively included lists,
//! combining exclusions bottom-up into one shared accumulator and
//! yielding the filtered include matches. Exclusion membership is
//! monotonic: once a path enters the set it never leaves, so no list
//! later in traversal order can resurrect an excluded file.

use std::collections::HashSet;
use std::path::Path;

use crate::core::list::ListId;
use crate::core::resolution::Resolution;
use crate::core::target::Target;
use crate::matcher::{self, PatternRole};

/// Produce the ordered, filtered source paths for one target.
///
/// Output is in traversal order, neither deduplicated nor sorted; the
/// caller performs the final distinct-and-sort over all targets.
pub fn collect_target(resolution: &mut Resolution, target: &Target) -> Vec<String> {
    let root = resolution.root().to_path_buf();
    let mut excluded = HashSet::new();

    // The target's own exclusions list seeds the set before any sources
    // list is expanded.
    if let Some(exclusions) = target.exclusions {
        let mut visited = HashSet::new();
        seed_exclusions(&root, resolution, exclusions, &mut excluded, &mut visited);
    }

    let mut in_flight = HashSet::new();
    let mut out = Vec::new();
    collect_list(
        &root,
        resolution,
        target.sources,
        &mut excluded,
        &mut in_flight,
        &mut out,
    );
    out
}

/// Expand every pattern of an exclusions list (and its includes,
/// depth-first) into the shared exclusion set.
fn seed_exclusions(
    root: &Path,
    resolution: &mut Resolution,
    id: ListId,
    excluded: &mut HashSet<String>,
    visited: &mut HashSet<ListId>,
) {
    if !visited.insert(id) {
        return;
    }

    let (excludes, children) = {
        let list = resolution.exclusions.get(id);
        (list.excludes.clone(), list.children.clone())
    };

    for entry in &excludes {
        for path in matcher::expand(
            root,
            &entry.base_dir,
            &entry.pattern,
            PatternRole::Exclude,
            &mut resolution.diagnostics,
        ) {
            excluded.insert(path);
        }
    }

    for child in children {
        seed_exclusions(root, resolution, child, excluded, visited);
    }
}

/// Depth-first expansion of one sources list.
///
/// Own exclude patterns extend the shared set first, then children are
/// expanded in declaration order against that same set, and only then
/// are this list's include patterns matched and filtered.
fn collect_list(
    root: &Path,
    resolution: &mut Resolution,
    id: ListId,
    excluded: &mut HashSet<String>,
    in_flight: &mut HashSet<ListId>,
    out: &mut Vec<String>,
) {
    // A list already being expanded contributes nothing; this is what
    // keeps a self-referential include finite.
    if !in_flight.insert(id) {
        return;
    }

    let (excludes, children, includes) = {
        let list = resolution.sources.get(id);
        (
            list.excludes.clone(),
            list.children.clone(),
            list.includes.clone(),
        )
    };

    for entry in &excludes {
        for path in matcher::expand(
            root,
            &entry.base_dir,
            &entry.pattern,
            PatternRole::Exclude,
            &mut resolution.diagnostics,
        ) {
            excluded.insert(path);
        }
    }

    for child in children {
        collect_list(root, resolution, child, excluded, in_flight, out);
    }

    for entry in &includes {
        for path in matcher::expand(
            root,
            &entry.base_dir,
            &entry.pattern,
            PatternRole::Include,
            &mut resolution.diagnostics,
        ) {
            if !excluded.contains(&path) {
                out.push(path);
            }
        }
    }

    in_flight.remove(&id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::target_key::TargetKey;
    use crate::parser::{parse_list, Role};
    use std::fs as stdfs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        (tmp, root)
    }

    fn sources_target(res: &mut Resolution, root: &Path, file: &str) -> Target {
        let id = parse_list(&root.join(file), Role::Sources, root, res).unwrap();
        Target::new(TargetKey::unqualified(), id, None)
    }

    #[test]
    fn test_includes_minus_exclusions_list() {
        let (_tmp, root) = fixture();
        stdfs::write(root.join("a.cs"), "").unwrap();
        stdfs::create_dir(root.join("sub")).unwrap();
        stdfs::write(root.join("sub/b.cs"), "").unwrap();
        stdfs::write(root.join("sub/gen.cs"), "").unwrap();
        stdfs::write(root.join("widgets.sources"), "a.cs\nsub/*.cs\n").unwrap();
        stdfs::write(root.join("widgets.exclude.sources"), "sub/gen.cs\n").unwrap();

        let mut res = Resolution::new(&root);
        let sources = parse_list(&root.join("widgets.sources"), Role::Sources, &root, &mut res).unwrap();
        let exclusions = parse_list(
            &root.join("widgets.exclude.sources"),
            Role::Exclusions,
            &root,
            &mut res,
        )
        .unwrap();
        let target = Target::new(TargetKey::unqualified(), sources, Some(exclusions));

        let mut paths = collect_target(&mut res, &target);
        paths.sort_unstable();
        assert_eq!(paths, vec!["a.cs", "sub/b.cs"]);
        assert_eq!(res.error_count(), 0);
    }

    #[test]
    fn test_children_expand_before_parent_patterns() {
        let (_tmp, root) = fixture();
        stdfs::write(root.join("a.cs"), "").unwrap();
        stdfs::write(root.join("shared.cs"), "").unwrap();
        stdfs::write(root.join("widgets.sources"), "#include common.sources\na.cs\n").unwrap();
        stdfs::write(root.join("common.sources"), "shared.cs\n").unwrap();

        let mut res = Resolution::new(&root);
        let target = sources_target(&mut res, &root, "widgets.sources");

        let paths = collect_target(&mut res, &target);
        // children yield first, parent's own patterns afterwards
        assert_eq!(paths, vec!["shared.cs", "a.cs"]);
    }

    #[test]
    fn test_parent_exclusion_beats_child_inclusion() {
        let (_tmp, root) = fixture();
        stdfs::write(root.join("keep.cs"), "").unwrap();
        stdfs::write(root.join("drop.cs"), "").unwrap();
        stdfs::write(root.join("top.sources"), "drop.cs:drop.cs\n#include child.sources\n").unwrap();
        stdfs::write(root.join("child.sources"), "keep.cs\ndrop.cs\n").unwrap();

        let mut res = Resolution::new(&root);
        let target = sources_target(&mut res, &root, "top.sources");

        let paths = collect_target(&mut res, &target);
        assert_eq!(paths, vec!["keep.cs"]);
    }

    #[test]
    fn test_exclusion_is_monotonic_across_siblings() {
        let (_tmp, root) = fixture();
        stdfs::write(root.join("x.cs"), "").unwrap();
        stdfs::write(root.join("top.sources"), "#include first.sources\n#include second.sources\n").unwrap();
        // first sibling excludes x.cs; second tries to include it again
        stdfs::write(root.join("first.sources"), "x.cs:x.cs\n").unwrap();
        stdfs::write(root.join("second.sources"), "x.cs\n").unwrap();

        let mut res = Resolution::new(&root);
        let target = sources_target(&mut res, &root, "top.sources");

        let paths = collect_target(&mut res, &target);
        assert!(paths.is_empty());
    }

    #[test]
    fn test_inline_exclusion_scoped_to_pattern_directory() {
        let (_tmp, root) = fixture();
        stdfs::create_dir(root.join("src")).unwrap();
        stdfs::write(root.join("src/A.cs"), "").unwrap();
        stdfs::write(root.join("src/B.cs"), "").unwrap();
        stdfs::write(root.join("src/C.cs"), "").unwrap();
        stdfs::write(root.join("lib.sources"), "src/*.cs:A.cs,B.cs\n").unwrap();

        let mut res = Resolution::new(&root);
        let target = sources_target(&mut res, &root, "lib.sources");

        let paths = collect_target(&mut res, &target);
        assert_eq!(paths, vec!["src/C.cs"]);
    }

    #[test]
    fn test_self_include_contributes_once() {
        let (_tmp, root) = fixture();
        stdfs::write(root.join("a.cs"), "").unwrap();
        stdfs::write(root.join("loop.sources"), "#include loop.sources\na.cs\n").unwrap();

        let mut res = Resolution::new(&root);
        let target = sources_target(&mut res, &root, "loop.sources");

        let paths = collect_target(&mut res, &target);
        assert_eq!(paths, vec!["a.cs"]);
    }
}
