//! Fallback pruning.
//!
//! After resolution, targets that exist purely as fallbacks of a coarser
//! configuration are redundant: either nothing specialized the group (so
//! the whole group collapses back into its coarser alternative), or
//! something did (so the coarser alternative itself is the redundant
//! entry and callers should use the specific ones).

use crate::core::resolution::Resolution;
use crate::core::target_key::TargetKey;

/// Prune the platform-qualified targets of one profile against the
/// profile-level target.
pub fn prune_platforms_for_profile(
    resolution: &mut Resolution,
    profile: &str,
    platforms: &[String],
) {
    let group: Vec<TargetKey> = platforms
        .iter()
        .map(|platform| TargetKey::new(platform, profile))
        .collect();
    prune_group(resolution, &group, &TargetKey::for_profile(profile));
}

/// Prune profile-level targets against the unqualified default.
pub fn prune_profiles(resolution: &mut Resolution, profiles: &[String]) {
    let group: Vec<TargetKey> = profiles.iter().map(TargetKey::for_profile).collect();
    prune_group(resolution, &group, &TargetKey::unqualified());
}

/// Prune platform-default targets against the unqualified default.
pub fn prune_platform_defaults(resolution: &mut Resolution, platforms: &[String]) {
    let group: Vec<TargetKey> = platforms.iter().map(TargetKey::for_platform).collect();
    prune_group(resolution, &group, &TargetKey::unqualified());
}

/// If every present member of `group` is a fallback, drop the whole
/// group; otherwise drop the coarser `parent` entry instead.
fn prune_group(resolution: &mut Resolution, group: &[TargetKey], parent: &TargetKey) {
    let present: Vec<&TargetKey> = group
        .iter()
        .filter(|key| resolution.targets.contains_key(key))
        .collect();
    if present.is_empty() {
        return;
    }

    let all_fallback = present
        .iter()
        .all(|key| resolution.targets[key].is_fallback);

    if all_fallback {
        for key in present {
            tracing::debug!("pruning redundant fallback target {}", key);
            resolution.targets.remove(key);
        }
    } else if resolution.targets.remove(parent).is_some() {
        tracing::debug!("pruning superseded target {}", parent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve_targets;
    use std::fs as stdfs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        stdfs::write(root.join("a.cs"), "").unwrap();
        (tmp, root)
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unqualified_only_prunes_to_single_target() {
        let (_tmp, root) = fixture();
        stdfs::write(root.join("foo.sources"), "a.cs\n").unwrap();

        let res = resolve_targets(
            &root,
            "foo",
            &strings(&["linux", "win32"]),
            &strings(&["net_4_x", "basic"]),
            true,
        );

        let keys: Vec<&TargetKey> = res.targets.keys().collect();
        assert_eq!(keys, vec![&TargetKey::unqualified()]);
    }

    #[test]
    fn test_platform_specialization_prunes_default() {
        let (_tmp, root) = fixture();
        stdfs::write(root.join("p.cs"), "").unwrap();
        stdfs::write(root.join("foo.sources"), "a.cs\n").unwrap();
        stdfs::write(root.join("linux_foo.sources"), "p.cs\n").unwrap();

        let res = resolve_targets(
            &root,
            "foo",
            &strings(&["linux", "win32"]),
            &strings(&["net_4_x"]),
            true,
        );

        // one target per platform: linux specialized, win32 a fallback
        // pointing at the old default
        assert_eq!(res.targets.len(), 2);
        assert!(!res.target(&TargetKey::for_platform("linux")).unwrap().is_fallback);
        assert!(res.target(&TargetKey::for_platform("win32")).unwrap().is_fallback);
        assert!(res.target(&TargetKey::unqualified()).is_none());
    }

    #[test]
    fn test_profile_specialization_keeps_platform_group_pruned() {
        let (_tmp, root) = fixture();
        stdfs::write(root.join("b.cs"), "").unwrap();
        stdfs::write(root.join("foo.sources"), "a.cs\n").unwrap();
        stdfs::write(root.join("basic_foo.sources"), "b.cs\n").unwrap();

        let res = resolve_targets(
            &root,
            "foo",
            &strings(&["linux"]),
            &strings(&["basic", "full"]),
            true,
        );

        // basic specialized at the profile level; its platform entries
        // were pure fallbacks and are gone, as is the unqualified default
        assert!(res.target(&TargetKey::for_profile("basic")).is_some());
        assert!(res.target(&TargetKey::new("linux", "basic")).is_none());
        assert!(res.target(&TargetKey::unqualified()).is_none());
        // full never specialized anywhere; its profile entry survives as
        // a fallback since the group rule only removes the parent
        assert!(res.target(&TargetKey::for_profile("full")).unwrap().is_fallback);
    }

    #[test]
    fn test_platform_specialization_within_profile_prunes_profile_entry() {
        let (_tmp, root) = fixture();
        stdfs::write(root.join("b.cs"), "").unwrap();
        stdfs::write(root.join("c.cs"), "").unwrap();
        stdfs::write(root.join("foo.sources"), "a.cs\n").unwrap();
        stdfs::write(root.join("basic_foo.sources"), "b.cs\n").unwrap();
        stdfs::write(root.join("linux_basic_foo.sources"), "c.cs\n").unwrap();

        let res = resolve_targets(
            &root,
            "foo",
            &strings(&["linux", "win32"]),
            &strings(&["basic"]),
            true,
        );

        // linux specialized basic, so the profile-level entry is gone but
        // the win32 fallback remains
        assert!(!res.target(&TargetKey::new("linux", "basic")).unwrap().is_fallback);
        assert!(res.target(&TargetKey::new("win32", "basic")).unwrap().is_fallback);
        assert!(res.target(&TargetKey::for_profile("basic")).is_none());
    }
}
