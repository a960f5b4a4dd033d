//! Path and wildcard matching for list-file patterns.
//!
//! Resolves one `(base directory, pattern)` pair into concrete file paths,
//! expressed relative to the library root with forward-slash separators.
//! Patterns support the `*` and `?` markers in their final component;
//! there is no recursive `**` and no character classes.

use std::path::Path;

use glob::Pattern;

use crate::util::diagnostic::Diagnostics;
use crate::util::fs;

/// Whether a pattern is applied as an inclusion or an exclusion.
///
/// A missing inclusion target is an error; an exclusion referring to a
/// file that already doesn't exist is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternRole {
    Include,
    Exclude,
}

/// Whether `pattern` contains a wildcard marker.
pub fn has_wildcard(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Expand one pattern against its base directory.
///
/// Returns the matched paths relative to `root`. Problems are recorded in
/// `diags` per the pattern's role; expansion itself never fails.
pub fn expand(
    root: &Path,
    base_dir: &Path,
    pattern: &str,
    role: PatternRole,
    diags: &mut Diagnostics,
) -> Vec<String> {
    let full = base_dir.join(pattern);
    let dir = full.parent().unwrap_or(base_dir).to_path_buf();
    let name = full
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if has_wildcard(&name) {
        expand_wildcard(root, &dir, &name, pattern, role, diags)
    } else {
        expand_exact(root, &dir, &full, pattern, role, diags)
    }
}

fn expand_wildcard(
    root: &Path,
    dir: &Path,
    name: &str,
    pattern: &str,
    role: PatternRole,
    diags: &mut Diagnostics,
) -> Vec<String> {
    if !dir.is_dir() {
        missing_directory(dir, pattern, role, diags);
        return Vec::new();
    }

    let matcher = match Pattern::new(&escape_classes(name)) {
        Ok(m) => m,
        Err(e) => {
            diags.error(format!("invalid pattern `{}`: {}", pattern, e));
            return Vec::new();
        }
    };

    // Directory order is OS-dependent; sort entries so output and
    // diagnostics are deterministic.
    let mut names: Vec<String> = match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(e) => {
            diags.error(format!("failed to list directory {}: {}", dir.display(), e));
            return Vec::new();
        }
    };
    names.sort();

    let matched: Vec<String> = names
        .into_iter()
        .filter(|n| matcher.matches(n))
        .map(|n| relativize(root, &dir.join(n), diags))
        .collect();

    if matched.is_empty() {
        tracing::trace!("pattern `{}` matched nothing in {}", pattern, dir.display());
    }

    matched
}

fn expand_exact(
    root: &Path,
    dir: &Path,
    full: &Path,
    pattern: &str,
    role: PatternRole,
    diags: &mut Diagnostics,
) -> Vec<String> {
    if full.is_file() {
        return vec![relativize(root, full, diags)];
    }

    if !dir.is_dir() {
        missing_directory(dir, pattern, role, diags);
    } else {
        match role {
            PatternRole::Include => {
                diags.error(format!("missing file: {}", full.display()));
            }
            PatternRole::Exclude => {
                tracing::trace!("stale exclusion, file already absent: {}", full.display());
            }
        }
    }

    Vec::new()
}

fn missing_directory(dir: &Path, pattern: &str, role: PatternRole, diags: &mut Diagnostics) {
    let message = format!(
        "missing directory {} for pattern `{}`",
        dir.display(),
        pattern
    );
    match role {
        PatternRole::Include => diags.error(message),
        PatternRole::Exclude => diags.warning(message),
    }
}

/// Express `path` relative to `root` with forward slashes. On failure the
/// absolute path is substituted so the rest of resolution can proceed.
fn relativize(root: &Path, path: &Path, diags: &mut Diagnostics) -> String {
    let normalized = fs::normalize_path(path);
    match pathdiff::diff_paths(&normalized, root) {
        Some(rel) => fs::forward_slashes(&rel),
        None => {
            diags.error(format!(
                "could not express {} relative to {}",
                normalized.display(),
                root.display()
            ));
            fs::forward_slashes(&normalized)
        }
    }
}

/// Escape `[` so `glob::Pattern` treats it literally; only `*` and `?`
/// are wildcard markers in list files.
fn escape_classes(name: &str) -> String {
    name.replace('[', "[[]")
}
