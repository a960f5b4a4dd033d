//! List-file parsing.
//!
//! Reads one declarative list file into a `SourceList`, memoized by
//! canonical path in the role's registry. Line syntax, top to bottom:
//!
//! - `#include <file>` pulls in another list, resolved against the
//!   directory containing the including file.
//! - `<pattern>` or `<pattern>:<name1>,<name2>,...` declares a pattern;
//!   the comma-separated names are inline exclusions resolved against the
//!   pattern's own directory portion.
//! - Blank lines are skipped. There is no other comment syntax.

use std::path::{Path, PathBuf};

use crate::core::list::{ListId, PatternEntry, SourceList};
use crate::core::resolution::Resolution;
use crate::util::fs;

/// The role a list file is parsed under. Inline exclusions always
/// exclude; the role only decides where a line's main pattern lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Sources,
    Exclusions,
}

enum Line<'a> {
    Blank,
    Include(&'a str),
    Data(&'a str),
}

/// Classify one line before any further parsing.
fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if let Some(rest) = trimmed.strip_prefix("#include") {
        if rest.starts_with(char::is_whitespace) {
            return Line::Include(rest.trim());
        }
    }
    Line::Data(trimmed)
}

fn registry_mut<'a>(resolution: &'a mut Resolution, role: Role) -> &'a mut crate::core::list::ListRegistry {
    match role {
        Role::Sources => &mut resolution.sources,
        Role::Exclusions => &mut resolution.exclusions,
    }
}

/// Parse one list file, returning its registry id.
///
/// Patterns inside the file are attributed to `base_dir`. The list is
/// registered before its body is read, so a self-referential include
/// resolves to the same, still-populating entry. Returns `None` when the
/// file cannot be read; the error is recorded and the caller skips it.
pub fn parse_list(
    path: &Path,
    role: Role,
    base_dir: &Path,
    resolution: &mut Resolution,
) -> Option<ListId> {
    let canonical = fs::normalize_path(path);

    if let Some(id) = registry_mut(resolution, role).lookup(&canonical) {
        return Some(id);
    }

    let contents = match fs::read_to_string(&canonical) {
        Ok(contents) => contents,
        Err(e) => {
            resolution.diagnostics.error(format!("{:#}", e));
            return None;
        }
    };

    let id = registry_mut(resolution, role)
        .insert(SourceList::new(canonical.clone(), role == Role::Exclusions));

    let list_dir = canonical
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| base_dir.to_path_buf());

    for raw in contents.lines() {
        match classify(raw) {
            Line::Blank => {}
            Line::Include(name) => {
                // Include targets resolve against the including file's
                // own directory, not the pattern base directory.
                let child_path = list_dir.join(name);
                if let Some(child) = parse_list(&child_path, role, base_dir, resolution) {
                    registry_mut(resolution, role).get_mut(id).children.push(child);
                }
            }
            Line::Data(line) => {
                parse_data_line(line, role, base_dir, id, resolution);
            }
        }
    }

    Some(id)
}

fn parse_data_line(
    line: &str,
    role: Role,
    base_dir: &Path,
    id: ListId,
    resolution: &mut Resolution,
) {
    let (head, tail) = match line.split_once(':') {
        Some((head, tail)) => (head.trim(), Some(tail)),
        None => (line, None),
    };

    if !head.is_empty() {
        let entry = PatternEntry::new(base_dir, head);
        let list = registry_mut(resolution, role).get_mut(id);
        match role {
            Role::Sources => list.includes.push(entry),
            Role::Exclusions => list.excludes.push(entry),
        }
    }

    if let Some(tail) = tail {
        let head_dir = inline_exclusion_dir(base_dir, head);
        for name in tail.split(',') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            registry_mut(resolution, role)
                .get_mut(id)
                .excludes
                .push(PatternEntry::new(head_dir.clone(), name));
        }
    }
}

/// Inline exclusion names resolve against the main pattern's own
/// directory portion, not the base directory as a whole.
fn inline_exclusion_dir(base_dir: &Path, head: &str) -> PathBuf {
    match Path::new(head).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => base_dir.join(dir),
        _ => base_dir.to_path_buf(),
    }
}
