//! Filesystem utilities.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}

/// Canonicalize a path, but don't fail if it doesn't exist yet.
/// Returns the path as-is if canonicalization fails.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Render a path with forward-slash separators regardless of platform.
pub fn forward_slashes(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::RootDir => out.push('/'),
            Component::CurDir => continue,
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_to_string_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = read_to_string(&tmp.path().join("nope.sources")).unwrap_err();
        assert!(err.to_string().contains("failed to read file"));
    }

    #[test]
    fn test_forward_slashes() {
        assert_eq!(forward_slashes(Path::new("sub/gen.cs")), "sub/gen.cs");
        assert_eq!(forward_slashes(Path::new("./sub/a.cs")), "sub/a.cs");
        assert_eq!(forward_slashes(Path::new("a.cs")), "a.cs");
    }

    #[test]
    fn test_normalize_path_nonexistent() {
        let p = Path::new("/definitely/not/here");
        assert_eq!(normalize_path(p), PathBuf::from("/definitely/not/here"));
    }
}
