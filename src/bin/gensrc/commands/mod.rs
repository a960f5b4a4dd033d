//! Command implementations

pub mod completions;
pub mod expand;
pub mod resolve;
pub mod targets;

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use gensrc::ops;
use gensrc::Resolution;

/// Expand a CLI axis argument: `*` means every configured name.
pub(crate) fn expand_axis(selected: &str, configured: &[String]) -> Vec<String> {
    if selected == "*" {
        configured.to_vec()
    } else {
        vec![selected.to_string()]
    }
}

#[derive(Serialize)]
struct ResolveReport<'a> {
    files: &'a [String],
    error_count: usize,
}

/// Print diagnostics, write the resolved file list, and apply strict
/// mode: a nonzero error count or an unexpectedly empty result fails
/// the command and deletes the partial output file.
pub(crate) fn emit_file_list(
    resolution: &Resolution,
    files: &[String],
    output: Option<&Path>,
    json: bool,
    strict: bool,
) -> Result<()> {
    for diagnostic in resolution.diagnostics.iter() {
        eprintln!("{}", diagnostic);
    }

    let rendered = if json {
        let report = ResolveReport {
            files,
            error_count: resolution.error_count(),
        };
        let mut body = serde_json::to_string_pretty(&report)?;
        body.push('\n');
        body
    } else {
        let mut body = String::new();
        for file in files {
            body.push_str(file);
            body.push('\n');
        }
        body
    };

    match output {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("failed to write output file: {}", path.display()))?,
        None => print!("{}", rendered),
    }

    if strict {
        let empty = ops::unexpectedly_empty(resolution, files);
        if resolution.error_count() > 0 || empty {
            if let Some(path) = output {
                let _ = fs::remove_file(path);
            }
            if empty {
                bail!("resolved no source files, but non-empty sources lists were parsed");
            }
            bail!("{} error(s) during resolution", resolution.error_count());
        }
    }

    Ok(())
}
