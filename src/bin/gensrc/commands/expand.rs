//! `gensrc expand` command

use anyhow::Result;

use crate::cli::ExpandArgs;
use gensrc::ops;

pub fn execute(args: ExpandArgs) -> Result<()> {
    let mut resolution = ops::resolve_file_pair(
        &args.sources,
        args.exclude.as_deref(),
        args.base_dir.as_deref(),
    )?;
    let files = ops::all_sources(&mut resolution);

    super::emit_file_list(
        &resolution,
        &files,
        args.output.as_deref(),
        args.json,
        args.strict,
    )
}
