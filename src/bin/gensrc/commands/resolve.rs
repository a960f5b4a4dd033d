//! `gensrc resolve` command

use anyhow::Result;

use crate::cli::ResolveArgs;
use gensrc::ops::{self, ResolveOptions};
use gensrc::util::config::{global_config_path, load_config, project_config_path};

pub fn execute(args: ResolveArgs) -> Result<()> {
    let config = load_config(
        global_config_path().as_deref(),
        &project_config_path(&args.dir),
    );

    let opts = ResolveOptions {
        platforms: super::expand_axis(&args.platform, &config.axes.platforms),
        profiles: super::expand_axis(&args.profile, &config.axes.profiles),
        prune: !args.no_prune,
    };

    let mut resolution = ops::resolve_library(&args.dir, &args.name, &opts)?;
    let files = ops::all_sources(&mut resolution);

    super::emit_file_list(
        &resolution,
        &files,
        args.output.as_deref(),
        args.json,
        args.strict,
    )
}
