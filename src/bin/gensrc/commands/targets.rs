//! `gensrc targets` command

use anyhow::Result;

use crate::cli::TargetsArgs;
use gensrc::ops::{self, ResolveOptions};
use gensrc::util::config::{global_config_path, load_config, project_config_path};

pub fn execute(args: TargetsArgs) -> Result<()> {
    let config = load_config(
        global_config_path().as_deref(),
        &project_config_path(&args.dir),
    );

    let opts = ResolveOptions {
        platforms: super::expand_axis(&args.platform, &config.axes.platforms),
        profiles: super::expand_axis(&args.profile, &config.axes.profiles),
        prune: true,
    };

    let resolution = ops::resolve_library(&args.dir, &args.name, &opts)?;

    if resolution.targets.is_empty() {
        println!("no targets found for `{}`", args.name);
        return Ok(());
    }

    for (key, target) in &resolution.targets {
        let sources = resolution.sources.get(target.sources);
        let file = sources
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| sources.path().display().to_string());

        if target.is_fallback {
            println!("{:<24} {} (fallback)", key.to_string(), file);
        } else {
            println!("{:<24} {}", key.to_string(), file);
        }
    }

    for diagnostic in resolution.diagnostics.iter() {
        eprintln!("{}", diagnostic);
    }

    Ok(())
}
