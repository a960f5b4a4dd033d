//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Gensrc - resolves build-target source lists from .sources files
#[derive(Parser)]
#[command(name = "gensrc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a library's source files across build axes
    Resolve(ResolveArgs),

    /// Expand one explicit sources/exclusions file pair
    Expand(ExpandArgs),

    /// Show the resolved target map for a library
    Targets(TargetsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Library directory containing the .sources files
    pub dir: PathBuf,

    /// Library name the list files are keyed by
    pub name: String,

    /// Host platform to resolve, `*` for all configured platforms
    #[arg(long, default_value = "*")]
    pub platform: String,

    /// Profile to resolve, `*` for all configured profiles
    #[arg(long, default_value = "*")]
    pub profile: String,

    /// Write the file list here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit JSON instead of plain lines
    #[arg(long)]
    pub json: bool,

    /// Fail, deleting --output, on any recorded error or an
    /// unexpectedly empty result
    #[arg(long)]
    pub strict: bool,

    /// Keep redundant fallback targets instead of pruning them
    #[arg(long)]
    pub no_prune: bool,
}

#[derive(Args)]
pub struct ExpandArgs {
    /// The sources list file
    pub sources: PathBuf,

    /// The exclusions list file
    #[arg(long)]
    pub exclude: Option<PathBuf>,

    /// Resolve patterns against this directory instead of the sources
    /// file's own directory
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Write the file list here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit JSON instead of plain lines
    #[arg(long)]
    pub json: bool,

    /// Fail, deleting --output, on any recorded error or an
    /// unexpectedly empty result
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct TargetsArgs {
    /// Library directory containing the .sources files
    pub dir: PathBuf,

    /// Library name the list files are keyed by
    pub name: String,

    /// Host platform to resolve, `*` for all configured platforms
    #[arg(long, default_value = "*")]
    pub platform: String,

    /// Profile to resolve, `*` for all configured profiles
    #[arg(long, default_value = "*")]
    pub profile: String,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
