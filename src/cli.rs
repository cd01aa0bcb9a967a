use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// modfiles - aggregate module files into Bazel filegroups
#[derive(Parser, Debug)]
#[command(name = "modfiles")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (one JSON object per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to <ROOT>/modfiles.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate module file groups for every directory under ROOT
    Generate {
        /// Repository root to walk
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Show the build file changes without writing them
        #[arg(long)]
        dry_run: bool,

        /// Don't emit go_mod archive rules
        #[arg(long)]
        no_go_mod: bool,

        /// Name of the generated target in every package
        #[arg(long, value_name = "NAME")]
        target_name: Option<String>,
    },

    /// Package a module as a <module>@<version> zip archive
    Archive {
        /// Zip file to write
        #[arg(long, value_name = "ZIP")]
        output: PathBuf,

        /// Module path, e.g. example.com/project
        #[arg(long, value_name = "ID")]
        module_path: String,

        /// go.mod file of the module
        #[arg(long, value_name = "FILE")]
        go_mod: PathBuf,

        /// Source file to include (repeatable, or comma-separated)
        #[arg(long = "src", value_name = "FILE", required = true, value_delimiter = ',')]
        srcs: Vec<PathBuf>,

        /// Prefix stripped from source paths inside the archive
        #[arg(long, value_name = "PREFIX", default_value = "")]
        strip_prefix: String,

        /// Bazel volatile status file providing VOLATILE_VERSION
        #[arg(long, value_name = "FILE")]
        volatile_status_file: PathBuf,
    },
}
