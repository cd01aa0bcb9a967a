//! modfiles CLI
//!
//! Usage: modfiles <COMMAND>
//!
//! Commands:
//!   generate  Aggregate module files and update build files
//!   archive   Package a module as a versioned zip

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            root,
            dry_run,
            no_go_mod,
            target_name,
        } => commands::generate::cmd_generate(
            &root,
            cli.config.as_deref(),
            commands::generate::GenerateFlags {
                dry_run,
                no_go_mod,
                target_name,
            },
            cli.json,
        ),
        Commands::Archive {
            output,
            module_path,
            go_mod,
            srcs,
            strip_prefix,
            volatile_status_file,
        } => commands::archive::cmd_archive(
            modfiles::application::ArchiveOptions {
                output,
                module_path,
                go_mod,
                srcs,
                strip_prefix,
                volatile_status_file,
            },
            cli.json,
        ),
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
