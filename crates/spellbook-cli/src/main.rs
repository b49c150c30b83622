//! Spellbook CLI
//!
//! Renders single files for inspection and builds a Django content app from
//! a markdown directory.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise Info, or Debug with `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
    log::debug!("Verbose mode enabled");
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Commands::Render { file, parser } => commands::run_render(config, &file, &parser),
        Commands::Build(args) => commands::run_build(config, &args),
    }
}
