//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use spellbook_engine::NestingMode;

/// Spellbook - markdown with nestable tags, compiled to Django templates
#[derive(Parser, Debug)]
#[command(name = "spellbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of ./spellbook.toml or the user config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Render one markdown file and print the HTML
    Render {
        file: PathBuf,

        #[command(flatten)]
        parser: ParserArgs,
    },

    /// Render every markdown file into templates, urls.py and views.py
    ///
    /// Flags override values from the config file. Without a config file,
    /// --source and --content-app are required.
    Build(BuildArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserArgs {
    /// Fail on tags that are never closed
    #[arg(long)]
    pub strict: bool,

    /// How closing tags are matched: depth-aware or first-match
    #[arg(long)]
    pub nesting: Option<NestingMode>,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildArgs {
    /// Directory of markdown sources
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Django app receiving the generated files
    #[arg(long)]
    pub content_app: Option<String>,

    /// Directory of the content app
    #[arg(long)]
    pub content_app_path: Option<PathBuf>,

    /// Base template every page extends
    #[arg(long)]
    pub base_template: Option<String>,

    #[command(flatten)]
    pub parser: ParserArgs,
}
