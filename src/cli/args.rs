//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::zones::JsonStyle;

/// Firmware asset embedder CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (searched upward from the current directory)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Embed a directory as byte arrays plus a `StaticEndpoint` table
    #[command(visible_alias = "t")]
    Table {
        /// Directory to embed (walked recursively)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: PathBuf,

        #[command(flatten)]
        embed_args: EmbedArgs,
    },

    /// Embed a list of files as byte arrays plus GET route registration
    #[command(visible_alias = "r")]
    Routes {
        /// Files to embed, in output order
        #[arg(required = true, value_hint = clap::ValueHint::FilePath)]
        files: Vec<PathBuf>,

        /// Directory request paths are relative to (default: current directory)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        root: Option<PathBuf>,

        #[command(flatten)]
        embed_args: EmbedArgs,
    },

    /// Print the zone bitmask table as JSON
    #[command(visible_alias = "z")]
    Zones {
        /// JSON layout
        #[arg(short, long, value_enum)]
        style: Option<JsonStyle>,

        /// Keep non-ASCII characters instead of `\uXXXX` escapes
        #[arg(long)]
        no_ascii: bool,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

/// Shared arguments for the embedding commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct EmbedArgs {
    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// gzip compression level (0-9)
    #[arg(short, long)]
    pub level: Option<u32>,

    /// Column width of the byte array lines
    #[arg(short, long)]
    pub wrap: Option<usize>,
}

impl Cli {
    /// Output file requested by the active command, if any.
    pub fn output(&self) -> Option<&Path> {
        match &self.command {
            Commands::Table { embed_args, .. } | Commands::Routes { embed_args, .. } => {
                embed_args.output.as_deref()
            }
            Commands::Zones { output, .. } => output.as_deref(),
        }
    }
}
