//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: Translate every source file into the output directory and merge the catalog
//! - `check`: Report missing translations and invalid tags without writing anything
//! - `init`: Create a `.taglinerc.json` with the default configuration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Build(cmd)) => cmd.args.common.verbose,
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by `build` and `check`.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Identifier marking translatable templates (overrides config file)
    #[arg(long)]
    pub tag_name: Option<String>,

    /// Catalog holding the translations (overrides config file)
    #[arg(long)]
    pub translations_input: Option<PathBuf>,

    /// Catalog the extracted texts are merged into (overrides config file)
    #[arg(long)]
    pub translations_output: Option<PathBuf>,

    /// Prefix for untranslated texts in the output catalog (overrides config file)
    #[arg(long)]
    pub missing_text: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct BuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory receiving the translated sources (overrides config file)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Report what would be written without touching any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub args: BuildArgs,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate sources into the output directory and update the output catalog
    Build(BuildCommand),
    /// Report missing translations and invalid tags
    Check(CheckCommand),
    /// Create a default .taglinerc.json in the current directory
    Init,
}
