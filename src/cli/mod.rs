//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - create: Create command arguments
//! - show: Show, validate and delete arguments (a single bundle selector)
//! - check_workdir: Working-directory conflict check arguments
//! - set_executable: Entry point repointing arguments
//! - export: Export command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check_workdir;
pub mod completions;
pub mod create;
pub mod export;
pub mod set_executable;
pub mod show;

pub use check_workdir::CheckWorkdirArgs;
pub use completions::CompletionsArgs;
pub use create::CreateArgs;
pub use export::ExportArgs;
pub use set_executable::SetExecutableArgs;
pub use show::SelectorArgs;

/// Portacode - portable executable bundles
///
/// Store an executable with its auxiliary files and dump it anywhere.
#[derive(Parser, Debug)]
#[command(
    name = "portacode",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Portable executable bundles with content-addressed storage",
    long_about = "Portacode stores an executable together with every auxiliary file it needs \
                  as one content-addressed bundle, checks that the entry point is really part \
                  of it, and dumps the bundle back to a plain folder on any machine.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  portacode create -X run.sh -F ./code -L my-code  \x1b[90m# Store a folder\x1b[0m\n   \
                  portacode validate my-code                       \x1b[90m# Check the entry point\x1b[0m\n   \
                  portacode export my-code --target ./out          \x1b[90m# Dump files and description\x1b[0m\n   \
                  portacode create --config ./my-code.yaml         \x1b[90m# Import a dumped bundle\x1b[0m\n   \
                  portacode list                                   \x1b[90m# List stored bundles\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Store directory (defaults to the user data directory)
    #[arg(long, short = 's', global = true, env = "PORTACODE_STORE_DIR")]
    pub store: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store a folder as a new bundle
    Create(CreateArgs),

    /// Show bundle information
    Show(SelectorArgs),

    /// List stored bundles
    List,

    /// Check that the entry point is one of the stored files
    Validate(SelectorArgs),

    /// Check a staging folder against a bundle's entry point
    #[command(name = "check-workdir")]
    CheckWorkdir(CheckWorkdirArgs),

    /// Repoint the entry point of a bundle
    #[command(name = "set-executable")]
    SetExecutable(SetExecutableArgs),

    /// Dump a bundle's files and its description to a folder
    Export(ExportArgs),

    /// Remove a bundle from the store
    Delete(SelectorArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
