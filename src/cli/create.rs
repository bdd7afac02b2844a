use clap::Parser;
use std::path::PathBuf;

/// Arguments for the create command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Store a folder with run.sh as entry point:\n    portacode create -X run.sh -F ./code -L my-code\n\n\
                  Store with submission script snippets:\n    portacode create -X bin/app -F ./code -L app --prepend-text 'module load gcc'\n\n\
                  Import an exported bundle:\n    portacode create --config ./my-code.yaml")]
pub struct CreateArgs {
    /// Entry point, relative to the folder
    #[arg(
        long = "filepath-executable",
        short = 'X',
        required_unless_present = "config",
        conflicts_with = "config"
    )]
    pub executable: Option<String>,

    /// Folder holding the executable and every file it needs
    #[arg(
        long = "filepath-files",
        short = 'F',
        required_unless_present = "config",
        conflicts_with = "config"
    )]
    pub files: Option<PathBuf>,

    /// Bundle label (defaults to the folder name)
    #[arg(long, short = 'L', conflicts_with = "config")]
    pub label: Option<String>,

    /// Free-form description
    #[arg(long, short = 'D', conflicts_with = "config")]
    pub description: Option<String>,

    /// Text placed before the executable in submission scripts
    #[arg(long, conflicts_with = "config")]
    pub prepend_text: Option<String>,

    /// Text placed after the executable in submission scripts
    #[arg(long, conflicts_with = "config")]
    pub append_text: Option<String>,

    /// Description file written by `portacode export`
    #[arg(long)]
    pub config: Option<PathBuf>,
}
