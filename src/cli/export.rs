use clap::Parser;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Export into ./<label> with ./<label>.yaml next to it:\n    portacode export my-code\n\n\
                  Export into a chosen folder:\n    portacode export my-code --target ./out/my-code\n\n\
                  Replace files left by an earlier export:\n    portacode export my-code --overwrite")]
pub struct ExportArgs {
    /// Bundle label, id, or id prefix
    pub bundle: String,

    /// Folder to dump the files into (defaults to ./<label>)
    #[arg(long, short = 't')]
    pub target: Option<PathBuf>,

    /// Replace existing files instead of failing
    #[arg(long)]
    pub overwrite: bool,
}
