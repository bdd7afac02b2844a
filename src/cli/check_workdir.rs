use clap::Parser;
use std::path::PathBuf;

/// Arguments for the check-workdir command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check a sandbox before copying it next to the bundle:\n    portacode check-workdir my-code ./sandbox")]
pub struct CheckWorkdirArgs {
    /// Bundle label, id, or id prefix
    pub bundle: String,

    /// Folder whose files would be staged into the working directory
    pub folder: PathBuf,
}
