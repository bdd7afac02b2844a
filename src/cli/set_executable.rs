use clap::Parser;

/// Arguments for the set-executable command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Point the bundle at another stored file:\n    portacode set-executable my-code bin/main.py")]
pub struct SetExecutableArgs {
    /// Bundle label, id, or id prefix
    pub bundle: String,

    /// New entry point, relative to the bundle root
    pub executable: String,

    /// Store the new entry point even if it is not one of the stored files
    #[arg(long)]
    pub no_validate: bool,
}
