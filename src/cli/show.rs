use clap::Parser;

/// Arguments for commands acting on one stored bundle
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Select a bundle by label:\n    portacode show my-code\n\n\
                  Select a bundle by id or id prefix:\n    portacode validate 0f1e2d3c")]
pub struct SelectorArgs {
    /// Bundle label, id, or id prefix (at least 4 characters)
    pub bundle: String,
}
