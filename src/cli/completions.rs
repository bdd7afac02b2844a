use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    portacode completions bash > ~/.bash_completion.d/portacode\n\n\
                  Generate zsh completions:\n    portacode completions zsh > ~/.zfunc/_portacode\n\n\
                  Generate fish completions:\n    portacode completions fish > ~/.config/fish/completions/portacode.fish\n\n\
                  Generate PowerShell completions:\n    portacode completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
