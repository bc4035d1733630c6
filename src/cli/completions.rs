use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    cssfirst completions bash > ~/.bash_completion.d/cssfirst\n\n\
                  Generate zsh completions:\n    cssfirst completions zsh > ~/.zfunc/_cssfirst\n\n\
                  Generate fish completions:\n    cssfirst completions fish > ~/.config/fish/completions/cssfirst.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
