//! Completions command arguments

use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug, Clone)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    bundleme completions --shell bash > ~/.bash_completion.d/bundleme\n\n\
                  Generate zsh completions:\n    bundleme completions --shell zsh > ~/.zfunc/_bundleme\n\n\
                  Generate fish completions:\n    bundleme completions --shell fish > ~/.config/fish/completions/bundleme.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum, ignore_case = true)]
    pub shell: clap_complete::Shell,
}
