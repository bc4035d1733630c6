//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::{Result, command};

/// Generate shell completions
pub fn run(args: &CompletionsArgs) -> Result<()> {
    let shell_name = args.shell.to_lowercase();
    let shell = match shell_name.as_str() {
        "bash" => clap_complete::Shell::Bash,
        "elvish" => clap_complete::Shell::Elvish,
        "fish" => clap_complete::Shell::Fish,
        "powershell" | "pwsh" => clap_complete::Shell::PowerShell,
        "zsh" => clap_complete::Shell::Zsh,
        _ => return Err(command::unsupported_shell(&args.shell)),
    };

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "cssfirst", &mut std::io::stdout().lock());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CssfirstError;

    fn args(shell: &str) -> CompletionsArgs {
        CompletionsArgs {
            shell: shell.to_string(),
        }
    }

    #[test]
    fn test_completions_supported_shells() {
        for shell in ["bash", "elvish", "fish", "powershell", "pwsh", "zsh"] {
            assert!(run(&args(shell)).is_ok(), "{shell} should be supported");
        }
    }

    #[test]
    fn test_completions_mixed_case() {
        assert!(run(&args("Zsh")).is_ok());
        assert!(run(&args("BASH")).is_ok());
    }

    #[test]
    fn test_completions_unknown_shell() {
        let err = run(&args("tcsh")).unwrap_err();
        assert!(matches!(err, CssfirstError::UnsupportedShell { .. }));
    }
}
