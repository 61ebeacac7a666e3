//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};

const BIN_NAME: &str = "crudsmith";

pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    let mut out = std::io::stdout();
    match args.shell {
        Shell::Bash => write_script(shells::Bash, &mut out),
        Shell::Zsh => write_script(shells::Zsh, &mut out),
        Shell::Fish => write_script(shells::Fish, &mut out),
        Shell::PowerShell => write_script(shells::PowerShell, &mut out),
        Shell::Elvish => write_script(shells::Elvish, &mut out),
    }
    Ok(())
}

fn write_script<G: Generator>(shell: G, out: &mut dyn std::io::Write) {
    generate(shell, &mut Cli::command(), BIN_NAME, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_mentions_subcommands() {
        let mut buf = Vec::new();
        write_script(shells::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("crudsmith"));
        assert!(script.contains("make"));
    }
}
