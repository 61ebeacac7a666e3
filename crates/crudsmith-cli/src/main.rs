//! # crudsmith
//!
//! Generates the model, controller, form requests, API resource, migration
//! and views for one Laravel resource from compact field definitions.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                          |
//! |------|----------------------------------|
//! |  0   | Success                          |
//! |  1   | Internal / system error          |
//! |  2   | User error (input or conflict)   |
//! |  3   | Resource not found               |
//! |  4   | Configuration error              |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is not an error.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here as well.
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    // Held until exit so the file writer flushes.
    let _log_guard = match init_logging(&cli.global) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::from(1);
        }
    };

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let colored = !cli.global.no_color && std::io::stderr().is_terminal();

    // `init` may be creating the very file `--config` names.
    let config = if matches!(cli.command, Commands::Init(_) | Commands::Completions(_)) {
        AppConfig::default()
    } else {
        match AppConfig::load(cli.global.config.as_deref()) {
            Ok(cfg) => cfg,
            Err(e) => return handle_error(CliError::config(e), verbose, colored),
        }
    };

    let output = OutputManager::new(&cli.global, &config);

    match run(cli, config, output) {
        Ok(()) => {
            info!("crudsmith completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, colored),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Make(cmd) => commands::make::execute(cmd, cli.global, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, cli.global, output),
        Commands::Guidelines(cmd) => commands::guidelines::execute(cmd, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, cli.global, config, output),
    }
}

/// Translate a `CliError` into a user message and an exit code.
///
/// Written to stderr, so the message survives a redirected stdout.
fn handle_error(err: CliError, verbose: bool, colored: bool) -> ExitCode {
    err.log();
    eprint!("{}", err.render(verbose, colored));

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
