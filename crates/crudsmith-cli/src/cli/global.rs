//! Flags shared by every subcommand, flattened into [`super::Cli`].

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more. `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour (also set by any non-empty `NO_COLOR`).
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read configuration from FILE instead of the per-user location.
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        env = "CRUDSMITH_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// How results are written to stdout.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,

    /// Also append JSON log lines to FILE.
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

/// Rendering of command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Coloured, for people.
    Human,
    /// No colour, for logs and pipes.
    Plain,
    /// One JSON document.
    Json,
}
