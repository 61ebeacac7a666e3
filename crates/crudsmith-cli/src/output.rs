//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;
use serde_json::{Map, Value, json};

use crudsmith_core::prelude::GenerationResult;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => configured_format(&config.output.format),
            other => other,
        };
        // Auto resolves to Human on a TTY, Plain when piped.
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Writers ───────────────────────────────────────────────────────────

    /// One line of stdout unless `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.bold().to_string()
        };
        self.print(&line)
    }

    fn marked(&self, mark: Mark, msg: &str) -> io::Result<()> {
        let symbol = mark.symbol();
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            match mark {
                Mark::Success => format!("{} {msg}", symbol.green().bold()),
                Mark::Warning => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
                Mark::Info => format!("{} {msg}", symbol.cyan()),
            }
        };
        self.print(&line)
    }

    /// Machine-readable output. Printed even in quiet mode.
    pub fn json(&self, value: &Value) -> io::Result<()> {
        let rendered = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&rendered)
    }

    /// List every generated file, grouped the way the result groups them.
    ///
    /// Paths are shown relative to `root`.
    pub fn manifest(&self, result: &GenerationResult, root: &Path) -> io::Result<()> {
        for line in manifest_lines(result, root) {
            let line = if self.no_color {
                line
            } else {
                line.dimmed().to_string()
            };
            self.print(&line)?;
        }
        Ok(())
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

#[derive(Clone, Copy)]
enum Mark {
    Success,
    Warning,
    Info,
}

impl Mark {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Warning => "\u{26a0}",
            Self::Info => "\u{2139}",
        }
    }
}

fn configured_format(name: &str) -> OutputFormat {
    match name.to_ascii_lowercase().as_str() {
        "human" => OutputFormat::Human,
        "plain" => OutputFormat::Plain,
        "json" => OutputFormat::Json,
        _ => OutputFormat::Auto,
    }
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

fn manifest_lines(result: &GenerationResult, root: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    for group in result.groups() {
        let members = result.group(group);
        match members.as_slice() {
            [(slot, path)] if *slot == group => {
                lines.push(format!("  {group:<12}{}", display_path(path, root)));
            }
            _ => {
                lines.push(format!("  {group}"));
                for (slot, path) in members {
                    lines.push(format!("    {slot:<10}{}", display_path(path, root)));
                }
            }
        }
    }
    lines
}

/// JSON document describing a successful run.
///
/// Single-file groups map to a path string, multi-file groups to an object
/// keyed by slot.
pub fn manifest_json(result: &GenerationResult, root: &Path) -> Value {
    let mut files = Map::new();
    for group in result.groups() {
        let members = result.group(group);
        let value = match members.as_slice() {
            [(slot, path)] if *slot == group => Value::String(display_path(path, root)),
            _ => Value::Object(
                members
                    .iter()
                    .map(|(slot, path)| ((*slot).to_string(), Value::String(display_path(path, root))))
                    .collect(),
            ),
        };
        files.insert(group.to_string(), value);
    }

    json!({
        "success": true,
        "resource": result.resource(),
        "table": result.table_name(),
        "route": result.route_name(),
        "options": result.options(),
        "file_count": result.file_count(),
        "files": files,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
