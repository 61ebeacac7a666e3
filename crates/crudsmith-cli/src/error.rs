//! Error handling for the crudsmith CLI.
//!
//! Every failure that reaches `main` is a [`CliError`]: it knows its
//! suggestions, its exit code, and how to render itself with or without
//! colour.

use std::error::Error as _;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use crudsmith_core::prelude::CrudError;

pub use crudsmith_core::prelude::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input not caught by argument parsing.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// `config get` was asked for a key that does not exist.
    #[error("Unknown configuration key '{key}'")]
    UnknownConfigKey { key: String },

    /// `init` found a config file and `--force` was not given.
    #[error("Configuration file already exists at {}", path.display())]
    ConfigExists { path: PathBuf },

    /// `guidelines` found a published file and `--force` was not given.
    #[error("Guidelines file already exists at {}", path.display())]
    GuidelinesExist { path: PathBuf },

    /// An error propagated from `crudsmith-core`.
    #[error("Generation failed: {0}")]
    Core(#[from] CrudError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Wrap an `anyhow` failure from config loading.
    pub fn config(err: anyhow::Error) -> Self {
        Self::ConfigError {
            message: format!("{err:#}"),
            source: Some(err.into()),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { .. } => vec![
                "Check the file named by --config or CRUDSMITH_CONFIG".into(),
                "Print the active location with: crudsmith config path".into(),
                "Write a fresh default with: crudsmith init --force".into(),
            ],

            Self::UnknownConfigKey { .. } => vec![
                "Keys are dotted paths, e.g. generator.paths.models".into(),
                "List every key with: crudsmith config list".into(),
            ],

            Self::ConfigExists { .. } => {
                vec!["Use --force to overwrite it with the defaults".into()]
            }

            Self::GuidelinesExist { .. } => {
                vec!["Use --force to overwrite it with the bundled version".into()]
            }

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. }
            | Self::ConfigExists { .. }
            | Self::GuidelinesExist { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::UnknownConfigKey { .. } => ErrorCategory::NotFound,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    fn rolled_back(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_rolled_back())
    }

    fn leftovers(&self) -> &[PathBuf] {
        match self {
            Self::Core(e) => e.leftovers(),
            _ => &[],
        }
    }

    /// The message `main` prints to stderr.
    ///
    /// `verbose` adds the source chain and drops the hint pointing at `-v`.
    pub fn render(&self, verbose: bool, colored: bool) -> String {
        let paint = Painter(colored);
        let mut out = format!(
            "\n{} {}\n",
            paint.red_bold("\u{2717} Error:"),
            paint.red(&self.to_string())
        );

        if self.rolled_back() {
            out.push_str(&format!("  {}\n", paint.yellow(ROLLBACK_NOTICE)));
        }

        let leftovers = self.leftovers();
        if !leftovers.is_empty() {
            out.push_str(&format!("  {}\n", paint.red_bold(INCOMPLETE_NOTICE)));
            for path in leftovers {
                out.push_str(&format!("    {}\n", path.display()));
            }
        }

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!("  {}\n", paint.dimmed(&format!("caused by: {err}"))));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", paint.yellow("Suggestions:")));
            for line in suggestions {
                out.push_str(&format!("  \u{2022} {line}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint.dimmed("Run again with -v for the underlying cause.")
            ));
        }
        out
    }

    /// Emit one event at a level matching the category.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(exit_code = self.exit_code(), "{self}");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(exit_code = self.exit_code(), "{self}");
            }
        }
    }
}

/// Applies colour only when enabled.
struct Painter(bool);

impl Painter {
    fn red_bold(&self, s: &str) -> String {
        if self.0 { s.red().bold().to_string() } else { s.to_owned() }
    }

    fn red(&self, s: &str) -> String {
        if self.0 { s.red().to_string() } else { s.to_owned() }
    }

    fn yellow(&self, s: &str) -> String {
        if self.0 { s.yellow().to_string() } else { s.to_owned() }
    }

    fn dimmed(&self, s: &str) -> String {
        if self.0 { s.dimmed().to_string() } else { s.to_owned() }
    }
}

const ROLLBACK_NOTICE: &str = "All changes have been rolled back.";
const INCOMPLETE_NOTICE: &str = "Rollback incomplete. These files were left on disk:";

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, conflicts, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, serde_json::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use crudsmith_core::prelude::{ApplicationError, ArtifactKind, DomainError};

    fn conflict() -> CrudError {
        CrudError::Application(ApplicationError::FileExists {
            kind: ArtifactKind::Model,
            path: PathBuf::from("app/Models/Product.php"),
        })
    }

    fn write_failure() -> CrudError {
        CrudError::Application(ApplicationError::FilesystemError {
            path: PathBuf::from("resources/js/Pages/Products/Edit.vue"),
            reason: "disk full".into(),
        })
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn conflict_is_a_user_error() {
        assert_eq!(CliError::Core(conflict()).exit_code(), 2);
    }

    #[test]
    fn invalid_field_is_a_user_error() {
        let err = CliError::Core(CrudError::Domain(DomainError::InvalidFieldType {
            field_type: "money".into(),
            supported: vec!["string", "decimal"],
        }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn rolled_back_write_failure_keeps_cause_category() {
        let err = CliError::Core(CrudError::rolled_back(write_failure()));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn unknown_key_is_not_found() {
        assert_eq!(CliError::UnknownConfigKey { key: "x".into() }.exit_code(), 3);
    }

    #[test]
    fn config_error_exit_code() {
        assert_eq!(CliError::config(anyhow::anyhow!("bad toml")).exit_code(), 4);
    }

    #[test]
    fn io_error_is_internal() {
        let err = CliError::from(io::Error::other("e"));
        assert_eq!(err.exit_code(), 1);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn conflict_suggests_force() {
        let s = CliError::Core(conflict()).render(false, false);
        assert!(s.contains("Error: Generation failed"));
        assert!(s.contains("--force"));
        assert!(!s.contains(ROLLBACK_NOTICE));
    }

    #[test]
    fn plain_rendering_has_no_escape_codes() {
        let s = CliError::Core(conflict()).render(true, false);
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn rollback_is_announced() {
        let err = CliError::Core(CrudError::rolled_back(write_failure()));
        assert!(err.render(false, false).contains(ROLLBACK_NOTICE));
        assert!(err.render(false, true).contains(ROLLBACK_NOTICE));
    }

    #[test]
    fn incomplete_rollback_lists_leftovers_instead_of_confirming() {
        let err = CliError::Core(CrudError::rollback_incomplete(
            write_failure(),
            vec![PathBuf::from("app/Models/Product.php")],
        ));
        let s = err.render(false, false);

        assert!(!s.contains(ROLLBACK_NOTICE));
        assert!(s.contains(INCOMPLETE_NOTICE));
        assert!(s.contains("    app/Models/Product.php\n"));
        assert!(s.contains("Remove the leftover file manually: app/Models/Product.php"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn verbose_shows_chain_and_omits_hint() {
        let err = CliError::config(anyhow::anyhow!("expected `=`"));
        let s = err.render(true, false);
        assert!(s.contains("caused by: expected `=`"));
        assert!(!s.contains("Run again with -v"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { message, .. }) if message == "reading config"));
    }
}
