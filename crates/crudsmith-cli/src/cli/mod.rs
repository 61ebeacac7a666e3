//! Argument grammar for the `crudsmith` binary (clap derive).
//!
//! Parsing only. Handlers in [`crate::commands`] turn these structs into
//! calls on the core.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name    = "crudsmith",
    bin_name = "crudsmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate a complete CRUD stack for one resource",
    long_about = "crudsmith writes the model, controller, form requests, API resource, \
                  migration and views for a resource from a list of field definitions. \
                  A failure part-way through removes every file the run wrote.",
    after_help = "EXAMPLES:\n\
        \x20 crudsmith make Product name:string price:decimal sku:string:unique\n\
        \x20 crudsmith make Post title:string body:text published_at:datetime:nullable --no-views\n\
        \x20 crudsmith make Invoice total:decimal --table billing_invoices\n\
        \x20 crudsmith completions bash > /usr/share/bash-completion/completions/crudsmith",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate CRUD artifacts for a resource.
    #[command(
        visible_alias = "crud",
        about = "Generate CRUD artifacts for a resource",
        after_help = "FIELD FORMAT:\n\
            \x20 name:type[:modifier]...\n\
            \x20 types:     string text integer decimal boolean date datetime timestamp json\n\
            \x20 modifiers: nullable unique\n\n\
            EXAMPLES:\n\
            \x20 crudsmith make Product name:string price:decimal\n\
            \x20 crudsmith make User email:string:unique bio:text:nullable --no-auditing\n\
            \x20 crudsmith make Product name:string --force --path ../shop"
    )]
    Make(MakeArgs),

    /// Initialise a crudsmith configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 crudsmith init           # default location\n\
            \x20 crudsmith init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Publish the CRUD conventions document into a project.
    #[command(
        about = "Publish CRUD guidelines to .ai/guidelines",
        after_help = "EXAMPLES:\n\
            \x20 crudsmith guidelines\n\
            \x20 crudsmith guidelines --force --path ../shop"
    )]
    Guidelines(GuidelinesArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudsmith completions bash > ~/.local/share/bash-completion/completions/crudsmith\n\
            \x20 crudsmith completions zsh  > ~/.zfunc/_crudsmith\n\
            \x20 crudsmith completions fish > ~/.config/fish/completions/crudsmith.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the crudsmith configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 crudsmith config get generator.namespaces.model\n\
            \x20 crudsmith config list\n\
            \x20 crudsmith config path"
    )]
    Config(ConfigCommands),
}

/// Arguments for `crudsmith make`.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Resource name in PascalCase, e.g. `Product` or `OrderItem`.
    #[arg(value_name = "RESOURCE", help = "Resource (model) name")]
    pub resource: String,

    /// Field definitions, `name:type[:modifier]...`.
    #[arg(
        value_name = "FIELD",
        num_args = 1..,
        required = true,
        help = "Field definitions (name:type[:nullable][:unique])"
    )]
    pub fields: Vec<String>,

    /// Do not add soft deletes to the model and migration.
    #[arg(long = "no-soft-deletes", help = "Skip soft deletes")]
    pub no_soft_deletes: bool,

    /// Do not make the model auditable.
    #[arg(long = "no-auditing", help = "Skip auditing")]
    pub no_auditing: bool,

    /// Do not generate view pages.
    #[arg(long = "no-views", help = "Skip view generation")]
    pub no_views: bool,

    /// Table name, instead of the one derived from the resource.
    #[arg(long = "table", value_name = "NAME", help = "Custom table name")]
    pub table: Option<String>,

    /// Overwrite existing artifacts (destructive).
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Project root the configured output paths are relative to.
    #[arg(
        long = "path",
        value_name = "DIR",
        default_value = ".",
        help = "Project root directory"
    )]
    pub path: PathBuf,
}

/// Arguments for `crudsmith init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

/// Arguments for `crudsmith guidelines`.
#[derive(Debug, Args)]
pub struct GuidelinesArgs {
    /// Overwrite a previously published file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing guidelines file")]
    pub force: bool,

    /// Project root to publish into.
    #[arg(
        long = "path",
        value_name = "DIR",
        default_value = ".",
        help = "Project root directory"
    )]
    pub path: PathBuf,
}

/// Arguments for `crudsmith completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Subcommands for `crudsmith config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.paths.models`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_make_command() {
        let cli = Cli::parse_from([
            "crudsmith",
            "make",
            "Product",
            "name:string",
            "price:decimal",
            "--no-views",
            "--table",
            "items",
        ]);
        let Commands::Make(args) = cli.command else {
            panic!("expected Make command");
        };
        assert_eq!(args.resource, "Product");
        assert_eq!(args.fields, ["name:string", "price:decimal"]);
        assert!(args.no_views);
        assert!(!args.no_soft_deletes);
        assert_eq!(args.table.as_deref(), Some("items"));
        assert_eq!(args.path, PathBuf::from("."));
    }

    #[test]
    fn crud_alias() {
        let cli = Cli::parse_from(["crudsmith", "crud", "Tag", "label:string"]);
        assert!(matches!(cli.command, Commands::Make(_)));
    }

    #[test]
    fn make_requires_a_field() {
        assert!(Cli::try_parse_from(["crudsmith", "make", "Product"]).is_err());
    }

    #[test]
    fn parse_guidelines_force() {
        let cli = Cli::parse_from(["crudsmith", "guidelines", "--force"]);
        let Commands::Guidelines(args) = cli.command else {
            panic!("expected Guidelines command");
        };
        assert!(args.force);
        assert_eq!(args.path, PathBuf::from("."));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["crudsmith", "--quiet", "--verbose", "config", "path"]);
        assert!(result.is_err());
    }
}
