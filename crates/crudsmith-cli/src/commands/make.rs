//! Implementation of the `crudsmith make` command.
//!
//! Responsibility: wire the real adapters into a [`CrudGenerator`], map the
//! flags onto [`OptionOverrides`], and display the result. No generation
//! logic lives here.

use std::path::Path;

use tracing::{info, instrument};

use crudsmith_adapters::{LocalFilesystem, StubRenderer, SystemClock};
use crudsmith_core::prelude::{CrudGenerator, GenerationResult, GeneratorConfig, OptionOverrides};

use crate::{
    cli::{MakeArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, manifest_json},
};

const FORCE_WARNING: &str = "--force given: existing files will be overwritten, \
     and a failed run deletes them rather than restoring them";

/// Execute the `crudsmith make` command.
#[instrument(skip_all, fields(resource = %args.resource))]
pub fn execute(
    args: MakeArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    validate_args(&args)?;
    let generator = build_generator(config.generator, &args.path)?;
    let overrides = overrides_from(&args);

    if output.format() != OutputFormat::Json {
        output.header(&format!("Generating CRUD for {}...", args.resource))?;
        if args.force {
            output.warning(FORCE_WARNING)?;
        }
    }

    let result = generator.generate(&args.resource, args.fields.as_slice(), overrides)?;
    info!(files = result.file_count(), "CRUD generated");

    if output.format() == OutputFormat::Json {
        output.json(&manifest_json(&result, &args.path))?;
        return Ok(());
    }

    output.success(&format!(
        "Generated {} files for {} (table: {})",
        result.file_count(),
        result.resource(),
        result.table_name()
    ))?;
    output.manifest(&result, &args.path)?;

    if !global.quiet {
        print_next_steps(&result, &output)?;
    }

    Ok(())
}

/// Checks the core does not make: the root must exist and a custom table
/// name must be a plain SQL identifier.
fn validate_args(args: &MakeArgs) -> CliResult<()> {
    if !args.path.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("--path {} is not a directory", args.path.display()),
        });
    }
    if let Some(table) = args.table.as_deref() {
        if !is_identifier(table) {
            return Err(CliError::InvalidInput {
                message: format!(
                    "--table '{table}' must be lowercase letters, digits and underscores"
                ),
            });
        }
    }
    Ok(())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Assemble the generator from the real filesystem, the stub renderer and
/// the system clock.
fn build_generator(config: GeneratorConfig, root: &Path) -> CliResult<CrudGenerator> {
    let renderer = match config.stubs_dir.as_deref() {
        Some(dir) => StubRenderer::new().with_overrides_dir(resolve_stubs_dir(dir, root))?,
        None => StubRenderer::new(),
    };

    Ok(CrudGenerator::new(
        Box::new(LocalFilesystem::new()),
        Box::new(renderer),
        Box::new(SystemClock),
        config,
    )
    .with_output_root(root))
}

/// Relative stub directories are resolved against the project root.
fn resolve_stubs_dir(dir: &Path, root: &Path) -> std::path::PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        root.join(dir)
    }
}

/// Negative flags only ever switch an option off; absent flags defer to the
/// configured defaults.
fn overrides_from(args: &MakeArgs) -> OptionOverrides {
    OptionOverrides {
        soft_deletes: args.no_soft_deletes.then_some(false),
        auditing: args.no_auditing.then_some(false),
        generate_views: args.no_views.then_some(false),
        table: args.table.clone(),
        force: Some(args.force),
    }
}

fn print_next_steps(result: &GenerationResult, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.print("Next steps:")?;
    output.print("  1. Review the migration, then run: php artisan migrate")?;
    output.print(&format!(
        "  2. Register the routes: Route::resource('{}', {}Controller::class);",
        result.route_name(),
        result.resource()
    ))?;
    if result.options().auditing {
        output.print("  3. Make sure owen-it/laravel-auditing is installed")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(flags: &[&str]) -> MakeArgs {
        use clap::Parser;
        let mut argv = vec!["crudsmith", "make", "Product", "name:string"];
        argv.extend_from_slice(flags);
        match crate::cli::Cli::parse_from(argv).command {
            crate::cli::Commands::Make(args) => args,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn absent_flags_defer_to_defaults() {
        let overrides = overrides_from(&args(&[]));
        assert_eq!(overrides.soft_deletes, None);
        assert_eq!(overrides.auditing, None);
        assert_eq!(overrides.generate_views, None);
        assert_eq!(overrides.force, Some(false));
    }

    #[test]
    fn negative_flags_switch_off() {
        let overrides = overrides_from(&args(&["--no-soft-deletes", "--no-views", "--force"]));
        assert_eq!(overrides.soft_deletes, Some(false));
        assert_eq!(overrides.auditing, None);
        assert_eq!(overrides.generate_views, Some(false));
        assert_eq!(overrides.force, Some(true));
    }

    #[test]
    fn table_names_are_identifiers() {
        assert!(is_identifier("catalog_items"));
        assert!(is_identifier("_tmp2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2items"));
        assert!(!is_identifier("Items"));
        assert!(!is_identifier("items; drop"));
    }

    #[test]
    fn missing_root_is_invalid_input() {
        let err = validate_args(&args(&["--path", "/definitely/not/here"])).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn relative_stubs_dir_is_rooted() {
        assert_eq!(
            resolve_stubs_dir(Path::new("stubs/crud"), Path::new("/srv/shop")),
            PathBuf::from("/srv/shop/stubs/crud")
        );
        assert_eq!(
            resolve_stubs_dir(Path::new("/opt/stubs"), Path::new("/srv/shop")),
            PathBuf::from("/opt/stubs")
        );
    }
}
