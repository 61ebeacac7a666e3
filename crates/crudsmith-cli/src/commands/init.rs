//! `crudsmith init`: write a configuration file holding every default.

use std::path::Path;

use tracing::info;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default crudsmith configuration file.
///
/// Written to `--config` when given, otherwise to the per-user location.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let config_path = AppConfig::active_path(global.config.as_deref());
    write_default(&config_path, args.force)?;

    info!(path = %config_path.display(), "configuration written");
    output.success(&format!(
        "Configuration created at {}",
        config_path.display()
    ))?;
    output.info("Edit it to change namespaces, output paths, option defaults or column types.")?;
    Ok(())
}

fn write_default(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    let toml = AppConfig::default().to_toml().map_err(CliError::config)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_cli_context(|| {
                format!("Failed to create config directory '{}'", parent.display())
            })?;
        }
    }

    std::fs::write(path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}
