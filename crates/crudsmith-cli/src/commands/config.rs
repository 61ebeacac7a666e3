//! `crudsmith config`: inspect the effective configuration.

use serde_json::Value;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(&config.to_toml().map_err(CliError::config)?)?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::active_path(global.config.as_deref());
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `generator.paths.models`.
///
/// Strings print bare; everything else prints as JSON.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let root = serde_json::to_value(config).with_cli_context(|| "serialising configuration")?;

    let value = key
        .split('.')
        .try_fold(&root, |node, segment| node.get(segment))
        .ok_or_else(|| CliError::UnknownConfigKey { key: key.into() })?;

    Ok(match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_nested_string() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "generator.paths.models").unwrap(),
            "app/Models"
        );
        assert_eq!(
            get_config_value(&cfg, "generator.namespaces.request").unwrap(),
            r"App\Http\Requests"
        );
    }

    #[test]
    fn get_bool_value() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "generator.defaults.soft_deletes").unwrap(),
            "true"
        );
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "generator.does.not.exist"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }
}
