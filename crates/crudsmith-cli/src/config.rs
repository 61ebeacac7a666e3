//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! generator section is handed to the core untouched; core never reads files
//! or environment itself.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. Environment variables, `CRUDSMITH_<SECTION>__<KEY>`
//! 3. Config file (`--config`, `CRUDSMITH_CONFIG`, or the default path)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use crudsmith_core::prelude::GeneratorConfig;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Namespaces, output paths, option defaults and type overrides.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// An explicit `config_file` must exist. The default location is
    /// optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix("CRUDSMITH"))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        if required && !path.is_file() {
            anyhow::bail!("configuration file not found: {}", path.display());
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()
            .with_context(|| format!("reading configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.crudsmith.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "crudsmith", "crudsmith")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".crudsmith.toml"))
    }

    /// The file `config path` reports: the explicit one if given.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file.map_or_else(Self::config_path, Path::to_path_buf)
    }

    /// Render the configuration as TOML, as written by `crudsmith init`.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("serialising configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crudsmith_core::prelude::FieldType;

    fn no_env() -> Environment {
        Environment::with_prefix("CRUDSMITH").source(Some(HashMap::new()))
    }

    #[test]
    fn defaults_enable_every_option() {
        let cfg = AppConfig::default();
        assert!(cfg.generator.defaults.soft_deletes);
        assert!(cfg.generator.defaults.generate_views);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("absent.toml"), false, no_env()).unwrap();
        assert_eq!(cfg.generator.paths.models, PathBuf::from("app/Models"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = AppConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("crudsmith.toml");
        std::fs::write(
            &path,
            r#"
[generator.defaults]
auditing = false

[generator.paths]
views = "resources/js/pages"

[generator.field_types.decimal]
cast = "decimal:4"
"#,
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, no_env()).unwrap();
        assert!(!cfg.generator.defaults.auditing);
        assert!(cfg.generator.defaults.soft_deletes);
        assert_eq!(cfg.generator.paths.views, PathBuf::from("resources/js/pages"));
        assert_eq!(cfg.generator.paths.models, PathBuf::from("app/Models"));
        assert_eq!(cfg.generator.cast_for(FieldType::Decimal), "decimal:4");
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("crudsmith.toml");
        std::fs::write(&path, "[generator.defaults]\nsoft_deletes = true\n").unwrap();

        let env = Environment::with_prefix("CRUDSMITH").source(Some(HashMap::from([(
            "CRUDSMITH_GENERATOR__DEFAULTS__SOFT_DELETES".to_string(),
            "false".to_string(),
        )])));
        let cfg = AppConfig::load_from(&path, true, env).unwrap();
        assert!(!cfg.generator.defaults.soft_deletes);
    }

    #[test]
    fn toml_output_reloads() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("crudsmith.toml");
        std::fs::write(&path, AppConfig::default().to_toml().unwrap()).unwrap();

        let cfg = AppConfig::load_from(&path, true, no_env()).unwrap();
        assert_eq!(cfg.generator.namespaces.model, r"App\Models");
        assert!(!cfg.generator.reserved_words.is_empty());
    }

    #[test]
    fn active_path_prefers_explicit() {
        let explicit = PathBuf::from("/tmp/custom.toml");
        assert_eq!(AppConfig::active_path(Some(explicit.as_path())), explicit);
        assert_eq!(AppConfig::active_path(None), AppConfig::config_path());
    }
}
