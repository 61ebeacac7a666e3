//! Generation-wide options.

use serde::{Deserialize, Serialize};

/// Configured default values for the boolean options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionDefaults {
    pub soft_deletes: bool,
    pub auditing: bool,
    pub generate_views: bool,
}

impl Default for OptionDefaults {
    fn default() -> Self {
        Self {
            soft_deletes: true,
            auditing: true,
            generate_views: true,
        }
    }
}

/// Caller-supplied values. `None` falls back to the configured default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub soft_deletes: Option<bool>,
    pub auditing: Option<bool>,
    pub generate_views: Option<bool>,
    pub table: Option<String>,
    pub force: Option<bool>,
}

/// Options resolved once per generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationOptions {
    pub soft_deletes: bool,
    pub auditing: bool,
    pub generate_views: bool,
    pub table: Option<String>,
    pub force: bool,
    /// Reserved extension point. Always empty.
    pub relationships: String,
}

impl GenerationOptions {
    pub fn resolve(defaults: &OptionDefaults, overrides: OptionOverrides) -> Self {
        Self {
            soft_deletes: overrides.soft_deletes.unwrap_or(defaults.soft_deletes),
            auditing: overrides.auditing.unwrap_or(defaults.auditing),
            generate_views: overrides.generate_views.unwrap_or(defaults.generate_views),
            table: overrides.table.filter(|t| !t.trim().is_empty()),
            force: overrides.force.unwrap_or(false),
            relationships: String::new(),
        }
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::resolve(&OptionDefaults::default(), OptionOverrides::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_on_and_not_forced() {
        let opts = GenerationOptions::default();
        assert!(opts.soft_deletes);
        assert!(opts.auditing);
        assert!(opts.generate_views);
        assert!(!opts.force);
        assert_eq!(opts.table, None);
        assert!(opts.relationships.is_empty());
    }

    #[test]
    fn overrides_win_over_defaults() {
        let defaults = OptionDefaults {
            soft_deletes: false,
            ..OptionDefaults::default()
        };
        let opts = GenerationOptions::resolve(
            &defaults,
            OptionOverrides {
                soft_deletes: Some(true),
                generate_views: Some(false),
                table: Some("stock_items".into()),
                force: Some(true),
                ..OptionOverrides::default()
            },
        );

        assert!(opts.soft_deletes);
        assert!(opts.auditing);
        assert!(!opts.generate_views);
        assert!(opts.force);
        assert_eq!(opts.table.as_deref(), Some("stock_items"));
    }

    #[test]
    fn configured_defaults_apply_without_overrides() {
        let defaults = OptionDefaults {
            auditing: false,
            ..OptionDefaults::default()
        };
        let opts = GenerationOptions::resolve(&defaults, OptionOverrides::default());
        assert!(!opts.auditing);
    }

    #[test]
    fn blank_table_is_treated_as_absent() {
        let opts = GenerationOptions::resolve(
            &OptionDefaults::default(),
            OptionOverrides {
                table: Some("  ".into()),
                ..OptionOverrides::default()
            },
        );
        assert_eq!(opts.table, None);
    }
}
