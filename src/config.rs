//! Configuration file support for dependency-diff.
//!
//! Provides YAML-based configuration through `dependency-diff.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use dependency_diff::application::dto::OutputFormat;
use dependency_diff::comparison::domain::{GroupDefinition, GroupTable};
use dependency_diff::comparison::services::DependencyFilter;
use dependency_diff::shared::Result;

pub const CONFIG_FILENAME: &str = "dependency-diff.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub exclude_dependencies: Option<Vec<String>>,
    pub fail_on_changes: Option<bool>,
    /// Replaces the standard group table when present.
    pub groups: Option<Vec<GroupConfig>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// One dependency group: manifest keys merged into a single report section.
#[derive(Debug, Deserialize)]
pub struct GroupConfig {
    pub id: String,
    pub keys: Vec<String>,
    pub title: Option<String>,
}

impl ConfigFile {
    /// The configured output format, if any.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| OutputFormat::from_str(format).map_err(anyhow::Error::msg))
            .transpose()
    }

    /// The configured group table, if any.
    pub fn group_table(&self) -> Result<Option<GroupTable>> {
        let Some(groups) = &self.groups else {
            return Ok(None);
        };

        let definitions = groups
            .iter()
            .map(|group| {
                let title = group.title.clone().unwrap_or_else(|| group.id.clone());
                GroupDefinition::new(group.id.clone(), group.keys.clone(), title)
            })
            .collect();

        Ok(Some(GroupTable::new(definitions)?))
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.output_format().with_context(|| {
        "Invalid config: format\n\n💡 Hint: Use one of 'json', 'markdown' or 'text'."
    })?;

    config.group_table().context("Invalid config: groups")?;

    if let Some(ref patterns) = config.exclude_dependencies {
        DependencyFilter::new(patterns.clone())
            .context("Invalid config: exclude_dependencies")?;
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
