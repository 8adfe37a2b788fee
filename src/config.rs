//! Configuration file support for license-catalog.
//!
//! Provides YAML-based configuration through `license-catalog.config.yml`
//! files, including data structures, file loading, validation and merging
//! with command-line flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use license_catalog::application::dto::OutputFormat;
use license_catalog::catalog::domain::AssemblyStyle;
use license_catalog::catalog::policies::DEFAULT_CONFIGURATION_NAMES;
use license_catalog::shared::security::{safe_read_to_string, MAX_INPUT_FILE_SIZE};
use license_catalog::shared::Result;

pub const CONFIG_FILENAME: &str = "license-catalog.config.yml";

const DEFAULT_VARIANT: &str = "release";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub variant: Option<String>,
    pub additional_scopes: Option<Vec<String>>,
    pub configuration_names: Option<Vec<String>>,
    pub exclude_groups: Option<Vec<String>>,
    pub exclude_artifacts: Option<Vec<String>>,
    pub style: Option<String>,
    pub format: Option<String>,
    pub snapshot: Option<PathBuf>,
    pub repository: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after merging the config file with CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub variant: String,
    pub additional_scopes: Vec<String>,
    pub configuration_names: Vec<String>,
    pub exclude_groups: Vec<String>,
    pub exclude_artifacts: Vec<String>,
    pub style: AssemblyStyle,
    pub format: OutputFormat,
    pub snapshot: Option<PathBuf>,
    pub repository: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub dry_run: bool,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = safe_read_to_string(path, "config file", MAX_INPUT_FILE_SIZE).with_context(
        || {
            format!(
                "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
                path.display()
            )
        },
    )?;

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
    if let Some(ref variant) = config.variant {
        if variant.trim().is_empty() {
            bail!(
                "Invalid config: variant must not be empty.\n\n\
                 💡 Hint: Name a build variant such as \"release\"."
            );
        }
    }

    if let Some(ref scopes) = config.additional_scopes {
        for (i, scope) in scopes.iter().enumerate() {
            if scope.trim().is_empty() {
                bail!(
                    "Invalid config: additional_scopes[{}] must not be empty.\n\n\
                     💡 Hint: Each additional scope must be a name such as \"test\".",
                    i
                );
            }
        }
    }

    if let Some(ref artifacts) = config.exclude_artifacts {
        for (i, artifact) in artifacts.iter().enumerate() {
            if !is_group_and_name(artifact) {
                bail!(
                    "Invalid config: exclude_artifacts[{}] '{}' is not of the form group:name.\n\n\
                     💡 Hint: Use coordinates such as \"junit:junit\".",
                    i,
                    artifact
                );
            }
        }
    }

    if let Some(ref style) = config.style {
        style
            .parse::<AssemblyStyle>()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }

    if let Some(ref format) = config.format {
        format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }

    Ok(())
}

fn is_group_and_name(value: &str) -> bool {
    match value.split_once(':') {
        Some((group, name)) => {
            !group.trim().is_empty() && !name.trim().is_empty() && !name.contains(':')
        }
        None => false,
    }
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Merge CLI flags over config values.
///
/// Scalar flags win when given. List flags replace the config list when at
/// least one value is given on the command line.
pub fn resolve_settings(args: &Args, config: Option<ConfigFile>) -> Result<Settings> {
    let config = config.unwrap_or_default();

    let style = match (args.style, config.style.as_deref()) {
        (Some(style), _) => style,
        (None, Some(style)) => style.parse::<AssemblyStyle>().map_err(anyhow::Error::msg)?,
        (None, None) => AssemblyStyle::StructuredWithScope,
    };
    let format = match (args.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(format)) => format.parse::<OutputFormat>().map_err(anyhow::Error::msg)?,
        (None, None) => OutputFormat::default(),
    };

    Ok(Settings {
        variant: args
            .variant
            .clone()
            .or(config.variant)
            .unwrap_or_else(|| DEFAULT_VARIANT.to_string()),
        additional_scopes: pick_list(&args.scopes, config.additional_scopes, Vec::new),
        configuration_names: pick_list(&args.configurations, config.configuration_names, || {
            DEFAULT_CONFIGURATION_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect()
        }),
        exclude_groups: pick_list(&args.exclude_groups, config.exclude_groups, Vec::new),
        exclude_artifacts: pick_list(&args.exclude_artifacts, config.exclude_artifacts, Vec::new),
        style,
        format,
        snapshot: args.snapshot.clone().or(config.snapshot),
        repository: args.repository.clone().or(config.repository),
        output_dir: args
            .output_dir
            .clone()
            .or(config.output_dir)
            .unwrap_or_else(|| PathBuf::from(".")),
        dry_run: args.dry_run,
    })
}

fn pick_list(
    cli: &[String],
    config: Option<Vec<String>>,
    default: impl FnOnce() -> Vec<String>,
) -> Vec<String> {
    if !cli.is_empty() {
        cli.to_vec()
    } else {
        config.unwrap_or_else(default)
    }
}
