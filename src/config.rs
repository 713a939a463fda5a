//! Configuration file support for awesome-sbom.
//!
//! Provides YAML-based configuration through `awesome-sbom.config.yml` files,
//! including data structures, file loading, validation and the merge of
//! ecosystem entries into the built-in catalog.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::crawl::domain::Ecosystem;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "awesome-sbom.config.yml";

/// Keys that look like credentials; never honored from a file.
const CREDENTIAL_KEYS: &[&str] = &["token", "github_token", "credential"];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output: Option<PathBuf>,
    pub metadata_output: Option<PathBuf>,
    pub sleep_short_secs: Option<u64>,
    pub sleep_long_secs: Option<u64>,
    pub clone_depth: Option<u32>,
    pub skip_existing: Option<bool>,
    pub api_url: Option<String>,
    pub syft_path: Option<PathBuf>,
    pub trivy_path: Option<PathBuf>,
    pub ecosystems: Option<Vec<EcosystemEntry>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// An ecosystem override or addition.
///
/// Entries naming a catalog ecosystem replace only the fields they set;
/// new names need both `source_url` and `manifests`.
#[derive(Debug, Deserialize)]
pub struct EcosystemEntry {
    pub name: String,
    pub source_url: Option<String>,
    pub manifests: Option<Vec<String>>,
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

/// Applies the file's ecosystem entries to `catalog`.
///
/// Overrides keep the catalog position; additions are appended in file order.
pub fn merge_ecosystems(catalog: Vec<Ecosystem>, entries: &[EcosystemEntry]) -> Result<Vec<Ecosystem>> {
    let mut merged = catalog;

    for entry in entries {
        match merged.iter().position(|e| e.name() == entry.name) {
            Some(idx) => {
                let current = &merged[idx];
                let source_url = entry
                    .source_url
                    .clone()
                    .unwrap_or_else(|| current.source_url().to_string());
                let manifests = entry
                    .manifests
                    .clone()
                    .unwrap_or_else(|| current.manifests().to_vec());
                merged[idx] = Ecosystem::new(entry.name.clone(), source_url, manifests)?;
            }
            None => {
                let (Some(source_url), Some(manifests)) = (&entry.source_url, &entry.manifests)
                else {
                    bail!(
                        "Invalid config: ecosystem '{}' is not built in and needs both 'source_url' and 'manifests'.",
                        entry.name
                    );
                };
                merged.push(Ecosystem::new(
                    entry.name.clone(),
                    source_url.clone(),
                    manifests.clone(),
                )?);
            }
        }
    }

    Ok(merged)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref ecosystems) = config.ecosystems {
        for (i, entry) in ecosystems.iter().enumerate() {
            if entry.name.trim().is_empty() {
                bail!(
                    "Invalid config: ecosystems[{}].name must not be empty.\n\n\
                     💡 Hint: Each ecosystems entry must have a non-empty 'name' field (e.g., \"go\").",
                    i
                );
            }
            if entry.manifests.as_ref().is_some_and(|m| m.is_empty()) {
                bail!(
                    "Invalid config: ecosystems[{}].manifests must not be empty.",
                    i
                );
            }
        }
    }

    if config.sleep_short_secs.is_some_and(|s| s > 3600)
        || config.sleep_long_secs.is_some_and(|s| s > 3600)
    {
        bail!("Invalid config: sleep values must not exceed 3600 seconds.");
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        if CREDENTIAL_KEYS.contains(&key.as_str()) {
            eprintln!(
                "⚠️  Warning: Config field '{}' is ignored. Pass the credential with --token or GITHUB_TOKEN.",
                key
            );
        } else {
            eprintln!(
                "⚠️  Warning: Unknown config field '{}' will be ignored.",
                key
            );
        }
    }
}
