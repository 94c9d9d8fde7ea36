//! Site configuration: extra namespaces and parameter defaults

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Namespaces recognized in addition to the built-in ones
    pub namespaces: Vec<String>,
    /// Parameter values applied before the caller's own arguments
    pub defaults: BTreeMap<String, String>,
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid configuration")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Loads `path` when given, otherwise the per-user config file if it
    /// exists, otherwise the empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match default_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "using user config");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Defaults as `name=value` arguments, to be placed before the caller's
    pub fn default_args(&self) -> Vec<String> {
        self.defaults
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect()
    }
}

/// `<config dir>/subpagelist/config.json`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("subpagelist").join("config.json"))
}
