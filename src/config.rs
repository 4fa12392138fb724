// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};
use tracing::debug;
use url::Url;

use crate::error::Error;

pub const DEFAULT_SOURCE_URL: &str =
    "https://en.wikipedia.org/wiki/List_of_current_heads_of_state_and_government";
pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";
pub const DEFAULT_ROW_SELECTOR: &str = "table.wikitable tr";
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_BACKOFF_MS: u64 = 500;

/// Where the leader table lives and how hard to try fetching it.
///
/// Built from defaults, then an optional YAML file, then `WORLDLEADERS_*`
/// environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page holding the leader table.
    pub source_url: String,
    /// Prefix for site-relative links found in the table.
    pub base_url: String,
    /// CSS selector matching the table's rows.
    pub row_selector: String,
    pub max_retries: u32,
    pub backoff_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            row_selector: DEFAULT_ROW_SELECTOR.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_ms: DEFAULT_BACKOFF_MS,
        }
    }
}

impl Config {
    /// Defaults, overlaid with `path` if given, overlaid with the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        cfg.apply_env(|key| env::var(key).ok())?;
        cfg.validate()?;
        debug!(?cfg, "configuration loaded");
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_yaml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Apply `WORLDLEADERS_*` overrides looked up through `var`.
    pub fn apply_env<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = var("WORLDLEADERS_SOURCE_URL") {
            self.source_url = v;
        }
        if let Some(v) = var("WORLDLEADERS_BASE_URL") {
            self.base_url = v;
        }
        if let Some(v) = var("WORLDLEADERS_ROW_SELECTOR") {
            self.row_selector = v;
        }
        if let Some(v) = var("WORLDLEADERS_MAX_RETRIES") {
            self.max_retries = v
                .parse()
                .with_context(|| format!("WORLDLEADERS_MAX_RETRIES={}", v))?;
        }
        if let Some(v) = var("WORLDLEADERS_BACKOFF_MS") {
            self.backoff_ms = v
                .parse()
                .with_context(|| format!("WORLDLEADERS_BACKOFF_MS={}", v))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.source_url()?;
        self.base_url()?;
        Ok(())
    }

    pub fn source_url(&self) -> crate::Result<Url> {
        Url::parse(&self.source_url)
            .map_err(|e| Error::Config(format!("source_url `{}`: {}", self.source_url, e)))
    }

    pub fn base_url(&self) -> crate::Result<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("base_url `{}`: {}", self.base_url, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_point_at_wikipedia() -> anyhow::Result<()> {
        let cfg = Config::default();
        cfg.validate()?;
        assert_eq!(cfg.base_url()?.as_str(), "https://en.wikipedia.org/");
        assert_eq!(cfg.row_selector, "table.wikitable tr");
        Ok(())
    }

    #[test]
    fn yaml_file_overrides_some_fields() -> anyhow::Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "source_url: https://de.wikipedia.org/wiki/Staatsoberhaupt")?;
        writeln!(tmp, "max_retries: 7")?;

        let cfg = Config::from_file(tmp.path())?;
        assert_eq!(cfg.source_url, "https://de.wikipedia.org/wiki/Staatsoberhaupt");
        assert_eq!(cfg.max_retries, 7);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        Ok(())
    }

    #[test]
    fn env_overrides_file() -> anyhow::Result<()> {
        let vars: HashMap<&str, &str> = [
            ("WORLDLEADERS_BASE_URL", "https://fr.wikipedia.org"),
            ("WORLDLEADERS_BACKOFF_MS", "50"),
            ("WORLDLEADERS_ROW_SELECTOR", "table.sortable tr"),
        ]
        .into_iter()
        .collect();

        let mut cfg = Config::default();
        cfg.apply_env(|k| vars.get(k).map(|v| v.to_string()))?;
        assert_eq!(cfg.base_url, "https://fr.wikipedia.org");
        assert_eq!(cfg.backoff_ms, 50);
        assert_eq!(cfg.row_selector, "table.sortable tr");
        assert_eq!(cfg.max_retries, DEFAULT_MAX_RETRIES);
        Ok(())
    }

    #[test]
    fn bad_numbers_and_urls_are_rejected() {
        let mut cfg = Config::default();
        assert!(cfg
            .apply_env(|k| (k == "WORLDLEADERS_MAX_RETRIES").then(|| "lots".to_string()))
            .is_err());

        let cfg = Config {
            base_url: "not a url".into(),
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
        assert!(matches!(cfg.base_url(), Err(Error::Config(_))));
    }
}
