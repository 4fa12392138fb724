// src/fetch/mod.rs

pub mod source;

pub use source::{HttpSource, PageSource, StaticSource};

use reqwest::Client;
use tracing::instrument;

use crate::config::Config;
use crate::error::Result;
use crate::extract;
use crate::roster::{CountryRecord, Roster};

/// The two entry points, wired to a page source.
///
/// Every call fetches and parses afresh; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Leaders<S> {
    source: S,
    config: Config,
}

impl Leaders<HttpSource> {
    /// Fetch over HTTP from `config.source_url`.
    pub fn from_config(client: Client, config: Config) -> Result<Self> {
        let source = HttpSource::new(client, &config)?;
        Ok(Self { source, config })
    }
}

impl<S: PageSource> Leaders<S> {
    pub fn new(source: S, config: Config) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Every country in the table.
    #[instrument(level = "info", skip(self))]
    pub async fn all(&self) -> Result<Roster> {
        let html = self.source.fetch_page().await?;
        extract::extract_all(&html, &self.config)
    }

    /// The record for exactly `country`.
    #[instrument(level = "info", skip(self))]
    pub async fn country(&self, country: &str) -> Result<CountryRecord> {
        self.all().await?.take(country)
    }
}
