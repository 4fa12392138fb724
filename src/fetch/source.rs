// src/fetch/source.rs

use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, instrument, warn};
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

/// Anything that can hand over the full markup of the leader page.
pub trait PageSource {
    fn fetch_page(&self) -> impl Future<Output = Result<String>> + Send;
}

/// Fetches the page over HTTP, retrying with exponential backoff.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: Url,
    max_retries: u32,
    backoff_ms: u64,
}

impl HttpSource {
    pub fn new(client: Client, config: &Config) -> Result<Self> {
        Ok(Self {
            client,
            url: config.source_url()?,
            max_retries: config.max_retries,
            backoff_ms: config.backoff_ms,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

async fn get_text_core(client: &Client, url: &Url) -> Result<String> {
    debug!("Fetching text from {}", url);
    let fetch_err = |source| Error::Fetch {
        url: url.to_string(),
        source,
    };
    client
        .get(url.clone())
        .send()
        .await
        .map_err(fetch_err)?
        .error_for_status()
        .map_err(fetch_err)?
        .text()
        .await
        .map_err(fetch_err)
}

impl PageSource for HttpSource {
    #[instrument(level = "info", skip(self), fields(url = %self.url))]
    async fn fetch_page(&self) -> Result<String> {
        let mut attempts = 0;
        loop {
            match get_text_core(&self.client, &self.url).await {
                Ok(t) => return Ok(t),
                Err(e) if attempts < self.max_retries => {
                    attempts += 1;
                    let backoff = self.backoff_ms * 2u64.pow(attempts - 1);
                    warn!(url = %self.url, attempt = attempts, delay_ms = backoff, error = %e, "Retrying");
                    sleep(Duration::from_millis(backoff)).await;
                }
                Err(e) => {
                    error!(url = %self.url, error = %e, "Exhausted retries");
                    return Err(e);
                }
            }
        }
    }
}

/// Page markup already in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    html: String,
}

impl StaticSource {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

impl PageSource for StaticSource {
    async fn fetch_page(&self) -> Result<String> {
        Ok(self.html.clone())
    }
}
