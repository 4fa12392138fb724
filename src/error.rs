// src/error.rs

use thiserror::Error;

/// Failures surfaced by the extraction entry points.
///
/// Malformed leader segments are not errors: they come back as empty
/// strings inside the records.
#[derive(Debug, Error)]
pub enum Error {
    /// The page could not be retrieved.
    #[error("fetching {url} failed")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The designated table is missing or produced no records.
    #[error("leader table could not be parsed: {0}")]
    Parse(String),

    /// No record carries exactly this country name.
    #[error("country not found: {0}")]
    NotFound(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
