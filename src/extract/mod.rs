// src/extract/mod.rs

pub mod cell;
pub mod leader;
pub mod rows;
pub mod segment;

pub use cell::split_leader_cell;
pub use leader::{dedup_title, parse_leader_segment, split_title_person};
pub use rows::{build_roster, classify, merge_row, RawRow, RosterBuilder, RowKind};
pub use segment::{extract_anchor_link, extract_named_link};

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::roster::{CountryRecord, Roster};

static TH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th").expect("Invalid CSS selector for th"));
static TD_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("Invalid CSS selector for td"));

/// Pull the rows of the leader table out of a full page.
///
/// Fails with [`Error::Parse`] when nothing matches `row_selector`, which
/// means the page layout changed rather than the world running out of leaders.
#[instrument(level = "debug", skip(html), fields(html_len = html.len()))]
pub fn read_rows(html: &str, row_selector: &str) -> Result<Vec<RawRow>> {
    let sel = Selector::parse(row_selector)
        .map_err(|e| Error::Config(format!("bad row selector `{}`: {:?}", row_selector, e)))?;
    let doc = Html::parse_document(html);

    let rows: Vec<RawRow> = doc
        .select(&sel)
        .map(|tr| {
            RawRow::new(
                tr.select(&TH_SELECTOR).map(|th| th.inner_html()).collect(),
                tr.select(&TD_SELECTOR).map(|td| td.inner_html()).collect(),
            )
        })
        .collect();

    if rows.is_empty() {
        warn!(selector = row_selector, "no table rows found");
        return Err(Error::Parse(format!("no rows match `{}`", row_selector)));
    }
    debug!(rows = rows.len(), "read table rows");
    Ok(rows)
}

/// Every country in the page's leader table, in table order.
#[instrument(level = "info", skip(html, config), fields(html_len = html.len()))]
pub fn extract_all(html: &str, config: &Config) -> Result<Roster> {
    let base = config.base_url()?;
    let rows = read_rows(html, &config.row_selector)?;
    let roster = build_roster(&rows, &base);

    if roster.is_empty() {
        return Err(Error::Parse(format!(
            "{} rows matched but none named a country",
            rows.len()
        )));
    }
    for rec in roster.incomplete() {
        warn!(
            country = %rec.country,
            state = rec.heads_of_state.len(),
            government = rec.heads_of_government.len(),
            "record is missing leaders"
        );
    }
    info!(countries = roster.len(), "extracted roster");
    Ok(roster)
}

/// The record for exactly `country`, or [`Error::NotFound`].
pub fn extract_one(html: &str, config: &Config, country: &str) -> Result<CountryRecord> {
    extract_all(html, config)?.take(country)
}
