// src/extract/rows.rs

use tracing::{debug, trace, warn};
use url::Url;

use super::cell::split_leader_cell;
use super::leader::parse_leader_segment;
use super::segment::extract_anchor_link;
use crate::roster::{CountryRecord, LeaderEntry, NamedLink, Roster};

/// One `<tr>` of the leader table, before interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// Inner markup of each `<th>`.
    pub headers: Vec<String>,
    /// Inner markup of each `<td>`.
    pub cells: Vec<String>,
}

impl RawRow {
    pub fn new(headers: Vec<String>, cells: Vec<String>) -> Self {
        Self { headers, cells }
    }

    /// Country name and link from the header cells' hyperlinks.
    pub fn country(&self, base: &Url) -> NamedLink {
        self.headers
            .first()
            .map(|th| extract_anchor_link(th, base))
            .unwrap_or_default()
    }
}

/// What a row means for the roster under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Several header cells: a disputed entry, left out entirely.
    Disputed,
    /// Starts a record for this country.
    NewCountry(NamedLink),
    /// No country name: more leaders for the previous country.
    Continuation,
}

pub fn classify(row: &RawRow, base: &Url) -> RowKind {
    if row.headers.len() > 1 {
        return RowKind::Disputed;
    }
    let country = row.country(base);
    if country.name.is_empty() {
        RowKind::Continuation
    } else {
        RowKind::NewCountry(country)
    }
}

/// Every person listed in one cell, in cell order.
pub fn parse_leader_cell(cell: &str, base: &Url) -> Vec<LeaderEntry> {
    split_leader_cell(cell)
        .into_iter()
        .map(|segment| parse_leader_segment(segment, base))
        .collect()
}

/// Heads of state and heads of government listed in a row.
///
/// With a single leader cell the same people hold both offices.
pub fn row_leaders(row: &RawRow, base: &Url) -> (Vec<LeaderEntry>, Vec<LeaderEntry>) {
    match row.cells.as_slice() {
        [] => (Vec::new(), Vec::new()),
        [both] => {
            let leaders = parse_leader_cell(both, base);
            (leaders.clone(), leaders)
        }
        [state, government, ..] => (
            parse_leader_cell(state, base),
            parse_leader_cell(government, base),
        ),
    }
}

/// Fold one non-disputed row's leaders into `record`.
pub fn merge_row(mut record: CountryRecord, row: &RawRow, base: &Url) -> CountryRecord {
    let (state, government) = row_leaders(row, base);
    trace!(
        country = %record.country,
        state = state.len(),
        government = government.len(),
        "merging row"
    );
    record.append(state, government);
    record
}

/// Walks the rows in order, keeping the most recent country open so that
/// continuation rows can add to it.
pub struct RosterBuilder<'a> {
    base: &'a Url,
    roster: Roster,
    open: Option<CountryRecord>,
    skipped: usize,
}

impl<'a> RosterBuilder<'a> {
    pub fn new(base: &'a Url) -> Self {
        Self {
            base,
            roster: Roster::new(),
            open: None,
            skipped: 0,
        }
    }

    pub fn push_row(&mut self, row: &RawRow) {
        let record = match classify(row, self.base) {
            RowKind::Disputed => {
                debug!(headers = row.headers.len(), "skipping disputed row");
                self.skipped += 1;
                return;
            }
            RowKind::NewCountry(country) => {
                if let Some(done) = self.open.take() {
                    self.roster.insert(done);
                }
                CountryRecord::new(country.name, country.link)
            }
            RowKind::Continuation => match self.open.take() {
                Some(open) => open,
                None => {
                    warn!("continuation row before any country; dropping it");
                    self.skipped += 1;
                    return;
                }
            },
        };
        self.open = Some(merge_row(record, row, self.base));
    }

    /// Rows dropped so far as disputed or orphaned.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn finish(mut self) -> Roster {
        if let Some(done) = self.open.take() {
            self.roster.insert(done);
        }
        self.roster
    }
}

/// Normalize a whole row sequence into a roster.
pub fn build_roster<'r, I>(rows: I, base: &Url) -> Roster
where
    I: IntoIterator<Item = &'r RawRow>,
{
    let mut builder = RosterBuilder::new(base);
    for row in rows {
        builder.push_row(row);
    }
    let skipped = builder.skipped();
    let roster = builder.finish();
    debug!(countries = roster.len(), skipped, "rows normalized");
    roster
}
