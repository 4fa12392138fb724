// src/roster/mod.rs

pub mod types;

pub use types::{CountryRecord, LeaderEntry, NamedLink};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::error::{Error, Result};

/// Country name → record, iterated in the order countries were first seen.
///
/// Serializes as a plain JSON array of records.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CountryRecord>", into = "Vec<CountryRecord>")]
pub struct Roster {
    records: Vec<CountryRecord>,
    index: HashMap<String, usize>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished record. A name that is already present is merged into
    /// the existing record so keys stay unique and keep their first position.
    pub fn insert(&mut self, record: CountryRecord) {
        match self.index.get(&record.country) {
            Some(&i) => {
                warn!(country = %record.country, "country listed twice; merging rows");
                let existing = &mut self.records[i];
                if existing.wiki.is_empty() {
                    existing.wiki = record.wiki;
                }
                existing.append(record.heads_of_state, record.heads_of_government);
            }
            None => {
                self.index.insert(record.country.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Exact, case-sensitive lookup by country name.
    pub fn lookup(&self, country: &str) -> Result<&CountryRecord> {
        self.index
            .get(country)
            .map(|&i| &self.records[i])
            .ok_or_else(|| Error::NotFound(country.to_string()))
    }

    pub fn all(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records missing a leader in either role.
    pub fn incomplete(&self) -> Vec<&CountryRecord> {
        self.records.iter().filter(|r| !r.is_complete()).collect()
    }

    pub fn into_records(self) -> Vec<CountryRecord> {
        self.records
    }

    /// Take ownership of one record, dropping the rest.
    pub fn take(mut self, country: &str) -> Result<CountryRecord> {
        match self.index.remove(country) {
            Some(i) => Ok(self.records.swap_remove(i)),
            None => Err(Error::NotFound(country.to_string())),
        }
    }
}

impl From<Vec<CountryRecord>> for Roster {
    fn from(records: Vec<CountryRecord>) -> Self {
        let mut roster = Roster::new();
        for rec in records {
            roster.insert(rec);
        }
        roster
    }
}

impl From<Roster> for Vec<CountryRecord> {
    fn from(roster: Roster) -> Self {
        roster.records
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a CountryRecord;
    type IntoIter = std::slice::Iter<'a, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
