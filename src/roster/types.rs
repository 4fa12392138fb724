// src/roster/types.rs

use serde::{Deserialize, Serialize};

/// A display name plus the hyperlink it pointed at (empty when there was none).
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Hash, Default)]
pub struct NamedLink {
    pub name: String,
    #[serde(rename = "wiki")]
    pub link: String,
}

impl NamedLink {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}

/// One person holding one title.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Hash)]
pub struct LeaderEntry {
    pub title: NamedLink,
    pub person: NamedLink,
}

/// Everything the table says about a single country.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct CountryRecord {
    pub country: String,
    pub wiki: String,
    pub heads_of_state: Vec<LeaderEntry>,
    pub heads_of_government: Vec<LeaderEntry>,
}

impl CountryRecord {
    /// A fresh record with no leaders yet.
    pub fn new(country: impl Into<String>, wiki: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            wiki: wiki.into(),
            heads_of_state: Vec::new(),
            heads_of_government: Vec::new(),
        }
    }

    /// Append leaders from another row. Existing entries are kept.
    pub fn append(&mut self, state: Vec<LeaderEntry>, government: Vec<LeaderEntry>) {
        self.heads_of_state.extend(state);
        self.heads_of_government.extend(government);
    }

    /// A finished record should name a country and list at least one leader
    /// in each role; anything else means a row was misread.
    pub fn is_complete(&self) -> bool {
        !self.country.is_empty()
            && !self.heads_of_state.is_empty()
            && !self.heads_of_government.is_empty()
    }
}
