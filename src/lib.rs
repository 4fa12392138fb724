// src/lib.rs

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod roster;

pub use config::Config;
pub use error::{Error, Result};
pub use fetch::{HttpSource, Leaders, PageSource, StaticSource};
pub use roster::{CountryRecord, LeaderEntry, NamedLink, Roster};
