// src/scrape/mod.rs
mod crawl;
mod fetch;
mod snapshot;

use std::fmt;

pub use crawl::{crawl, CrawlSummary};
pub use fetch::{fetch_page, FetchOutcome, FetchReport};
pub use snapshot::Snapshots;

/// Position of the crawl, for logs and snapshot names. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub role: String,
    pub location: String,
    pub page: u32,
    pub attempt: u32,
}

impl Cursor {
    pub fn new(role: &str, location: &str, page: u32) -> Self {
        Self { role: s!(role), location: s!(location), page, attempt: 0 }
    }

    pub fn attempt(mut self, attempt: u32) -> Self {
        self.attempt = attempt;
        self
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {} page {}", self.role, self.location, self.page)
    }
}
