// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! This module hosts the **site-specific scraping specs**. Each spec
//! encodes *where the listing data lives in a results page* and *how to read it
//! tolerantly*.
//!
//! ## What lives here
//! - **URL construction** per results page, including ordered fallback hosts.
//! - **Block detection** (CAPTCHA / robot-check markers).
//! - **Card listing and field extraction** over rendered markup, using
//!   `core::html` helpers on top of `scraper`.
//! - **Pacing defaults** per site (`FetchPolicy`) and crawl defaults (`CrawlOptions`).
//!
//! ## What does **not** live here
//! - **Driving the browser** – `scrape::fetch` owns navigation, waits and retries.
//! - **Persistence** – `file::Persister` appends batches; specs only extract.
//! - **Cleaning** – raw text is kept as shown; `clean` normalizes later.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::crawl → scrape::fetch_page → Site::list_cards
//!                        ↘ Site::extract_card → Listing → RecordSink
//! ```
//!
//! ## Conventions & invariants
//! - Every field read is total. An absent element yields a sentinel:
//!   "N/A" for text, "Not Disclosed" for salary, empty list for skills.
//! - Extraction runs on a card's outer HTML, so it can be tested offline
//!   against captured fragments.
//! - A card with no text at all is an `ExtractError::EmptyCard`.
//!
//! In short: **`specs` knows how to read the pages.** Other layers decide when to
//! fetch, how often to retry, and where records go.
pub mod naukri;
pub mod indeed;

pub use indeed::Indeed;
pub use naukri::Naukri;

use scraper::Html;

use crate::config::options::{CrawlOptions, FetchPolicy};
use crate::core::html::{all_text, first_text, outer_blocks, selector, text_of};
use crate::error::ExtractError;
use crate::record::{Listing, Source, NA, NOT_DISCLOSED};

/// CSS selectors for one site's listing card.
#[derive(Clone, Copy, Debug)]
pub struct CardSelectors {
    pub card: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub salary: &'static str,
    pub skills: &'static str,
}

/// Capabilities the crawl needs from a results site.
pub trait Site {
    fn name(&self) -> &'static str;
    fn source(&self) -> Source;
    fn selectors(&self) -> &CardSelectors;

    /// Ordered URL variants for one results page (1-based).
    fn page_urls(&self, role: &str, location: &str, page: u32) -> Vec<String>;

    /// Check the rendered page for a bot-verification challenge.
    fn is_blocked(&self, url: &str, html: &str) -> bool;

    fn fetch_policy(&self) -> FetchPolicy;
    fn crawl_options(&self) -> CrawlOptions;

    /// Stop paging a role/location at the first page with no cards.
    fn stop_on_empty_page(&self) -> bool {
        false
    }

    fn card_selector(&self) -> &'static str {
        self.selectors().card
    }

    /// Outer HTML of each listing card on the page.
    fn list_cards(&self, html: &str) -> Result<Vec<String>, ExtractError> {
        let sel = selector(self.card_selector())?;
        Ok(outer_blocks(html, &sel))
    }

    fn extract_card(&self, fragment: &str, role: &str, location: &str) -> Result<Listing, ExtractError> {
        extract_with(self.selectors(), fragment, role, location)
    }
}

/// Read one card with `sel`. Absent fields become sentinels.
pub fn extract_with(
    sel: &CardSelectors,
    fragment: &str,
    role: &str,
    location: &str,
) -> Result<Listing, ExtractError> {
    let doc = Html::parse_fragment(fragment);
    let root = doc.root_element();
    if text_of(root).is_empty() {
        return Err(ExtractError::EmptyCard);
    }

    let title = selector(sel.title)?;
    let company = selector(sel.company)?;
    let loc = selector(sel.location)?;
    let salary = selector(sel.salary)?;
    let skills = selector(sel.skills)?;

    Ok(Listing {
        role: s!(role),
        location_query: s!(location),
        title: first_text(root, &title).unwrap_or_else(|| s!(NA)),
        company: first_text(root, &company).unwrap_or_else(|| s!(NA)),
        location_detail: first_text(root, &loc).unwrap_or_else(|| s!(NA)),
        salary_text: first_text(root, &salary).unwrap_or_else(|| s!(NOT_DISCLOSED)),
        skills: all_text(root, &skills),
    })
}
