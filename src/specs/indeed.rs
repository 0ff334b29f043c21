// src/specs/indeed.rs
//! Scraping *spec* for Indeed search results.
//!
//! - Two URL variants per page, `in.indeed.com` first, then `www.indeed.com`.
//!   Query words are joined with '+'; offsets step by 10.
//! - Cards are `div.job_seen_beacon`.
//! - Blocked when the URL mentions "robot" or the markup mentions "captcha".

use std::path::PathBuf;
use std::time::Duration;

use super::{CardSelectors, Site};
use crate::config::consts::*;
use crate::config::options::{CrawlOptions, FetchPolicy, Pause, PersistFormat};
use crate::record::Source;

const SELECTORS: CardSelectors = CardSelectors {
    card: "div.job_seen_beacon",
    title: "h2.jobTitle a span",
    company: "span[data-testid='company-name']",
    location: "div[data-testid='text-location']",
    salary: "div[data-testid='attribute_snippet_testid']",
    skills: "div.jobsearch-Skills-container",
};

const HOSTS: [&str; 2] = ["in.indeed.com", "www.indeed.com"];

#[derive(Clone, Copy, Debug, Default)]
pub struct Indeed;

impl Site for Indeed {
    fn name(&self) -> &'static str { "indeed" }
    fn source(&self) -> Source { Source::Indeed }
    fn selectors(&self) -> &CardSelectors { &SELECTORS }

    fn page_urls(&self, role: &str, location: &str, page: u32) -> Vec<String> {
        let q = role.replace('-', "+");
        let l = location.replace(' ', "+");
        let start = page.saturating_sub(1) * INDEED_PAGE_SIZE;
        HOSTS
            .iter()
            .map(|host| format!("https://{host}/jobs?q={q}&l={l}&start={start}"))
            .collect()
    }

    fn is_blocked(&self, url: &str, html: &str) -> bool {
        url.contains("robot") || html.to_lowercase().contains("captcha")
    }

    fn fetch_policy(&self) -> FetchPolicy {
        FetchPolicy {
            settle: Pause::ms(INDEED_SETTLE_MS),
            scroll_passes: 3,
            wait_timeout: Duration::from_secs(INDEED_WAIT_SECS),
            ..FetchPolicy::default()
        }
    }

    fn crawl_options(&self) -> CrawlOptions {
        CrawlOptions {
            locations: INDEED_LOCATIONS.iter().map(|l| s!(*l)).collect(),
            max_pages: INDEED_MAX_PAGES,
            output: PathBuf::from(INDEED_OUT),
            format: PersistFormat::Lines,
            policy: self.fetch_policy(),
            ..CrawlOptions::default()
        }
    }
}
