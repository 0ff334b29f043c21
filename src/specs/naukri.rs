// src/specs/naukri.rs
//! Scraping *spec* for Naukri search results.
//!
//! - One URL per page: `/{role}-jobs-in-{location}?k={role}&l={location}`, with
//!   `&start=` offsets of 20 after page 1.
//! - Cards are `.srp-jobtuple-wrapper`. A `.g-recaptcha` element means blocked.
//! - Paging stops at the first page without cards.

use std::path::PathBuf;
use std::time::Duration;

use super::{CardSelectors, Site};
use crate::config::consts::*;
use crate::config::options::{CrawlOptions, FetchPolicy, Pause, PersistFormat};
use crate::core::html::{has_match, selector};
use crate::record::Source;

const SELECTORS: CardSelectors = CardSelectors {
    card: ".srp-jobtuple-wrapper",
    title: ".title",
    company: ".comp-name",
    location: ".locWdth",
    salary: ".sal",
    skills: ".skill",
};

const CAPTCHA: &str = ".g-recaptcha";

#[derive(Clone, Copy, Debug, Default)]
pub struct Naukri;

impl Naukri {
    pub fn page_url(role: &str, location: &str, page: u32) -> String {
        let mut url = format!("https://www.naukri.com/{role}-jobs-in-{location}?k={role}&l={location}");
        if page > 1 {
            url.push_str(&format!("&start={}", (page - 1) * NAUKRI_PAGE_SIZE));
        }
        url
    }
}

impl Site for Naukri {
    fn name(&self) -> &'static str { "naukri" }
    fn source(&self) -> Source { Source::Naukri }
    fn selectors(&self) -> &CardSelectors { &SELECTORS }

    fn page_urls(&self, role: &str, location: &str, page: u32) -> Vec<String> {
        vec![Self::page_url(role, location, page)]
    }

    fn is_blocked(&self, _url: &str, html: &str) -> bool {
        selector(CAPTCHA).map(|sel| has_match(html, &sel)).unwrap_or(false)
    }

    fn stop_on_empty_page(&self) -> bool { true }

    fn fetch_policy(&self) -> FetchPolicy {
        FetchPolicy {
            settle: Pause::ms(NAUKRI_SETTLE_MS),
            scroll_passes: 1,
            wait_timeout: Duration::from_secs(NAUKRI_WAIT_SECS),
            ..FetchPolicy::default()
        }
    }

    fn crawl_options(&self) -> CrawlOptions {
        CrawlOptions {
            locations: NAUKRI_LOCATIONS.iter().map(|l| s!(*l)).collect(),
            max_pages: NAUKRI_MAX_PAGES,
            output: PathBuf::from(NAUKRI_OUT),
            format: PersistFormat::Table,
            policy: self.fetch_policy(),
            ..CrawlOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{NA, NOT_DISCLOSED};

    const PAGE: &str = r#"
        <html><body><div class="list">
          <div class="srp-jobtuple-wrapper">
            <a class="title">Senior   Data Analyst</a>
            <a class="comp-name">Acme Analytics</a>
            <span class="locWdth">Pune, Mumbai</span>
            <span class="sal">5-8 Lacs PA</span>
            <ul><li class="skill">SQL</li><li class="skill">Power BI</li></ul>
          </div>
          <div class="srp-jobtuple-wrapper">
            <a class="title">Data Analyst</a>
          </div>
        </div></body></html>"#;

    #[test]
    fn urls_page_offsets() {
        assert_eq!(
            Naukri.page_urls("data-analyst", "pune", 1),
            vec!["https://www.naukri.com/data-analyst-jobs-in-pune?k=data-analyst&l=pune"]
        );
        assert_eq!(
            Naukri.page_urls("data-analyst", "pune", 3)[0],
            "https://www.naukri.com/data-analyst-jobs-in-pune?k=data-analyst&l=pune&start=40"
        );
    }

    #[test]
    fn extracts_full_and_partial_cards() {
        let cards = Naukri.list_cards(PAGE).unwrap();
        assert_eq!(cards.len(), 2);

        let full = Naukri.extract_card(&cards[0], "data-analyst", "pune").unwrap();
        assert_eq!(full.title, "Senior Data Analyst");
        assert_eq!(full.company, "Acme Analytics");
        assert_eq!(full.location_detail, "Pune, Mumbai");
        assert_eq!(full.salary_text, "5-8 Lacs PA");
        assert_eq!(full.skills, vec!["SQL", "Power BI"]);
        assert_eq!(full.role, "data-analyst");
        assert_eq!(full.location_query, "pune");

        let partial = Naukri.extract_card(&cards[1], "data-analyst", "pune").unwrap();
        assert_eq!(partial.company, NA);
        assert_eq!(partial.location_detail, NA);
        assert_eq!(partial.salary_text, NOT_DISCLOSED);
        assert!(partial.skills.is_empty());
    }

    #[test]
    fn blank_card_is_rejected() {
        let err = Naukri.extract_card(r#"<div class="srp-jobtuple-wrapper">  </div>"#, "r", "l");
        assert!(err.is_err());
    }

    #[test]
    fn recaptcha_means_blocked() {
        assert!(Naukri.is_blocked("https://www.naukri.com/x", r#"<div class="g-recaptcha"></div>"#));
        assert!(!Naukri.is_blocked("https://www.naukri.com/x", PAGE));
    }
}
