// tests/scrape_flow.rs
//
// Fetch retry and crawl loop against a scripted browser session. No network.
//
use std::io;
use std::time::Duration;

use careervue::browser::Session;
use careervue::config::options::{CrawlOptions, FetchPolicy, PersistFormat};
use careervue::error::{ScrapeError, SessionError, StoreError};
use careervue::file::RecordSink;
use careervue::record::{Listing, Source};
use careervue::runner;
use careervue::scrape::{crawl, fetch_page, Cursor, FetchOutcome, Snapshots};
use careervue::specs::{Indeed, Naukri, Site};

#[derive(Clone, Debug)]
enum Step {
    /// Page renders with this many Naukri cards.
    Cards(usize),
    /// Page renders, wait succeeds, no cards.
    NoCards,
    /// Cards never appear.
    Timeout,
    /// CAPTCHA page.
    Blocked,
    /// Navigation itself fails.
    Driver,
    /// Raw HTML served as is.
    Html(&'static str),
}

/// Plays `steps` in order, one per navigation; the last one repeats.
struct FakeSession {
    steps: Vec<Step>,
    navigations: usize,
    current: Option<Step>,
}

impl FakeSession {
    fn new(steps: Vec<Step>) -> Self {
        Self { steps, navigations: 0, current: None }
    }
}

fn naukri_page(cards: usize) -> String {
    let mut html = String::from("<html><body><div class=\"list\">");
    for i in 0..cards {
        html.push_str(&format!(
            "<div class=\"srp-jobtuple-wrapper\"><a class=\"title\">Analyst {i}</a>\
             <a class=\"comp-name\">Acme</a><span class=\"sal\">5-8 Lacs PA</span>\
             <ul><li class=\"skill\">SQL</li></ul></div>"
        ));
    }
    html.push_str("</div></body></html>");
    html
}

impl Session for FakeSession {
    fn navigate(&mut self, _url: &str) -> Result<(), SessionError> {
        let ix = self.navigations.min(self.steps.len() - 1);
        self.navigations += 1;
        let step = self.steps[ix].clone();
        self.current = Some(step.clone());
        match step {
            Step::Driver => Err(SessionError::Driver("connection reset".into())),
            _ => Ok(()),
        }
    }

    fn current_url(&mut self) -> String {
        "https://example.test/results".into()
    }

    fn page_source(&mut self) -> Result<String, SessionError> {
        Ok(match &self.current {
            Some(Step::Cards(n)) => naukri_page(*n),
            Some(Step::Blocked) => "<html><body><div class=\"g-recaptcha\">captcha</div></body></html>".into(),
            Some(Step::Html(h)) => (*h).into(),
            _ => "<html><body><p>Loading</p></body></html>".into(),
        })
    }

    fn scroll_to_bottom(&mut self) -> Result<(), SessionError> {
        Ok(())
    }

    fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<(), SessionError> {
        match &self.current {
            Some(Step::Timeout) => Err(SessionError::Timeout { selector: selector.into(), waited: timeout }),
            _ => Ok(()),
        }
    }

    fn screenshot(&mut self) -> Result<Vec<u8>, SessionError> {
        Ok(Vec::new())
    }
}

/// Keeps every batch; fails the first `fail_first` calls (or all of them).
#[derive(Default)]
struct VecSink {
    batches: Vec<Vec<Listing>>,
    fail_first: usize,
    always_fail: bool,
    calls: usize,
}

impl RecordSink for VecSink {
    fn persist(&mut self, records: &[Listing]) -> Result<usize, StoreError> {
        self.calls += 1;
        if self.always_fail || self.calls <= self.fail_first {
            return Err(StoreError::io("memory", io::Error::other("disk full")));
        }
        self.batches.push(records.to_vec());
        Ok(records.len())
    }
}

impl VecSink {
    fn total(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }
}

fn fetch(session: &mut FakeSession, site: &dyn Site) -> (FetchOutcome, u32) {
    let cursor = Cursor::new("data-analyst", "pune", 1);
    let r = fetch_page(session, site, "https://example.test", &cursor, &FetchPolicy::instant(), &Snapshots::disabled());
    (r.outcome, r.attempts)
}

fn opts(locations: &[&str], max_pages: u32, max_records: usize) -> CrawlOptions {
    CrawlOptions {
        roles: vec!["data-analyst".into()],
        locations: locations.iter().map(|l| l.to_string()).collect(),
        max_pages,
        max_records,
        format: PersistFormat::Table,
        policy: FetchPolicy::instant(),
        ..CrawlOptions::default()
    }
}

#[test]
fn timeouts_are_retried_until_cards_appear() {
    let mut s = FakeSession::new(vec![Step::Timeout, Step::Timeout, Step::Cards(2)]);
    let (outcome, attempts) = fetch(&mut s, &Naukri);
    assert_eq!(attempts, 3);
    match outcome {
        FetchOutcome::Success(cards) => assert_eq!(cards.len(), 2),
        other => panic!("expected cards, got {other:?}"),
    }
}

#[test]
fn block_page_is_never_retried() {
    let mut s = FakeSession::new(vec![Step::Blocked]);
    let (outcome, attempts) = fetch(&mut s, &Naukri);
    assert_eq!(outcome, FetchOutcome::Blocked);
    assert_eq!(attempts, 1);
    assert_eq!(s.navigations, 1);
}

#[test]
fn retry_budget_is_bounded() {
    let mut s = FakeSession::new(vec![Step::Timeout]);
    let (outcome, attempts) = fetch(&mut s, &Naukri);
    assert_eq!(attempts, 3);
    assert_eq!(s.navigations, 3);
    assert!(matches!(outcome, FetchOutcome::Failed(SessionError::Timeout { .. })));

    let mut s = FakeSession::new(vec![Step::Driver, Step::Cards(1)]);
    let (outcome, attempts) = fetch(&mut s, &Naukri);
    assert_eq!(attempts, 2);
    assert!(matches!(outcome, FetchOutcome::Success(_)));
}

#[test]
fn empty_page_is_reported_once() {
    let mut s = FakeSession::new(vec![Step::NoCards]);
    let (outcome, attempts) = fetch(&mut s, &Naukri);
    assert_eq!(outcome, FetchOutcome::Empty);
    assert_eq!(attempts, 1);
}

#[test]
fn crawl_flushes_after_each_location() {
    let mut s = FakeSession::new(vec![Step::Cards(2)]);
    let mut sink = VecSink::default();
    let sum = crawl(&mut s, &Naukri, &opts(&["pune", "delhi"], 1, 100), &mut sink, None).unwrap();

    assert_eq!(sink.batches.len(), 2);
    assert_eq!(sink.batches[0].len(), 2);
    assert_eq!(sink.batches[1][0].location_query, "delhi");
    assert_eq!(sum.collected, 4);
    assert_eq!(sum.saved, 4);
    assert_eq!(sum.pages_ok, 2);
}

#[test]
fn crawl_stops_at_the_global_cap() {
    let mut s = FakeSession::new(vec![Step::Cards(4)]);
    let mut sink = VecSink::default();
    let sum = crawl(&mut s, &Naukri, &opts(&["pune", "delhi"], 3, 5), &mut sink, None).unwrap();

    assert_eq!(sum.collected, 5);
    assert_eq!(sink.total(), 5);
    assert_eq!(sink.batches.len(), 1);
    // page 1 and page 2 of the first location only
    assert_eq!(s.navigations, 2);
}

#[test]
fn empty_page_ends_paging_for_naukri() {
    let mut s = FakeSession::new(vec![Step::Cards(3), Step::NoCards]);
    let mut sink = VecSink::default();
    let sum = crawl(&mut s, &Naukri, &opts(&["pune"], 5, 100), &mut sink, None).unwrap();

    assert_eq!(sum.pages_ok, 1);
    assert_eq!(sum.pages_empty, 1);
    assert_eq!(s.navigations, 2);
    assert_eq!(sink.total(), 3);
}

#[test]
fn blocked_pages_are_skipped_not_fatal() {
    let mut s = FakeSession::new(vec![Step::Blocked, Step::Cards(1)]);
    let mut sink = VecSink::default();
    let sum = crawl(&mut s, &Naukri, &opts(&["pune"], 2, 100), &mut sink, None).unwrap();

    assert_eq!(sum.pages_blocked, 1);
    assert_eq!(sum.pages_ok, 1);
    assert_eq!(sum.saved, 1);
}

#[test]
fn failed_flush_keeps_the_batch() {
    let mut s = FakeSession::new(vec![Step::Cards(2)]);
    let mut sink = VecSink { fail_first: 1, ..VecSink::default() };
    let sum = crawl(&mut s, &Naukri, &opts(&["pune", "delhi"], 1, 100), &mut sink, None).unwrap();

    assert_eq!(sink.batches.len(), 1);
    assert_eq!(sink.batches[0].len(), 4);
    assert_eq!(sum.saved, 4);
}

#[test]
fn failed_final_flush_is_an_error() {
    let mut s = FakeSession::new(vec![Step::Cards(2)]);
    let mut sink = VecSink { always_fail: true, ..VecSink::default() };
    let err = crawl(&mut s, &Naukri, &opts(&["pune"], 1, 100), &mut sink, None).unwrap_err();
    assert!(matches!(err, ScrapeError::Store(_)));
}

const INDEED_PAGE: &str = r#"<html><body>
  <div class="job_seen_beacon">
    <h2 class="jobTitle"><a href="/rc/1"><span>Cloud Engineer</span></a></h2>
    <span data-testid="company-name">Initech</span>
  </div>
</body></html>"#;

#[test]
fn indeed_falls_back_to_the_second_host() {
    let mut s = FakeSession::new(vec![Step::Blocked, Step::Html(INDEED_PAGE)]);
    let mut sink = VecSink::default();
    let mut o = opts(&["Pune"], 1, 100);
    o.format = PersistFormat::Lines;
    let sum = crawl(&mut s, &Indeed, &o, &mut sink, None).unwrap();

    assert_eq!(s.navigations, 2);
    assert_eq!(sum.pages_ok, 1);
    assert_eq!(sink.batches[0][0].title, "Cloud Engineer");
    assert_eq!(sink.batches[0][0].company, "Initech");
}

#[test]
fn indeed_empty_host_falls_through_to_the_next() {
    let mut s = FakeSession::new(vec![Step::NoCards, Step::Html(INDEED_PAGE)]);
    let mut sink = VecSink::default();
    let sum = crawl(&mut s, &Indeed, &opts(&["Pune"], 1, 100), &mut sink, None).unwrap();

    assert_eq!(s.navigations, 2);
    assert_eq!(sum.pages_ok, 1);
    assert_eq!(sum.pages_empty, 0);
    assert_eq!(sink.total(), 1);
}

#[test]
fn indeed_keeps_paging_past_empty_pages() {
    let mut s = FakeSession::new(vec![Step::NoCards]);
    let mut sink = VecSink::default();
    let sum = crawl(&mut s, &Indeed, &opts(&["Pune"], 3, 100), &mut sink, None).unwrap();

    // Both hosts per page, every page.
    assert_eq!(s.navigations, 6);
    assert_eq!(sum.pages_empty, 3);
    assert_eq!(sum.pages_ok, 0);
    assert!(sink.batches.is_empty());
}

#[test]
fn run_summary_names_the_source() {
    let dir = tempfile::tempdir().unwrap();
    let mut o = opts(&["Pune"], 1, 100);
    o.format = PersistFormat::Lines;
    o.output = dir.path().join("indeed.json");

    let mut s = FakeSession::new(vec![Step::Html(INDEED_PAGE)]);
    let run = runner::run_with(&mut s, &Indeed, &o, None).unwrap();

    assert_eq!(run.site, "indeed");
    assert_eq!(run.source, Source::Indeed);
    assert_eq!(run.crawl.saved, 1);
    let text = std::fs::read_to_string(&o.output).unwrap();
    assert!(text.contains(r#""Title":"Cloud Engineer""#));
}
