// src/scrape/crawl.rs
use super::fetch::{fetch_page, FetchOutcome};
use super::snapshot::Snapshots;
use super::Cursor;
use crate::browser::Session;
use crate::config::options::CrawlOptions;
use crate::error::ScrapeError;
use crate::file::RecordSink;
use crate::progress::{NullProgress, Progress};
use crate::record::Listing;
use crate::specs::Site;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Records collected this run (bounded by the global cap).
    pub collected: usize,
    /// Records that reached the sink.
    pub saved: usize,
    pub pages_ok: usize,
    pub pages_blocked: usize,
    pub pages_empty: usize,
    pub pages_failed: usize,
    pub cards_skipped: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PageStatus {
    Ok,
    Blocked,
    Empty,
    Failed,
}

/// Walk role × location × page for `site`, flushing to `sink` after each location.
///
/// Per-card and per-page failures are logged and skipped. A failed flush keeps
/// the batch for the next one; only a failed final flush is an error.
pub fn crawl(
    session: &mut dyn Session,
    site: &dyn Site,
    opts: &CrawlOptions,
    sink: &mut dyn RecordSink,
    progress: Option<&mut dyn Progress>,
) -> Result<CrawlSummary, ScrapeError> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let snaps = if opts.policy.snapshots {
        Snapshots::new(&opts.snapshot_dir)
    } else {
        Snapshots::disabled()
    };
    if let Some(dir) = snaps.dir() {
        logd!("Snapshots: {}", dir.display());
    }

    let cap = opts.max_records;
    let mut buffer: Vec<Listing> = Vec::new();
    let mut sum = CrawlSummary::default();

    progress.begin(opts.roles.len() * opts.locations.len());

    'roles: for role in &opts.roles {
        logf!("Starting scraping for role: {role}");
        for location in &opts.locations {
            if sum.collected >= cap {
                logf!("Reached global job limit of {cap}");
                progress.log(&format!("Reached global job limit of {cap}"));
                break 'roles;
            }
            logf!("Scraping {role} in {location}");

            for page in 1..=opts.max_pages {
                if sum.collected >= cap {
                    break;
                }
                let cursor = Cursor::new(role, location, page);
                let before = sum.collected;
                let status = crawl_page(session, site, opts, &cursor, &snaps, &mut buffer, &mut sum);

                match status {
                    PageStatus::Ok => sum.pages_ok += 1,
                    PageStatus::Blocked => sum.pages_blocked += 1,
                    PageStatus::Empty => sum.pages_empty += 1,
                    PageStatus::Failed => sum.pages_failed += 1,
                }
                progress.page_done(role, location, page, sum.collected - before);

                if status == PageStatus::Empty && site.stop_on_empty_page() {
                    logf!("No more results for {role} in {location} after page {page}");
                    break;
                }
            }

            flush(&mut buffer, sink, &mut sum, progress);
        }
    }

    // Batches kept back by a failed flush get one last chance.
    if !buffer.is_empty() {
        match sink.persist(&buffer) {
            Ok(n) => {
                sum.saved += n;
                progress.flushed(n);
            }
            Err(e) => {
                loge!("{} jobs could not be saved: {e}", buffer.len());
                progress.finish();
                return Err(ScrapeError::Store(e));
            }
        }
    }
    progress.finish();

    logf!(
        "Crawl finished: {} collected, {} saved, pages ok/blocked/empty/failed = {}/{}/{}/{}",
        sum.collected, sum.saved, sum.pages_ok, sum.pages_blocked, sum.pages_empty, sum.pages_failed
    );
    Ok(sum)
}

/// Try each URL variant until one yields cards. Extracted listings go to `buffer`.
fn crawl_page(
    session: &mut dyn Session,
    site: &dyn Site,
    opts: &CrawlOptions,
    cursor: &Cursor,
    snaps: &Snapshots,
    buffer: &mut Vec<Listing>,
    sum: &mut CrawlSummary,
) -> PageStatus {
    let mut status = PageStatus::Failed;

    for (ix, url) in site.page_urls(&cursor.role, &cursor.location, cursor.page).iter().enumerate() {
        if ix > 0 {
            logf!("Trying fallback URL {} for {}", ix + 1, cursor);
        }
        let report = fetch_page(session, site, url, cursor, &opts.policy, snaps);
        match report.outcome {
            FetchOutcome::Success(cards) => {
                for card in &cards {
                    if sum.collected >= opts.max_records {
                        logf!("Reached global job limit of {}", opts.max_records);
                        break;
                    }
                    match site.extract_card(card, &cursor.role, &cursor.location) {
                        Ok(listing) => {
                            logd!("Scraped job: {} at {}", listing.title, listing.company);
                            buffer.push(listing);
                            sum.collected += 1;
                        }
                        Err(e) => {
                            logw!("Error parsing job card on {}: {e}", cursor);
                            sum.cards_skipped += 1;
                        }
                    }
                }
                return PageStatus::Ok;
            }
            FetchOutcome::Blocked => status = PageStatus::Blocked,
            FetchOutcome::Empty => status = PageStatus::Empty,
            FetchOutcome::Failed(_) => status = PageStatus::Failed,
        }
    }
    status
}

fn flush(buffer: &mut Vec<Listing>, sink: &mut dyn RecordSink, sum: &mut CrawlSummary, progress: &mut dyn Progress) {
    if buffer.is_empty() {
        return;
    }
    match sink.persist(buffer) {
        Ok(n) => {
            sum.saved += n;
            buffer.clear();
            progress.flushed(n);
        }
        Err(e) => loge!("Error saving {} jobs, keeping them for the next flush: {e}", buffer.len()),
    }
}
