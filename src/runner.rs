// src/runner.rs
//! One scrape run per site: start the browser, crawl, release the browser.

use std::path::PathBuf;

use crate::browser::{ChromeSession, Session};
use crate::config::options::{CrawlOptions, LaunchConfig};
use crate::error::ScrapeError;
use crate::file::Persister;
use crate::progress::Progress;
use crate::record::Source;
use crate::scrape::{crawl, CrawlSummary};
use crate::specs::Site;

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub site: &'static str,
    pub source: Source,
    pub output: PathBuf,
    pub crawl: CrawlSummary,
}

/// Crawl `site` with its own defaults in a fresh Chrome session.
/// A browser that will not start is the only fatal case.
pub fn run_site(
    site: &dyn Site,
    launch: &LaunchConfig,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    let opts = site.crawl_options();
    let mut session = ChromeSession::launch(launch).inspect_err(|e| loge!("Failed to initialize browser: {e}"))?;
    let summary = run_with(&mut session, site, &opts, progress);
    drop(session);
    summary
}

/// Crawl with an already-open session into `opts.output`.
pub fn run_with(
    session: &mut dyn Session,
    site: &dyn Site,
    opts: &CrawlOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    logf!(
        "{} ({}): {} roles x {} locations, up to {} pages each, cap {} -> {}",
        site.name(),
        site.source(),
        opts.roles.len(),
        opts.locations.len(),
        opts.max_pages,
        opts.max_records,
        opts.output.display()
    );
    let mut sink = Persister::new(&opts.output, opts.format);
    let crawl = crawl(session, site, opts, &mut sink, progress)?;
    Ok(RunSummary { site: site.name(), source: site.source(), output: opts.output.clone(), crawl })
}
