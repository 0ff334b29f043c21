// src/bin/indeed.rs
use std::path::Path;

use careervue::config::{consts::LOG_FILE, options::LaunchConfig};
use careervue::progress::ConsoleProgress;
use careervue::specs::Indeed;
use careervue::{log, runner};
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init(Path::new(LOG_FILE))?;

    let mut progress = ConsoleProgress::default();
    let run = runner::run_site(&Indeed, &LaunchConfig::default(), Some(&mut progress))?;

    if run.crawl.saved > 0 {
        println!("Done. Scraped and saved {} {} jobs to {}.", run.crawl.saved, run.source, run.output.display());
    } else {
        println!("No jobs scraped. Check {LOG_FILE} and the screenshots for details.");
    }
    Ok(())
}
