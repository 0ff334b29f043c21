// src/bin/naukri.rs
use std::path::Path;

use careervue::config::{consts::LOG_FILE, options::LaunchConfig};
use careervue::progress::ConsoleProgress;
use careervue::specs::Naukri;
use careervue::{log, runner};
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init(Path::new(LOG_FILE))?;

    let mut progress = ConsoleProgress::default();
    let run = runner::run_site(&Naukri, &LaunchConfig::default(), Some(&mut progress))?;

    println!("Scraped {} {} jobs (total saved to {}).", run.crawl.saved, run.source, run.output.display());
    Ok(())
}
