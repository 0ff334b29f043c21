// src/bin/clean.rs
use std::path::Path;

use careervue::config::{consts::LOG_FILE, options::PipelinePaths};
use careervue::{clean, log};
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init(Path::new(LOG_FILE))?;

    let paths = PipelinePaths::default();
    let report = clean::run(&paths)?;

    careervue::logf!("Cleaning finished: {report}");
    println!(
        "Cleaned data saved to '{}' with {} records.",
        paths.merged.display(),
        report.output_rows
    );
    Ok(())
}
