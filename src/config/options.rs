// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use rand::Rng;

use super::consts::*;

/// Randomized pause bounds in milliseconds (inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pause {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Pause {
    pub const ZERO: Pause = Pause { min_ms: 0, max_ms: 0 };

    pub const fn ms(bounds: (u64, u64)) -> Self {
        Self { min_ms: bounds.0, max_ms: bounds.1 }
    }

    pub fn sample(&self) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rand::thread_rng().gen_range(self.min_ms..=self.max_ms))
    }

    /// Block the current thread for a sampled interval.
    pub fn sleep(&self) {
        let d = self.sample();
        if !d.is_zero() {
            std::thread::sleep(d);
        }
    }
}

/// Pacing and retry budget for one page fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchPolicy {
    pub retries: u32,
    pub settle: Pause,
    pub scroll_passes: u32,
    pub scroll_pause: Pause,
    pub wait_timeout: Duration,
    pub backoff: Pause,
    pub snapshots: bool,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            retries: RETRIES,
            settle: Pause::ms(NAUKRI_SETTLE_MS),
            scroll_passes: 1,
            scroll_pause: Pause::ms(SCROLL_PAUSE_MS),
            wait_timeout: Duration::from_secs(NAUKRI_WAIT_SECS),
            backoff: Pause::ms(BACKOFF_MS),
            snapshots: true,
        }
    }
}

impl FetchPolicy {
    /// No pauses, no snapshots. Same retry budget.
    pub fn instant() -> Self {
        Self {
            settle: Pause::ZERO,
            scroll_pause: Pause::ZERO,
            wait_timeout: Duration::ZERO,
            backoff: Pause::ZERO,
            snapshots: false,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersistFormat {
    /// CSV with a header row written on create.
    Table,
    /// One JSON object per line.
    Lines,
}

impl PersistFormat {
    pub fn ext(&self) -> &'static str {
        match self { PersistFormat::Table => "csv", PersistFormat::Lines => "json" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrawlOptions {
    pub roles: Vec<String>,
    pub locations: Vec<String>,
    pub max_records: usize,
    pub max_pages: u32,
    pub output: PathBuf,
    pub format: PersistFormat,
    pub snapshot_dir: PathBuf,
    pub policy: FetchPolicy,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            roles: ROLES.iter().map(|r| s!(*r)).collect(),
            locations: NAUKRI_LOCATIONS.iter().map(|l| s!(*l)).collect(),
            max_records: MAX_RECORDS,
            max_pages: NAUKRI_MAX_PAGES,
            output: PathBuf::from(NAUKRI_OUT),
            format: PersistFormat::Table,
            snapshot_dir: PathBuf::from(SNAPSHOT_DIR),
            policy: FetchPolicy::default(),
        }
    }
}

/// Browser launch settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchConfig {
    pub headless: bool,
    pub user_agent: String,
    pub window_size: (u32, u32),
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            headless: HEADLESS,
            user_agent: s!(USER_AGENT),
            window_size: WINDOW_SIZE,
        }
    }
}

/// Inputs and outputs of the cleaning pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelinePaths {
    pub naukri: PathBuf,
    pub indeed: PathBuf,
    pub merged: PathBuf,
    pub duplicates: PathBuf,
}

impl Default for PipelinePaths {
    fn default() -> Self {
        Self {
            naukri: PathBuf::from(NAUKRI_OUT),
            indeed: PathBuf::from(INDEED_OUT),
            merged: PathBuf::from(MERGED_OUT),
            duplicates: PathBuf::from(DUPLICATES_OUT),
        }
    }
}
