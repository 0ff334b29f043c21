// src/config/consts.rs

// Search space
pub const ROLES: &[&str] = &[
    "data-analyst", "data-scientist", "machine-learning-engineer",
    "web-developer", "mobile-app-developer",
    "software-engineer", "devops-engineer",
    "full-stack-developer", "cloud-engineer",
];

pub const NAUKRI_LOCATIONS: &[&str] = &[
    "delhi", "bangalore", "mumbai",
    "hyderabad", "pune", "chennai",
    "kolkata", "gurgaon", "noida",
    "ahmedabad",
];

pub const INDEED_LOCATIONS: &[&str] = &[
    "Gurgaon", "Bangalore", "Mumbai",
    "Hyderabad", "Pune", "Chennai",
    "Kolkata", "Noida", "Ahmedabad",
];

// Caps
pub const MAX_RECORDS: usize = 30_000;
pub const NAUKRI_MAX_PAGES: u32 = 10;
pub const INDEED_MAX_PAGES: u32 = 7;
pub const NAUKRI_PAGE_SIZE: u32 = 20;
pub const INDEED_PAGE_SIZE: u32 = 10;

// Fetch-retry
pub const RETRIES: u32 = 3;
pub const BACKOFF_MS: (u64, u64) = (5_000, 10_000);
pub const SCROLL_PAUSE_MS: (u64, u64) = (1_000, 3_000);
pub const NAUKRI_SETTLE_MS: (u64, u64) = (3_000, 7_000);
pub const INDEED_SETTLE_MS: (u64, u64) = (5_000, 8_000);
pub const NAUKRI_WAIT_SECS: u64 = 22;
pub const INDEED_WAIT_SECS: u64 = 30;

// Browser
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";
pub const WINDOW_SIZE: (u32, u32) = (1366, 900);
pub const HEADLESS: bool = true;

// Paths
pub const SNAPSHOT_DIR: &str = "Data/screenshots";
pub const NAUKRI_OUT: &str = "Data/clean/naukri_selenium_fixed.csv";
pub const INDEED_OUT: &str = "Data/clean/indeed_selenium_fixed.json";
pub const MERGED_OUT: &str = "cleaned_job_data.csv";
pub const DUPLICATES_OUT: &str = "duplicates.csv";
pub const LOG_FILE: &str = "scraper.log";

// Dashboard exports
pub const FILTERED_EXPORT: &str = "filtered_job_data.csv";
