// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod record;
pub mod specs;

pub mod browser;
pub mod file;
pub mod progress;
pub mod scrape;
pub mod store;

pub mod clean;
pub mod insights;
pub mod runner;

pub mod gui;
