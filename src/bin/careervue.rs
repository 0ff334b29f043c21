// src/bin/careervue.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use careervue::config::consts::LOG_FILE;
use careervue::{gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    if let Err(e) = log::init(Path::new(LOG_FILE)) {
        eprintln!("Logging disabled: {e}");
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("CareerVue: Job Market Insights")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
