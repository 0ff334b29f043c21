// src/gui/pages/mod.rs
use eframe::egui;

use super::app::App;

pub mod insights;
pub mod listings;
pub mod roadmap;

/// One tab of the dashboard. Pages read the filtered view from `App`
/// and draw it; they never change the data.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;

    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
