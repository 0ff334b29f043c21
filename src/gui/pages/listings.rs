// src/gui/pages/listings.rs
use eframe::egui;

use super::Page;
use crate::gui::app::App;
use crate::gui::components::data_table;

pub struct ListingsPage;
pub static PAGE: ListingsPage = ListingsPage;

impl Page for ListingsPage {
    fn title(&self) -> &'static str { "Listings" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.label(format!("Displaying {} job listings", app.row_ix.len()));
        ui.add_space(4.0);
        data_table::draw(ui, app);
    }
}
