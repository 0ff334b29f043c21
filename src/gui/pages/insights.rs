// src/gui/pages/insights.rs
use eframe::egui;

use super::Page;
use crate::gui::app::App;
use crate::gui::components::charts::bar_rows;
use crate::insights::TOP_N;

pub struct InsightsPage;
pub static PAGE: InsightsPage = InsightsPage;

impl Page for InsightsPage {
    fn title(&self) -> &'static str { "Insights" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let ins = &app.insights;
        egui::ScrollArea::vertical().id_salt("insights_scroll").show(ui, |ui| {
            ui.heading(format!("{} job postings", ins.total));
            ui.add_space(8.0);

            bar_rows(ui, "Job Demand by Role", &ins.roles);
            bar_rows(ui, "Job Postings by Salary Range", &ins.salary_buckets);
            bar_rows(ui, &format!("Top {TOP_N} Locations"), &ins.locations);

            if ins.skills.is_empty() {
                ui.strong(format!("Top {TOP_N} Skills"));
                ui.label("No skills data available after filtering. Try adjusting your filters.");
                ui.add_space(12.0);
            } else {
                bar_rows(ui, &format!("Top {TOP_N} Skills"), &ins.skills);
            }

            bar_rows(ui, &format!("Top {TOP_N} Companies"), &ins.companies);
        });
    }
}
