// src/gui/pages/roadmap.rs
use std::path::PathBuf;

use eframe::egui;

use super::Page;
use crate::file::write_text;
use crate::gui::app::App;
use crate::insights::roadmap::ROADMAPS;

pub struct RoadmapPage;
pub static PAGE: RoadmapPage = RoadmapPage;

impl Page for RoadmapPage {
    fn title(&self) -> &'static str { "Career Roadmap" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            ui.label("Role:");
            egui::ComboBox::from_id_salt("roadmap_role")
                .selected_text(app.current_roadmap().role)
                .show_ui(ui, |ui| {
                    for (ix, r) in ROADMAPS.iter().enumerate() {
                        ui.selectable_value(&mut app.roadmap_index, ix, r.role);
                    }
                });

            if ui.button("Download roadmap").clicked() {
                let rm = app.current_roadmap();
                let path = PathBuf::from(rm.file_name());
                match write_text(&path, &rm.render_text()) {
                    Ok(()) => {
                        logf!("Export: Roadmap {} → {}", rm.role, path.display());
                        app.status(format!("Saved {}", path.display()));
                    }
                    Err(e) => {
                        loge!("Export: Roadmap failed: {e}");
                        app.status(format!("Export error: {e}"));
                    }
                }
            }
        });

        ui.separator();

        let rm = app.current_roadmap();
        egui::ScrollArea::vertical().id_salt("roadmap_scroll").show(ui, |ui| {
            ui.heading(format!("Career Roadmap for {}", rm.role));
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                ui.strong("Skills Required:");
                ui.label(rm.skills.join(", "));
            });
            ui.add_space(6.0);
            ui.strong("Roadmap to Prepare:");
            for s in rm.steps {
                ui.horizontal_wrapped(|ui| {
                    ui.strong(format!("• {}:", s.step));
                    ui.label(s.description);
                    ui.weak(format!("(Resources: {})", s.resources));
                });
            }
        });
    }
}
