// src/gui/components/export_bar.rs
//
// Bottom bar: reload, CSV export of the filtered rows, status line.

use std::path::PathBuf;

use eframe::egui;

use crate::file::write_records;
use crate::gui::app::App;
use crate::record::JobRecord;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button("Reload data").clicked() {
            logf!("UI: Reload {}", app.data_path.display());
            app.reload();
        }

        ui.separator();

        ui.label("Export to:");
        ui.add(egui::TextEdit::singleline(&mut app.out_path_text).desired_width(260.0));

        if ui.button("Download filtered data").clicked() {
            let path = PathBuf::from(app.out_path_text.trim());
            let rows: Vec<JobRecord> = app.filtered().cloned().collect();
            logf!("Export: Begin rows={} → {}", rows.len(), path.display());
            match write_records(&path, &rows) {
                Ok(()) => {
                    logf!("Export: OK {}", path.display());
                    app.status(format!("Exported {} rows to {}", rows.len(), path.display()));
                }
                Err(e) => {
                    loge!("Export: Error: {e}");
                    app.status(format!("Export error: {e}"));
                }
            }
        }

        ui.separator();
        ui.label(format!("Status: {}", app.status));
    });
}
