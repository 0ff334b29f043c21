// src/gui/components/charts.rs
//
// Horizontal bar rows: label, bar scaled to the largest count, count.

use eframe::egui;

const LABEL_W: f32 = 200.0;
const BAR_H: f32 = 16.0;

pub fn bar_rows(ui: &mut egui::Ui, title: &str, counts: &[(String, usize)]) {
    ui.strong(title);
    if counts.is_empty() {
        ui.weak("No data");
        ui.add_space(12.0);
        return;
    }

    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1) as f32;
    egui::Grid::new(("bars", title))
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            for (label, n) in counts {
                ui.add_sized([LABEL_W, BAR_H], egui::Label::new(label.as_str()).truncate());
                let width = (ui.available_width() - 8.0).max(80.0);
                ui.add(
                    egui::ProgressBar::new(*n as f32 / max)
                        .desired_width(width)
                        .desired_height(BAR_H)
                        .text(n.to_string()),
                );
                ui.end_row();
            }
        });
    ui.add_space(12.0);
}
