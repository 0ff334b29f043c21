// src/gui/components/data_table.rs
//
// Draws the filtered listings. Rows are virtualized; only visible rows are laid out.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::record::JobRecord;

const HEADERS: [&str; 7] = ["Title", "Company", "Location", "Salary", "Role", "Source", "Skills"];
const WIDTHS: [f32; 7] = [260.0, 180.0, 140.0, 130.0, 170.0, 70.0, 320.0];
const ROW_H: f32 = 20.0;

fn cell(r: &JobRecord, col: usize) -> &str {
    match col {
        0 => &r.title,
        1 => &r.company,
        2 => &r.location,
        3 => &r.salary,
        4 => &r.role,
        5 => r.source.as_str(),
        _ => &r.skills,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // Reserve space for scroll bars instead of floating over content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("listings_hscroll")
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h);
            for w in WIDTHS {
                table = table.column(Column::initial(w).at_least(40.0).clip(true));
            }

            table
                .header(ROW_H + 4.0, |mut header| {
                    for h in HEADERS {
                        header.col(|ui| {
                            ui.label(RichText::new(h).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, app.row_ix.len(), |mut row| {
                        let Some(rec) = app.row_ix.get(row.index()).and_then(|&i| app.records.get(i)) else {
                            return;
                        };
                        for col in 0..HEADERS.len() {
                            row.col(|ui| {
                                ui.add(egui::Label::new(cell(rec, col)).truncate());
                            });
                        }
                    });
                });
        });
}
