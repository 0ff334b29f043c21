// src/gui/components/filter_panel.rs
//
// Left panel: every filter control. Any change re-runs the filter once per frame.

use std::collections::BTreeSet;

use eframe::egui;

use crate::gui::app::App;
use crate::insights::Filters;
use crate::record::Source;

const LIST_H: f32 = 150.0;

/// Checkbox list over `items`; returns true when the selection changed.
fn multi_select(ui: &mut egui::Ui, id: &str, items: &[String], selected: &mut BTreeSet<String>) -> bool {
    let mut changed = false;
    egui::ScrollArea::vertical()
        .id_salt(id)
        .max_height(LIST_H)
        .show(ui, |ui| {
            for item in items {
                let mut on = selected.contains(item);
                if ui.checkbox(&mut on, item.as_str()).changed() {
                    if on { selected.insert(item.clone()); } else { selected.remove(item); }
                    changed = true;
                }
            }
        });
    changed
}

fn source_label(s: Option<Source>) -> &'static str {
    match s {
        None => "Both",
        Some(src) => src.as_str(),
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filter Options");
    ui.separator();

    let mut changed = false;

    egui::ComboBox::from_label("Data Source")
        .selected_text(source_label(app.filters.source))
        .show_ui(ui, |ui| {
            for opt in [None, Some(Source::Naukri), Some(Source::Indeed)] {
                changed |= ui.selectable_value(&mut app.filters.source, opt, source_label(opt)).changed();
            }
        });

    ui.label("Search Job Title");
    changed |= ui.text_edit_singleline(&mut app.filters.title_query).changed();

    ui.add_space(6.0);
    egui::CollapsingHeader::new(format!("Location ({})", app.filters.locations.len()))
        .id_salt("loc_header")
        .show(ui, |ui| {
            changed |= multi_select(ui, "loc_list", &app.locations, &mut app.filters.locations);
        });

    egui::CollapsingHeader::new(format!("Role ({})", app.filters.roles.len()))
        .id_salt("role_header")
        .show(ui, |ui| {
            changed |= multi_select(ui, "role_list", &app.roles, &mut app.filters.roles);
        });

    ui.separator();
    ui.strong("Advanced Filters");

    ui.label("Salary Range (₹ Lakhs)");
    let (mut lo, mut hi) = app.filters.salary_lakhs;
    changed |= ui.add(egui::Slider::new(&mut lo, 0..=50).text("min")).changed();
    changed |= ui.add(egui::Slider::new(&mut hi, 0..=50).text("max")).changed();
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }
    app.filters.salary_lakhs = (lo, hi);

    egui::CollapsingHeader::new(format!("Skills ({})", app.filters.skills.len()))
        .id_salt("skills_header")
        .show(ui, |ui| {
            changed |= multi_select(ui, "skills_list", &app.skills, &mut app.filters.skills);
        });

    ui.separator();
    if ui.button("Reset filters").clicked() {
        app.filters = Filters::default();
        changed = true;
    }

    if changed {
        app.refilter();
        app.status(format!("Showing {} of {} postings", app.row_ix.len(), app.records.len()));
    }
}
