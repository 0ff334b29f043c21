// src/gui/app.rs
use std::error::Error;
use std::path::PathBuf;

use eframe::egui;

use crate::config::consts::{FILTERED_EXPORT, MERGED_OUT};
use crate::insights::{self, roadmap::ROADMAPS, Filters, Insights};
use crate::record::JobRecord;

use super::pages::Page;
use super::{components, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "CareerVue",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(PathBuf::from(MERGED_OUT))))),
    )?;
    Ok(())
}

pub struct App {
    // canonical table, roles in display form
    pub data_path: PathBuf,
    pub records: Vec<JobRecord>,

    // filter choices offered in the side panel
    pub locations: Vec<String>,
    pub roles: Vec<String>,
    pub skills: Vec<String>,

    // current filters and the rows they select
    pub filters: Filters,
    pub row_ix: Vec<usize>,
    pub insights: Insights,

    pub current_page_index: usize,
    pub roadmap_index: usize,
    pub out_path_text: String,
    pub status: String,
}

impl App {
    pub fn new(data_path: PathBuf) -> Self {
        let mut app = Self {
            data_path,
            records: Vec::new(),
            locations: Vec::new(),
            roles: Vec::new(),
            skills: Vec::new(),
            filters: Filters::default(),
            row_ix: Vec::new(),
            insights: Insights::default(),
            current_page_index: 0,
            roadmap_index: 0,
            out_path_text: s!(FILTERED_EXPORT),
            status: s!("Idle"),
        };
        app.reload();
        app
    }

    /// Read the merged table again. A missing file leaves an empty table and a status line.
    pub fn reload(&mut self) {
        match insights::load(&self.data_path) {
            Ok(records) => {
                logf!("Data: Loaded {} records from {}", records.len(), self.data_path.display());
                self.status = format!("Loaded {} job postings", records.len());
                self.records = records;
            }
            Err(e) => {
                loge!("Data: {e}");
                self.status = format!("Could not load {}: {e}", self.data_path.display());
                self.records.clear();
            }
        }
        self.locations = insights::distinct(&self.records, |r| r.location.as_str());
        self.roles = insights::distinct(&self.records, |r| r.role.as_str());
        self.skills = insights::all_skills(&self.records);
        self.refilter();
    }

    /// Recompute the selected rows and their tallies.
    pub fn refilter(&mut self) {
        self.row_ix = insights::filter_indices(&self.records, &self.filters);
        self.insights = Insights::compute(&self.records, &self.row_ix);
        logd!("Filter: {} of {} rows", self.row_ix.len(), self.records.len());
    }

    pub fn filtered(&self) -> impl Iterator<Item = &JobRecord> {
        self.row_ix.iter().filter_map(|&i| self.records.get(i))
    }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_page_index.min(pages.len() - 1)]
    }

    #[inline]
    pub fn current_roadmap(&self) -> &'static insights::roadmap::Roadmap {
        &ROADMAPS[self.roadmap_index.min(ROADMAPS.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("filters")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::export_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            if self.row_ix.is_empty() {
                ui.colored_label(
                    egui::Color32::from_rgb(220, 160, 30),
                    "No jobs match the selected filters. Please adjust your filters to see results.",
                );
                return;
            }
            page.draw(ui, self);
        });
    }
}
