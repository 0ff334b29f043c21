// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::insights::PAGE,
    &pages::listings::PAGE,
    &pages::roadmap::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
