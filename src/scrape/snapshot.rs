// src/scrape/snapshot.rs
//! Diagnostic captures (page markup, screenshots). Best-effort: failures are
//! logged and never change a fetch outcome.

use std::fs;
use std::path::{Path, PathBuf};

use super::Cursor;
use crate::browser::Session;
use crate::core::sanitize::sanitize_filename;

#[derive(Clone, Debug, Default)]
pub struct Snapshots {
    dir: Option<PathBuf>,
}

impl Snapshots {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: Some(dir.into()) }
    }

    pub fn disabled() -> Self {
        Self { dir: None }
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// `{label}_{role}_{location}_page_{page}_attempt_{attempt}.{ext}`
    pub fn file_name(label: &str, cur: &Cursor, ext: &str) -> String {
        format!(
            "{label}_{}_{}_page_{}_attempt_{}.{ext}",
            sanitize_filename(&cur.role),
            sanitize_filename(&cur.location),
            cur.page,
            cur.attempt,
        )
    }

    pub fn save_html(&self, label: &str, cur: &Cursor, html: &str) -> Option<PathBuf> {
        self.write(label, cur, "html", html.as_bytes())
    }

    pub fn save_screenshot(&self, label: &str, cur: &Cursor, session: &mut dyn Session) -> Option<PathBuf> {
        self.dir.as_ref()?;
        match session.screenshot() {
            Ok(png) => self.write(label, cur, "png", &png),
            Err(e) => {
                logw!("Screenshot failed for {}: {e}", cur);
                None
            }
        }
    }

    fn write(&self, label: &str, cur: &Cursor, ext: &str, bytes: &[u8]) -> Option<PathBuf> {
        let dir = self.dir.as_ref()?;
        let path = dir.join(Self::file_name(label, cur, ext));
        let res = fs::create_dir_all(dir).and_then(|_| fs::write(&path, bytes));
        match res {
            Ok(()) => {
                logd!("Saved snapshot {}", path.display());
                Some(path)
            }
            Err(e) => {
                logw!("Could not save snapshot {}: {e}", path.display());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_carry_the_cursor() {
        let cur = Cursor::new("data-analyst", "New Delhi", 2).attempt(3);
        assert_eq!(
            Snapshots::file_name("timeout", &cur, "png"),
            "timeout_data-analyst_New_Delhi_page_2_attempt_3.png"
        );
    }

    #[test]
    fn html_lands_in_dir_and_disabled_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let snaps = Snapshots::new(dir.path().join("shots"));
        let cur = Cursor::new("r", "l", 1).attempt(1);
        let p = snaps.save_html("page_source", &cur, "<html/>").unwrap();
        assert_eq!(fs::read_to_string(p).unwrap(), "<html/>");
        assert!(Snapshots::disabled().save_html("x", &cur, "y").is_none());
    }
}
