// src/file.rs
//! Incremental persistence. Append-or-create, header once, parents on demand.

use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::PersistFormat;
use crate::error::StoreError;
use crate::record::{JobRecord, Listing};

/// Destination for crawled batches.
pub trait RecordSink {
    /// Write `records` and return how many were written. On error nothing
    /// counts as saved and the caller keeps the batch.
    fn persist(&mut self, records: &[Listing]) -> Result<usize, StoreError>;
}

/// File-backed sink. The first call honors `append`; later calls always append.
#[derive(Clone, Debug)]
pub struct Persister {
    pub path: PathBuf,
    pub format: PersistFormat,
    pub append: bool,
}

impl Persister {
    pub fn new(path: impl Into<PathBuf>, format: PersistFormat) -> Self {
        Self { path: path.into(), format, append: true }
    }
}

impl RecordSink for Persister {
    fn persist(&mut self, records: &[Listing]) -> Result<usize, StoreError> {
        if records.is_empty() {
            return Ok(0);
        }
        match self.format {
            PersistFormat::Table => save_table(&self.path, records, self.append)?,
            PersistFormat::Lines => save_lines(&self.path, records, self.append)?,
        }
        self.append = true;
        logf!("Saved {} jobs to {} ({})", records.len(), self.path.display(), self.format.ext());
        Ok(records.len())
    }
}

/// Open for append when asked and the file exists; otherwise create fresh.
/// Returns the handle and whether it was created.
fn open_target(path: &Path, append: bool) -> Result<(File, bool), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    if append && path.exists() {
        let f = OpenOptions::new().append(true).open(path).map_err(|e| StoreError::io(path, e))?;
        Ok((f, false))
    } else {
        let f = File::create(path).map_err(|e| StoreError::io(path, e))?;
        Ok((f, true))
    }
}

/// CSV rows in `Listing::HEADERS` order. The header goes out only on create.
pub fn save_table(path: &Path, records: &[Listing], append: bool) -> Result<(), StoreError> {
    let (file, created) = open_target(path, append)?;
    let mut w = csv::WriterBuilder::new().has_headers(false).from_writer(BufWriter::new(file));
    if created {
        w.write_record(Listing::HEADERS).map_err(|e| StoreError::csv(path, e))?;
    }
    for r in records {
        w.write_record(r.to_row()).map_err(|e| StoreError::csv(path, e))?;
    }
    w.flush().map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

/// One JSON object per line.
pub fn save_lines(path: &Path, records: &[Listing], append: bool) -> Result<(), StoreError> {
    let (file, _) = open_target(path, append)?;
    let mut out = BufWriter::new(file);
    for r in records {
        let line = serde_json::to_string(r)?;
        writeln!(out, "{line}").map_err(|e| StoreError::io(path, e))?;
    }
    out.flush().map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

/// Overwrite `path` with merged records, header included.
pub fn write_records(path: &Path, records: &[JobRecord]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
    let mut w = csv::Writer::from_writer(BufWriter::new(file));
    if records.is_empty() {
        w.write_record(JobRecord::COLUMNS).map_err(|e| StoreError::csv(path, e))?;
    }
    for r in records {
        w.serialize(r).map_err(|e| StoreError::csv(path, e))?;
    }
    w.flush().map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

/// Write a plain text file, creating parents.
pub fn write_text(path: &Path, text: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, text).map_err(|e| StoreError::io(path, e))
}

pub fn ensure_directory(dir: &Path) -> Result<(), StoreError> {
    if dir.exists() && !dir.is_dir() {
        let e = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory");
        return Err(StoreError::io(dir, e));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str) -> Listing {
        Listing {
            role: s!("data-analyst"),
            location_query: s!("pune"),
            title: s!(title),
            company: s!("Acme, Inc."),
            location_detail: s!("Pune"),
            salary_text: s!("3-5 Lacs PA"),
            skills: vec![s!("SQL")],
        }
    }

    #[test]
    fn table_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.csv");
        save_table(&path, &[listing("A")], true).unwrap();
        save_table(&path, &[listing("B")], true).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Role,Location,Title"));
        assert!(lines[1].contains(",A,"));
        assert!(lines[2].contains(",B,"));
        assert!(lines[1].contains(r#""[""SQL""]""#));
    }

    #[test]
    fn sequential_persists_keep_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        let mut sink = Persister::new(&path, PersistFormat::Lines);
        assert_eq!(sink.persist(&[listing("A")]).unwrap(), 1);
        assert_eq!(sink.persist(&[listing("B")]).unwrap(), 1);
        assert_eq!(sink.persist(&[]).unwrap(), 0);

        let titles: Vec<String> = fs::read_to_string(&path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str::<Listing>(l).unwrap().title)
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn no_append_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        save_lines(&path, &[listing("A"), listing("B")], true).unwrap();
        save_lines(&path, &[listing("C")], false).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains(r#""Title":"C""#));
    }

    #[test]
    fn empty_merged_output_still_has_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merged.csv");
        write_records(&path, &[]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim(), JobRecord::COLUMNS.join(","));
    }
}
