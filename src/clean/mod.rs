// src/clean/mod.rs
//! Merge the two scraped datasets into one table on the canonical columns.
//!
//! ```text
//! naukri CSV ─┐                         ┌─> cleaned_job_data.csv
//!             ├─ rename → normalize ─ dedupe
//! indeed JSONL┘                         └─> duplicates.csv
//! ```
//!
//! Deterministic: the same inputs always give byte-identical outputs.

pub mod dedup;
pub mod normalize;

use std::fmt;

use serde_json::Value;

pub use dedup::{dedupe, Dedup};
pub use normalize::*;

use crate::config::options::PipelinePaths;
use crate::error::PipelineError;
use crate::file::write_records;
use crate::record::{JobRecord, Source};
use crate::store::{self, Object};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub naukri_rows: usize,
    pub indeed_rows: usize,
    pub merged_rows: usize,
    pub duplicate_rows: usize,
    pub naukri_duplicates: usize,
    pub indeed_duplicates: usize,
    pub output_rows: usize,
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "naukri {} + indeed {} = {} merged; {} duplicate rows (naukri {}, indeed {}); {} written",
            self.naukri_rows,
            self.indeed_rows,
            self.merged_rows,
            self.duplicate_rows,
            self.naukri_duplicates,
            self.indeed_duplicates,
            self.output_rows,
        )
    }
}

/// First non-null value whose key matches `column` case-insensitively.
fn column<'a>(obj: &'a Object, column: &str) -> Option<&'a Value> {
    obj.iter()
        .find(|(k, v)| k.trim().eq_ignore_ascii_case(column) && !v.is_null())
        .map(|(_, v)| v)
}

fn text(obj: &Object, name: &str) -> Option<String> {
    value_text(column(obj, name))
}

/// Reshape one raw row onto the canonical columns and normalize every field.
/// Keys outside the canonical set (e.g. `Location_Detail`) are dropped.
pub fn to_record(obj: &Object, source: Source) -> JobRecord {
    JobRecord {
        title: clean_text(text(obj, "title").as_deref()),
        company: clean_text(text(obj, "company").as_deref()),
        location: clean_location(text(obj, "location").as_deref()),
        salary: clean_salary(text(obj, "salary").as_deref()),
        description: clean_description(text(obj, "description").as_deref()),
        role: clean_role(text(obj, "role").as_deref()),
        skills: clean_skills(column(obj, "skills").unwrap_or(&Value::Null)),
        source,
    }
}

/// Source A rows first, then source B, each in file order.
pub fn merge(naukri: &[Object], indeed: &[Object]) -> Vec<JobRecord> {
    naukri
        .iter()
        .map(|o| to_record(o, Source::Naukri))
        .chain(indeed.iter().map(|o| to_record(o, Source::Indeed)))
        .collect()
}

pub fn run(paths: &PipelinePaths) -> Result<PipelineReport, PipelineError> {
    for p in [&paths.naukri, &paths.indeed] {
        if !p.is_file() {
            loge!("Input not found: {}", p.display());
            return Err(PipelineError::MissingInput(p.clone()));
        }
    }

    let naukri = store::load_table(&paths.naukri)?;
    logf!("Naukri columns: {:?}", naukri.headers);
    let naukri = naukri.into_objects();
    logf!("Naukri records: {}", naukri.len());

    let indeed = store::load_lines(&paths.indeed)?;
    if indeed.is_empty() {
        logw!("No valid records in {}", paths.indeed.display());
    }
    logf!("Indeed records: {}", indeed.len());

    let merged = merge(&naukri, &indeed);
    logf!("Total records after merge: {}", merged.len());

    let d = dedupe(&merged);
    write_records(&paths.duplicates, &d.duplicates)?;
    logf!("Duplicate records (all copies): {} -> {}", d.duplicates.len(), paths.duplicates.display());

    write_records(&paths.merged, &d.kept)?;
    logf!("Cleaned data saved to {} with {} records", paths.merged.display(), d.kept.len());

    Ok(PipelineReport {
        naukri_rows: naukri.len(),
        indeed_rows: indeed.len(),
        merged_rows: merged.len(),
        duplicate_rows: d.duplicates.len(),
        naukri_duplicates: d.duplicates_from(Source::Naukri),
        indeed_duplicates: d.duplicates_from(Source::Indeed),
        output_rows: d.kept.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Object {
        match v {
            Value::Object(m) => m,
            _ => Object::new(),
        }
    }

    #[test]
    fn renames_case_insensitively_and_fills_sentinels() {
        let o = obj(json!({
            "TITLE": " data analyst ",
            "Location": "pune",
            "Location_Detail": "Pune, Maharashtra",
            "Skills": ["sql"],
        }));
        let r = to_record(&o, Source::Indeed);
        assert_eq!(r.title, "Data Analyst");
        assert_eq!(r.company, "N/A");
        assert_eq!(r.location, "Pune");
        assert_eq!(r.salary, "Not Disclosed");
        assert_eq!(r.description, "No description");
        assert_eq!(r.role, "Unknown");
        assert_eq!(r.skills, "Sql");
        assert_eq!(r.source, Source::Indeed);
    }

    #[test]
    fn merge_keeps_source_order() {
        let a = vec![obj(json!({"Title": "a1"})), obj(json!({"Title": "a2"}))];
        let b = vec![obj(json!({"title": "b1"}))];
        let m = merge(&a, &b);
        let titles: Vec<&str> = m.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A1", "A2", "B1"]);
        assert_eq!(m[2].source, Source::Indeed);
    }
}
