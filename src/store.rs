// src/store.rs
//! Loading datasets back from disk: raw CSV tables, line-delimited JSON, and
//! the merged job table.

use std::{fs, path::Path};

use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::record::JobRecord;

pub type Object = Map<String, Value>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// Rows as header-keyed JSON objects. Empty cells become null; short rows
    /// leave trailing keys out.
    pub fn into_objects(self) -> Vec<Object> {
        let headers = self.headers;
        self.rows
            .into_iter()
            .map(|row| {
                headers
                    .iter()
                    .zip(row)
                    .map(|(h, cell)| {
                        let v = if cell.trim().is_empty() { Value::Null } else { Value::String(cell) };
                        (h.clone(), v)
                    })
                    .collect()
            })
            .collect()
    }
}

/// Read a headered CSV file. Ragged rows are accepted as-is.
pub fn load_table(path: &Path) -> Result<DataSet, StoreError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| StoreError::csv(path, e))?;

    let headers = rdr
        .headers()
        .map_err(|e| StoreError::csv(path, e))?
        .iter()
        .map(|h| s!(h.trim_start_matches('\u{feff}')))
        .collect();

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|e| StoreError::csv(path, e))?;
        rows.push(rec.iter().map(|c| s!(c)).collect());
    }
    Ok(DataSet { headers, rows })
}

/// Read one JSON object per line. Blank lines are ignored; malformed lines and
/// non-object values are skipped with a warning.
pub fn load_lines(path: &Path) -> Result<Vec<Object>, StoreError> {
    let text = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    let mut out = Vec::new();
    for (ix, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(Value::Object(obj)) => out.push(obj),
            Ok(_) => logw!("{}:{}: not a JSON object, skipped", path.display(), ix + 1),
            Err(e) => logw!("{}:{}: malformed JSON line skipped: {e}", path.display(), ix + 1),
        }
    }
    Ok(out)
}

/// Read the merged job table.
pub fn load_merged(path: &Path) -> Result<Vec<JobRecord>, StoreError> {
    let mut rdr = csv::Reader::from_path(path).map_err(|e| StoreError::csv(path, e))?;
    rdr.deserialize()
        .map(|r| r.map_err(|e| StoreError::csv(path, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn table_rows_become_objects() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "Title,Company,Salary\nAnalyst,Acme,\nDev,\"Globex, Ltd\",5 LPA\n").unwrap();
        let ds = load_table(f.path()).unwrap();
        assert_eq!(ds.headers, vec!["Title", "Company", "Salary"]);
        assert_eq!(ds.rows.len(), 2);

        let objs = ds.into_objects();
        assert_eq!(objs[0]["Salary"], Value::Null);
        assert_eq!(objs[1]["Company"], Value::String(s!("Globex, Ltd")));
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, r#"{{"title":"A"}}"#).unwrap();
        writeln!(f, r#"{{"title": broken"#).unwrap();
        writeln!(f).unwrap();
        writeln!(f, "[1,2]").unwrap();
        writeln!(f, r#"{{"title":"B"}}"#).unwrap();
        let objs = load_lines(f.path()).unwrap();
        assert_eq!(objs.len(), 2);
        assert_eq!(objs[1]["title"], "B");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_lines(Path::new("/definitely/not/here.json")).is_err());
        assert!(load_table(Path::new("/definitely/not/here.csv")).is_err());
    }
}
