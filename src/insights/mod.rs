// src/insights/mod.rs
//! Dashboard model: filters over the merged table and the tallies drawn from
//! the filtered rows. Views hold row indices, never copies.

pub mod roadmap;

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::core::sanitize::title_case;
use crate::error::StoreError;
use crate::record::{JobRecord, Source, NOT_DISCLOSED};

pub const TOP_N: usize = 10;
const LAKH: f64 = 100_000.0;

pub const BUCKET_LOW: &str = "<₹5L";
pub const BUCKET_MID: &str = "₹5L-₹10L";
pub const BUCKET_HIGH: &str = ">₹10L";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filters {
    /// `None` shows both sources.
    pub source: Option<Source>,
    pub locations: BTreeSet<String>,
    pub roles: BTreeSet<String>,
    pub title_query: String,
    /// Inclusive bounds in lakhs.
    pub salary_lakhs: (u32, u32),
    pub skills: BTreeSet<String>,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            source: None,
            locations: BTreeSet::new(),
            roles: BTreeSet::new(),
            title_query: String::new(),
            salary_lakhs: (0, 50),
            skills: BTreeSet::new(),
        }
    }
}

/// "Data-Analyst" → "Data Analyst".
pub fn display_role(role: &str) -> String {
    title_case(&role.replace('-', " "))
}

/// Load the merged table with roles in display form.
pub fn load(path: &Path) -> Result<Vec<JobRecord>, StoreError> {
    let mut records = crate::store::load_merged(path)?;
    for r in &mut records {
        r.role = display_role(&r.role);
    }
    Ok(records)
}

/// Midpoint of "low-high", the number itself, or 0 when not numeric.
pub fn salary_value(salary: &str) -> f64 {
    parse_salary(salary).unwrap_or(0.0)
}

fn parse_salary(salary: &str) -> Option<f64> {
    let s = salary.trim();
    if s == NOT_DISCLOSED {
        return None;
    }
    match s.split_once('-') {
        Some((lo, hi)) => {
            let lo: f64 = lo.trim().parse().ok()?;
            let hi: f64 = hi.trim().parse().ok()?;
            Some((lo + hi) / 2.0)
        }
        None => s.parse().ok(),
    }
}

pub fn salary_bucket(salary: &str) -> &'static str {
    match parse_salary(salary) {
        None => NOT_DISCLOSED,
        Some(v) if v < 5.0 * LAKH => BUCKET_LOW,
        Some(v) if v <= 10.0 * LAKH => BUCKET_MID,
        Some(_) => BUCKET_HIGH,
    }
}

/// Indices of `records` passing every active filter, in table order.
pub fn filter_indices(records: &[JobRecord], f: &Filters) -> Vec<usize> {
    let query = f.title_query.trim().to_lowercase();
    let lo = f64::from(f.salary_lakhs.0) * LAKH;
    let hi = f64::from(f.salary_lakhs.1) * LAKH;

    let related: BTreeSet<&str> = f
        .skills
        .iter()
        .flat_map(|s| roadmap::roles_for_skill(s).iter().copied())
        .collect();

    records
        .iter()
        .enumerate()
        .filter(|(_, r)| f.source.is_none_or(|s| r.source == s))
        .filter(|(_, r)| f.locations.is_empty() || f.locations.contains(&r.location))
        .filter(|(_, r)| f.roles.is_empty() || f.roles.contains(&r.role))
        .filter(|(_, r)| query.is_empty() || r.title.to_lowercase().contains(&query))
        .filter(|(_, r)| {
            let v = salary_value(&r.salary);
            v >= lo && v <= hi
        })
        .filter(|(_, r)| {
            f.skills.is_empty()
                || r.skill_list()
                    .iter()
                    .any(|have| f.skills.iter().any(|want| want.eq_ignore_ascii_case(have)))
        })
        .filter(|(_, r)| {
            related.is_empty() || related.iter().any(|role| role.eq_ignore_ascii_case(&r.role))
        })
        .map(|(i, _)| i)
        .collect()
}

/// Tally values, most frequent first, ties by name.
pub fn count_by<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = counts.into_iter().map(|(k, n)| (s!(k), n)).collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

pub fn top(mut counts: Vec<(String, usize)>, n: usize) -> Vec<(String, usize)> {
    counts.truncate(n);
    counts
}

/// Distinct values of one column, sorted.
pub fn distinct<'a>(records: &'a [JobRecord], col: impl Fn(&'a JobRecord) -> &'a str) -> Vec<String> {
    let set: BTreeSet<&str> = records.iter().map(col).collect();
    set.into_iter().map(|s| s!(s)).collect()
}

/// Every skill mentioned in the table, sorted.
pub fn all_skills(records: &[JobRecord]) -> Vec<String> {
    let set: BTreeSet<&str> = records.iter().flat_map(|r| r.skill_list()).collect();
    set.into_iter().map(|s| s!(s)).collect()
}

/// Tallies for the Insights view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Insights {
    pub total: usize,
    pub roles: Vec<(String, usize)>,
    pub salary_buckets: Vec<(String, usize)>,
    pub locations: Vec<(String, usize)>,
    pub skills: Vec<(String, usize)>,
    pub companies: Vec<(String, usize)>,
}

impl Insights {
    pub fn compute(records: &[JobRecord], ix: &[usize]) -> Self {
        let rows = || ix.iter().filter_map(|&i| records.get(i));
        Self {
            total: ix.len(),
            roles: count_by(rows().map(|r| r.role.as_str())),
            salary_buckets: count_by(rows().map(|r| salary_bucket(&r.salary))),
            locations: top(count_by(rows().map(|r| r.location.as_str())), TOP_N),
            skills: top(count_by(rows().flat_map(|r| r.skill_list())), TOP_N),
            companies: top(count_by(rows().map(|r| r.company.as_str())), TOP_N),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_display_form() {
        assert_eq!(display_role("Data-Analyst"), "Data Analyst");
        assert_eq!(display_role("machine-learning-engineer"), "Machine Learning Engineer");
    }

    #[test]
    fn salary_midpoints_and_buckets() {
        assert_eq!(salary_value("500000-800000"), 650000.0);
        assert_eq!(salary_value("90000"), 90000.0);
        assert_eq!(salary_value(NOT_DISCLOSED), 0.0);
        assert_eq!(salary_value("abc"), 0.0);

        assert_eq!(salary_bucket("300000-400000"), BUCKET_LOW);
        assert_eq!(salary_bucket("500000-1500000"), BUCKET_MID);
        assert_eq!(salary_bucket("1000000"), BUCKET_MID);
        assert_eq!(salary_bucket("1200000-1800000"), BUCKET_HIGH);
        assert_eq!(salary_bucket(NOT_DISCLOSED), NOT_DISCLOSED);
        assert_eq!(salary_bucket("n/a"), NOT_DISCLOSED);
    }

    #[test]
    fn count_by_orders_by_count_then_name() {
        let c = count_by(["b", "a", "b", "c", "a", "b"]);
        assert_eq!(c, vec![(s!("b"), 3), (s!("a"), 2), (s!("c"), 1)]);
        assert_eq!(top(c, 2).len(), 2);
    }
}
