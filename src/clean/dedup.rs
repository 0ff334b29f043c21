// src/clean/dedup.rs
use std::collections::{HashMap, HashSet};

use crate::record::{JobRecord, Source};

type Key<'a> = (&'a str, &'a str, &'a str, Source, &'a str);

/// Composite identity: (title, company, location, source, salary).
fn key(r: &JobRecord) -> Key<'_> {
    (&r.title, &r.company, &r.location, r.source, &r.salary)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dedup {
    /// First occurrence per key, input order.
    pub kept: Vec<JobRecord>,
    /// Every row whose key occurs more than once, all copies, input order.
    pub duplicates: Vec<JobRecord>,
}

impl Dedup {
    pub fn duplicates_from(&self, source: Source) -> usize {
        self.duplicates.iter().filter(|r| r.source == source).count()
    }
}

pub fn dedupe(rows: &[JobRecord]) -> Dedup {
    let mut counts: HashMap<Key<'_>, usize> = HashMap::new();
    for r in rows {
        *counts.entry(key(r)).or_default() += 1;
    }

    let mut seen = HashSet::new();
    let mut out = Dedup::default();
    for r in rows {
        let k = key(r);
        if counts.get(&k).copied().unwrap_or(0) > 1 {
            out.duplicates.push(r.clone());
        }
        if seen.insert(k) {
            out.kept.push(r.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(title: &str, salary: &str, source: Source) -> JobRecord {
        JobRecord {
            title: s!(title),
            company: s!("Acme"),
            location: s!("Pune"),
            salary: s!(salary),
            description: s!("No description"),
            role: s!("Data-Analyst"),
            skills: s!("None"),
            source,
        }
    }

    #[test]
    fn keeps_first_and_reports_all_copies() {
        let rows = vec![
            rec("A", "1", Source::Naukri),
            rec("B", "1", Source::Naukri),
            rec("A", "1", Source::Naukri),
            rec("A", "1", Source::Indeed),
            rec("A", "2", Source::Naukri),
            rec("A", "1", Source::Naukri),
        ];
        let d = dedupe(&rows);
        assert_eq!(d.kept.len(), 4);
        assert_eq!(d.kept[0], rows[0]);
        assert_eq!(d.duplicates.len(), 3);
        assert_eq!(d.duplicates_from(Source::Naukri), 3);
        assert_eq!(d.duplicates_from(Source::Indeed), 0);
    }

    #[test]
    fn dedupe_is_idempotent() {
        let rows = vec![rec("A", "1", Source::Naukri), rec("A", "1", Source::Naukri), rec("C", "3", Source::Indeed)];
        let once = dedupe(&rows);
        let twice = dedupe(&once.kept);
        assert_eq!(once.kept, twice.kept);
        assert!(twice.duplicates.is_empty());
    }
}
