// src/record.rs
use std::fmt;

use serde::{Deserialize, Serialize};

pub const NA: &str = "N/A";
pub const NOT_DISCLOSED: &str = "Not Disclosed";
pub const UNKNOWN: &str = "Unknown";
pub const NO_SKILLS: &str = "None";
pub const NO_DESCRIPTION: &str = "No description";

/// One job card as scraped. Field names on disk match the scraper outputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Location")]
    pub location_query: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Location_Detail")]
    pub location_detail: String,
    #[serde(rename = "Salary")]
    pub salary_text: String,
    #[serde(rename = "Skills", default)]
    pub skills: Vec<String>,
}

impl Listing {
    pub const HEADERS: [&'static str; 7] =
        ["Role", "Location", "Title", "Company", "Location_Detail", "Salary", "Skills"];

    /// Flat row in `HEADERS` order; skills become a JSON array cell.
    pub fn to_row(&self) -> Vec<String> {
        let skills = serde_json::to_string(&self.skills).unwrap_or_else(|_| s!("[]"));
        vec![
            self.role.clone(),
            self.location_query.clone(),
            self.title.clone(),
            self.company.clone(),
            self.location_detail.clone(),
            self.salary_text.clone(),
            skills,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Source {
    Naukri,
    Indeed,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Naukri => "Naukri",
            Source::Indeed => "Indeed",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cleaned row of the merged dataset. Field order is the column order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub role: String,
    pub skills: String,
    pub source: Source,
}

impl JobRecord {
    pub const COLUMNS: [&'static str; 8] =
        ["title", "company", "location", "salary", "description", "role", "skills", "source"];

    /// Skills cell split back into a list; "None" is empty.
    pub fn skill_list(&self) -> Vec<&str> {
        if self.skills == NO_SKILLS {
            return Vec::new();
        }
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
