// src/clean/normalize.rs
//! Field normalizers. Each one is total: any input, including null, maps to a
//! value or a sentinel.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::core::sanitize::{normalize_ws, title_case};
use crate::record::{NA, NOT_DISCLOSED, NO_DESCRIPTION, NO_SKILLS, UNKNOWN};

static RANGE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([0-9]+\.?[0-9]*)\s*-\s*([0-9]+\.?[0-9]*)").ok());
static NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[0-9]+\.?[0-9]*").ok());

/// 1 lakh = 10^5.
const LAKH_DIGITS: usize = 5;

/// Text form of a scalar cell; null and blank are `None`.
pub fn value_text(v: Option<&Value>) -> Option<String> {
    let s = match v? {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        Value::Array(items) if items.is_empty() => return None,
        other => other.to_string(),
    };
    if s.trim().is_empty() { None } else { Some(s) }
}

/// `"X-Y"` for a range (scaled to rupees when quoted in lakhs), else the first
/// number, else "Not Disclosed".
pub fn clean_salary(raw: Option<&str>) -> String {
    let Some(raw) = raw else { return s!(NOT_DISCLOSED) };
    let text: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '₹' | '$' | ','))
        .collect();
    let text = text.trim();
    if !text.chars().any(|c| c.is_ascii_digit()) {
        return s!(NOT_DISCLOSED);
    }

    if let Some(caps) = RANGE.as_ref().and_then(|re| re.captures(text)) {
        let (low, high) = (&caps[1], &caps[2]);
        if text.contains("lac") || text.contains("lakh") {
            return format!("{}-{}", scale_lakh(low), scale_lakh(high));
        }
        return format!("{low}-{high}");
    }

    match NUMBER.as_ref().and_then(|re| re.find(text)) {
        Some(m) => s!(m.as_str()),
        None => s!(NOT_DISCLOSED),
    }
}

/// `token` × 100000, done on the digits: the decimal point moves five places.
/// Exact for any length; leading and trailing zeros are dropped.
fn scale_lakh(token: &str) -> String {
    let (int, frac) = token.split_once('.').unwrap_or((token, ""));
    let shift = frac.len().min(LAKH_DIGITS);

    let mut whole = join!(int, &frac[..shift]);
    whole.extend(std::iter::repeat_n('0', LAKH_DIGITS - shift));
    let whole = match whole.trim_start_matches('0') {
        "" => "0",
        w => w,
    };

    match frac[shift..].trim_end_matches('0') {
        "" => s!(whole),
        rest => format!("{whole}.{rest}"),
    }
}

pub fn clean_location(raw: Option<&str>) -> String {
    match raw.map(normalize_ws) {
        Some(s) if !s.is_empty() => title_case(&s),
        _ => s!(UNKNOWN),
    }
}

/// Titles and company names.
pub fn clean_text(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => title_case(s),
        _ => s!(NA),
    }
}

pub fn clean_role(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => title_case(s),
        _ => s!(UNKNOWN),
    }
}

pub fn clean_description(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s!(s),
        _ => s!(NO_DESCRIPTION),
    }
}

/// Lists become "A, B"; a string holding a list is decoded first.
pub fn clean_skills(raw: &Value) -> String {
    let joined = match raw {
        Value::Null => return s!(NO_SKILLS),
        Value::Array(items) => join_skills(items.iter().filter_map(|v| value_text(Some(v)))),
        Value::String(s) => {
            let t = s.trim();
            match decode_list(t) {
                Some(items) => join_skills(items.into_iter()),
                None => title_case(t),
            }
        }
        other => title_case(&other.to_string()),
    };
    if joined.trim().is_empty() { s!(NO_SKILLS) } else { joined }
}

fn join_skills(items: impl Iterator<Item = String>) -> String {
    items
        .map(|s| title_case(s.trim()))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `["a","b"]` (JSON) or `['a', 'b']` (Python repr). `None` when not bracketed.
fn decode_list(s: &str) -> Option<Vec<String>> {
    let inner = s.strip_prefix('[')?.strip_suffix(']')?;
    if let Ok(items) = serde_json::from_str::<Vec<Value>>(s) {
        return Some(items.iter().filter_map(|v| value_text(Some(v))).collect());
    }
    Some(
        inner
            .split(',')
            .map(|part| s!(part.trim().trim_matches(|c| c == '\'' || c == '"').trim()))
            .filter(|part| !part.is_empty())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn salary_ranges_and_units() {
        assert_eq!(clean_salary(Some("5-8 Lacs PA")), "500000-800000");
        assert_eq!(clean_salary(Some("2.5 - 4 Lakh")), "250000-400000");
        assert_eq!(clean_salary(Some("₹25,000 - ₹40,000 a month")), "25000-40000");
        assert_eq!(clean_salary(Some("Up to $90,000 a year")), "90000");
        assert_eq!(clean_salary(Some("Not Disclosed")), NOT_DISCLOSED);
        assert_eq!(clean_salary(Some("")), NOT_DISCLOSED);
        assert_eq!(clean_salary(None), NOT_DISCLOSED);
    }

    #[test]
    fn lakh_scaling_is_exact() {
        assert_eq!(scale_lakh("5"), "500000");
        assert_eq!(scale_lakh("5."), "500000");
        assert_eq!(scale_lakh("0.07"), "7000");
        assert_eq!(scale_lakh("12.345678"), "1234567.8");
        assert_eq!(scale_lakh("007.50"), "750000");
        assert_eq!(clean_salary(Some("0.00000001-1 lac")), "0.001-100000");

        let huge = "9".repeat(400);
        let out = clean_salary(Some(&format!("{huge}-1 lakh")));
        assert_eq!(out, format!("{huge}00000-100000"));
    }

    #[test]
    fn location_and_text() {
        assert_eq!(clean_location(None), "Unknown");
        assert_eq!(clean_location(Some("  pune   city ")), "Pune City");
        assert_eq!(clean_text(Some("  senior data ANALYST ")), "Senior Data Analyst");
        assert_eq!(clean_text(None), NA);
        assert_eq!(clean_role(Some("data-analyst")), "Data-Analyst");
        assert_eq!(clean_role(Some("  ")), UNKNOWN);
        assert_eq!(clean_description(None), NO_DESCRIPTION);
        assert_eq!(clean_description(Some("  build things ")), "build things");
    }

    #[test]
    fn skills_shapes() {
        assert_eq!(clean_skills(&json!([])), "None");
        assert_eq!(clean_skills(&json!("[]")), "None");
        assert_eq!(clean_skills(&Value::Null), "None");
        assert_eq!(clean_skills(&json!(["python", " SQL"])), "Python, Sql");
        assert_eq!(clean_skills(&json!(r#"["python","power bi"]"#)), "Python, Power Bi");
        assert_eq!(clean_skills(&json!("['Excel', 'Tableau']")), "Excel, Tableau");
        assert_eq!(clean_skills(&json!("machine learning")), "Machine Learning");
    }

    #[test]
    fn value_text_handles_scalars() {
        assert_eq!(value_text(Some(&json!(12))), Some(s!("12")));
        assert_eq!(value_text(Some(&json!("  "))), None);
        assert_eq!(value_text(None), None);
    }
}
