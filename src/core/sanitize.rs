// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace('\u{a0}', " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Uppercase the first letter of every run of letters, lowercase the rest.
/// Anything that is not a letter starts a new word: "data-analyst" → "Data-Analyst",
/// "3d artist" → "3D Artist".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word { out.extend(ch.to_lowercase()); } else { out.extend(ch.to_uppercase()); }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Filesystem-safe stem for snapshot keys: alnum, '-' and '_' kept; whitespace → '_'.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '+' { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("unnamed") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_treats_non_letters_as_boundaries() {
        assert_eq!(title_case("data-analyst"), "Data-Analyst");
        assert_eq!(title_case("PUNE city"), "Pune City");
        assert_eq!(title_case("3d artist"), "3D Artist");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn ws_and_entities() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
        assert_eq!(normalize_entities("R&amp;D&nbsp;Lab"), "R&D Lab");
    }

    #[test]
    fn filename_is_safe() {
        assert_eq!(sanitize_filename("data analyst / pune"), "data_analyst_pune");
        assert_eq!(sanitize_filename("machine+learning"), "machine_learning");
        assert_eq!(sanitize_filename("///"), "unnamed");
    }
}
