// src/core/sanitize.rs

/// Collapse any whitespace run (incl. `&nbsp;` after decoding) to one space
/// and trim the ends.
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

/// Text after the first `sep`, trimmed. Without `sep` the whole text is kept.
pub fn after_first<'a>(s: &'a str, sep: char) -> &'a str {
    match s.split_once(sep) {
        Some((_, rest)) => rest.trim(),
        None => s.trim(),
    }
}

/// Drop a leading label (e.g. `Regia:`) and the separators that follow it.
/// Text not starting with `label` is returned unchanged.
pub fn strip_label<'a>(s: &'a str, label: &str) -> &'a str {
    match s.strip_prefix(label) {
        Some(rest) => rest.trim_start_matches(|c: char| c == ':' || c.is_whitespace()),
        None => s,
    }
}

/// Empty → None; anything else owned.
pub fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}
