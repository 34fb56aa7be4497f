// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
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

/// Expand the site's abbreviated counts into integers. The "k" stands in
/// for two zeros when a decimal point is shown and three otherwise:
/// "8.9k" → 8900, "168k" → 168000, plain digits pass through.
pub fn expand_count(raw: &str) -> Option<u64> {
    let t = raw.trim();
    if t.is_empty() {
        return None;
    }
    let k_replacer = if t.contains('.') { "00" } else { "000" };
    t.replace('.', "").replace('k', k_replacer).parse().ok()
}

/// Karma totals render with thousands separators; strip them and parse.
pub fn parse_karma(raw: &str) -> Option<i64> {
    let t = raw.trim();
    if t.is_empty() {
        return None;
    }
    t.replace(',', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_count_pins() {
        assert_eq!(expand_count("8.9k"), Some(8900));
        assert_eq!(expand_count("168k"), Some(168000));
        assert_eq!(expand_count("1.4k"), Some(1400));
        assert_eq!(expand_count("495"), Some(495));
        assert_eq!(expand_count(" 12 "), Some(12));
        assert_eq!(expand_count("Vote"), None);
        assert_eq!(expand_count(""), None);
    }

    #[test]
    fn parse_karma_strips_separators() {
        assert_eq!(parse_karma("312,355"), Some(312355));
        assert_eq!(parse_karma("3974"), Some(3974));
        assert_eq!(parse_karma("-12"), Some(-12));
        assert_eq!(parse_karma("n/a"), None);
    }

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  a \t b\n\nc "), "a b c");
    }
}
