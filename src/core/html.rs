// src/core/html.rs

// Class-marker scanning over raw HTML text. The site tags post data with
// generated class names, so lookups are "tag + class token" pairs resolved
// by plain substring scanning, no DOM. Leaf tags (<a>, <span>) use naive
// first-close matching; container <div>s nest, so those get the balanced
// variant.

use crate::core::sanitize::normalize_entities;

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Locate the next `<tag ...>` whose attribute text contains `class_token`.
/// Returns (tag start, first byte after the `>` of the open tag).
fn next_open_with_class(
    s: &str,
    lc: &str,
    tag: &str,
    class_token: &str,
    from: usize,
) -> Option<(usize, usize)> {
    let open = join!("<", &to_lower(tag));
    let mut at = from;
    loop {
        let start = lc.get(at..)?.find(&open)? + at;
        // Tag-name boundary: "<a" must not match "<abbr".
        let boundary = s.as_bytes().get(start + open.len()).copied();
        if !matches!(boundary, Some(b' ' | b'\t' | b'\r' | b'\n' | b'>' | b'/')) {
            at = start + 1;
            continue;
        }
        let open_end = s[start..].find('>')? + start + 1;
        if s[start..open_end].contains(class_token) {
            return Some((start, open_end));
        }
        at = open_end;
    }
}

/// Next `<tag ...>`..`</tag>` block whose open tag carries `class_token`.
/// First-close matching; fine for leaf tags that don't nest.
pub fn next_tag_with_class(
    s: &str,
    tag: &str,
    class_token: &str,
    from: usize,
) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let (start, open_end) = next_open_with_class(s, &lc, tag, class_token, from)?;
    let close = join!("</", &to_lower(tag), ">");
    let end_rel = lc[open_end..].find(&close)?;
    Some((start, open_end + end_rel + close.len()))
}

/// Same, but close-tag matching keeps a nesting depth so a container block
/// runs to its own close tag, not the first nested one.
pub fn next_balanced_tag_with_class(
    s: &str,
    tag: &str,
    class_token: &str,
    from: usize,
) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let (start, open_end) = next_open_with_class(s, &lc, tag, class_token, from)?;
    if s[start..open_end].ends_with("/>") {
        return Some((start, open_end));
    }
    let open = join!("<", &to_lower(tag));
    let close = join!("</", &to_lower(tag), ">");

    let mut depth = 1usize;
    let mut cursor = open_end;
    loop {
        let next_open = find_open_at_boundary(s, &lc, &open, cursor);
        let next_close = lc[cursor..].find(&close).map(|i| i + cursor);
        match (next_open, next_close) {
            (Some(o), Some(c)) if o < c => {
                let o_end = s[o..].find('>')? + o + 1;
                if !s[o..o_end].ends_with("/>") {
                    depth += 1;
                }
                cursor = o_end;
            }
            (_, Some(c)) => {
                depth -= 1;
                cursor = c + close.len();
                if depth == 0 {
                    return Some((start, cursor));
                }
            }
            _ => return None,
        }
    }
}

fn find_open_at_boundary(s: &str, lc: &str, open: &str, from: usize) -> Option<usize> {
    let mut at = from;
    loop {
        let idx = lc.get(at..)?.find(open)? + at;
        let boundary = s.as_bytes().get(idx + open.len()).copied();
        if matches!(boundary, Some(b' ' | b'\t' | b'\r' | b'\n' | b'>' | b'/')) {
            return Some(idx);
        }
        at = idx + 1;
    }
}

/// All blocks for a tag/class pair, in document order.
pub fn tag_blocks_with_class<'a>(s: &'a str, tag: &str, class_token: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((a, b)) = next_tag_with_class(s, tag, class_token, pos) {
        out.push(&s[a..b]);
        pos = b;
    }
    out
}

/// Value of a quoted attribute inside the block's open tag.
pub fn attr_value(block: &str, name: &str) -> Option<String> {
    let open_end = block.find('>')?;
    let header = &block[..open_end];
    for quote in ['"', '\''] {
        let key = format!("{name}={quote}");
        if let Some(at) = header.find(&key) {
            let rest = &header[at + key.len()..];
            let end = rest.find(quote)?;
            return Some(s!(&rest[..end]));
        }
    }
    None
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return s!(&block[oe + 1..cs]);
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Visible text of a block: inner markup stripped, entities and whitespace
/// normalized.
pub fn inner_text(block: &str) -> String {
    strip_tags(normalize_entities(&inner_after_open_tag(block)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_block_by_class_token() {
        let doc = r#"<p>x</p><span class="a b karma c">42</span><span>no</span>"#;
        let (a, b) = next_tag_with_class(doc, "span", "karma", 0).unwrap();
        assert_eq!(&doc[a..b], r#"<span class="a b karma c">42</span>"#);
    }

    #[test]
    fn tag_name_boundary_respected() {
        // "<a" must not match "<abbr"
        let doc = r#"<abbr class="x">n</abbr><a class="x" href="/u/">u/name</a>"#;
        let blocks = tag_blocks_with_class(doc, "a", "x");
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].starts_with("<a "));
    }

    #[test]
    fn collects_all_blocks_in_order(){
        let doc = r#"<div class="v">1</div><div class="w">x</div><div class="v">2</div>"#;
        let blocks = tag_blocks_with_class(doc, "div", r#"class="v""#);
        assert_eq!(blocks.len(), 2);
        assert_eq!(inner_text(blocks[0]), "1");
        assert_eq!(inner_text(blocks[1]), "2");
    }

    #[test]
    fn balanced_block_spans_nested_divs() {
        let doc = r#"<div class="post"><div>inner</div><span>tail</span></div><div class="post">2</div>"#;
        let (a, b) = next_balanced_tag_with_class(doc, "div", r#"class="post""#, 0).unwrap();
        assert_eq!(
            &doc[a..b],
            r#"<div class="post"><div>inner</div><span>tail</span></div>"#
        );
        // And the scan resumes cleanly after it
        let (c, d) = next_balanced_tag_with_class(doc, "div", r#"class="post""#, b).unwrap();
        assert_eq!(&doc[c..d], r#"<div class="post">2</div>"#);
    }

    #[test]
    fn attr_value_reads_quoted_href() {
        let block = r#"<a class="y" href="/user/Tim/">u/Tim</a>"#;
        assert_eq!(attr_value(block, "href").as_deref(), Some("/user/Tim/"));
        assert_eq!(attr_value(block, "title"), None);
    }

    #[test]
    fn inner_text_strips_markup_and_entities() {
        let block = "<a href=\"x\"><b>7 days</b>&nbsp;ago</a>";
        assert_eq!(inner_text(block), "7 days ago");
    }
}
