// src/scrape/listing.rs

// Slices the listing page into per-post HTML fragments. The listing
// renders each post as one container div tagged with a generated class;
// each fragment keeps its slice index as the original position. The slice
// is oversampled relative to the requested count because some fragments
// will fail extraction downstream.

use std::error::Error;

use crate::config::consts::OVERSAMPLE_CAP;
use crate::core::html::next_balanced_tag_with_class;
use crate::core::net::Fetch;
use crate::data::Candidate;

const POST_BLOCK_CLASS: &str = "_1oQyIsiPHYt6nx7VOmd1sz";

/// Fetch the listing page once and slice out up to `needed * OVERSAMPLE_CAP`
/// candidate fragments.
pub fn fetch_candidates(
    fetch: &dyn Fetch,
    url: &str,
    needed: usize,
) -> Result<Vec<Candidate>, Box<dyn Error>> {
    let page = fetch.fetch(url)?;
    Ok(slice_candidates(&page, needed))
}

/// Pure slicing half, separated for tests.
pub fn slice_candidates(page: &str, needed: usize) -> Vec<Candidate> {
    let cap = needed.saturating_mul(OVERSAMPLE_CAP);
    let mut out = Vec::new();
    let mut pos = 0usize;
    while out.len() < cap {
        let Some((start, end)) = next_balanced_tag_with_class(page, "div", POST_BLOCK_CLASS, pos)
        else {
            break;
        };
        out.push(Candidate { position: out.len(), html: s!(&page[start..end]) });
        pos = end;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(posts: usize) -> String {
        let mut page = s!(r#"<html><div class="rpBJOHq2PR60pnwJlUyP0">"#);
        for i in 0..posts {
            page.push_str(&format!(
                r#"<div class="{POST_BLOCK_CLASS}"><div class="inner">post {i}</div></div>"#
            ));
        }
        page.push_str("</div></html>");
        page
    }

    #[test]
    fn slices_keep_index_order_and_full_nesting() {
        let page = listing(3);
        let candidates = slice_candidates(&page, 5);
        assert_eq!(candidates.len(), 3);
        for (i, c) in candidates.iter().enumerate() {
            assert_eq!(c.position, i);
            assert!(c.html.contains(&format!("post {i}")));
            // The whole container survived, nested div included
            assert!(c.html.ends_with("</div></div>"));
        }
    }

    #[test]
    fn oversample_cap_bounds_the_slice() {
        let page = listing(10);
        let candidates = slice_candidates(&page, 3);
        assert_eq!(candidates.len(), 6);
        assert_eq!(candidates.last().unwrap().position, 5);
    }

    #[test]
    fn page_without_post_blocks_yields_nothing() {
        let candidates = slice_candidates("<html><div class=\"other\">x</div></html>", 5);
        assert!(candidates.is_empty());
    }
}
