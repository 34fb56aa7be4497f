// src/scrape/mod.rs
mod listing;
mod pipeline;
mod post;
mod ready;

pub use listing::{fetch_candidates, slice_candidates};
pub use pipeline::{assemble, collect_posts, collect_with};
pub use post::{parse, parse_candidate};
pub use ready::is_ready;

use std::error::Error;
use std::sync::Arc;

use crate::config::options::ScrapeOptions;
use crate::core::net::Fetch;
use crate::file::Sink;
use crate::progress::Progress;

/// Top-level: slice the listing, run the pipeline, hand the records to the
/// sink. Returns how many records were
/// archived; fewer than `opts.posts_count` means that many candidates
/// failed extraction, which callers treat as a thin result, not an error.
pub fn run(
    opts: &ScrapeOptions,
    fetch: Arc<dyn Fetch>,
    sink: &dyn Sink,
    mut progress: Option<&mut dyn Progress>,
) -> Result<usize, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Loading listing page...");
    }
    logf!("Start loading listing page");
    let candidates = listing::fetch_candidates(fetch.as_ref(), &opts.listing_url, opts.posts_count)?;
    logf!("Stop loading listing page, {} candidates", candidates.len());

    let records = pipeline::collect_posts(fetch, candidates, opts.posts_count, progress);

    sink.persist(&records)?;
    Ok(records.len())
}
