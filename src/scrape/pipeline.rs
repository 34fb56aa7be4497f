// src/scrape/pipeline.rs

// Fan out one worker thread per candidate, gather outcomes in a shared
// append-only list, and stop as soon as the readiness check says the
// leading positions are settled. Stragglers are abandoned: their late
// appends land in a list nobody reads again.

use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use crate::config::consts::{GRACE_MS_PER_POST, POLL_INTERVAL_MS};
use crate::core::net::Fetch;
use crate::data::{Candidate, Outcome, PostRecord};
use crate::progress::Progress;
use crate::scrape::post;
use crate::scrape::ready::is_ready;

/// Scrape every candidate concurrently and return at most `needed` records
/// in original listing order. This never fails: a thin result means too
/// many candidates broke during extraction, and callers go by the count.
pub fn collect_posts(
    fetch: Arc<dyn Fetch>,
    candidates: Vec<Candidate>,
    needed: usize,
    progress: Option<&mut dyn Progress>,
) -> Vec<PostRecord> {
    collect_with(candidates, needed, progress, move |position, fragment| {
        post::parse_candidate(fetch.as_ref(), position, fragment)
    })
}

/// The engine behind `collect_posts`, generic over the per-candidate parse
/// so tests can drive it without the network.
pub fn collect_with<P>(
    candidates: Vec<Candidate>,
    needed: usize,
    mut progress: Option<&mut dyn Progress>,
    parse: P,
) -> Vec<PostRecord>
where
    P: Fn(usize, &str) -> Outcome + Send + Sync + 'static,
{
    let stop = candidates.len();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(stop);
        p.log("Start sending requests");
    }
    logf!("Start sending requests");

    let results: Arc<Mutex<Vec<Outcome>>> = Arc::new(Mutex::new(Vec::with_capacity(stop)));
    let parse = Arc::new(parse);

    for candidate in candidates {
        let results = Arc::clone(&results);
        let parse = Arc::clone(&parse);
        thread::spawn(move || {
            let outcome = parse(candidate.position, &candidate.html);
            lock(&results).push(outcome);
        });
    }

    // Let the first responses land before polling starts.
    thread::sleep(Duration::from_millis(GRACE_MS_PER_POST * needed as u64));

    loop {
        let (resolved, ready) = {
            let list = lock(&results);
            (list.len(), is_ready(&list, needed, stop))
        };
        if ready {
            break;
        }
        if let Some(p) = progress.as_deref_mut() {
            p.tick(resolved, stop);
        }
        thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
    }

    logf!("Stop sending requests");
    if let Some(p) = progress.as_deref_mut() {
        p.log("Stop sending requests");
    }

    let outcomes = std::mem::take(&mut *lock(&results));
    let records = assemble(outcomes, needed);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    records
}

/// Restore listing order, drop failures, cut to size.
pub fn assemble(mut outcomes: Vec<Outcome>, needed: usize) -> Vec<PostRecord> {
    outcomes.sort_by_key(Outcome::position);
    outcomes
        .into_iter()
        .filter_map(Outcome::into_record)
        .take(needed)
        .collect()
}

// A worker panicking mid-push poisons the mutex; take the data anyway.
fn lock<'a>(m: &'a Mutex<Vec<Outcome>>) -> MutexGuard<'a, Vec<Outcome>> {
    match m.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
