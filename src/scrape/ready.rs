// src/scrape/ready.rs

// Decides, from whatever outcomes have arrived so far, whether a scrape run
// may stop waiting. Workers finish in arbitrary order, so readiness means:
// a gapless prefix of positions has resolved, and discounting the failures
// inside it leaves the needed number of successes already settled. Pure;
// callable repeatedly while the list grows.

use crate::data::Outcome;

/// `stop` is the hard cap: the total number of candidates in flight. Once
/// every one of them has resolved there is nothing left to wait for, no
/// matter what the entries look like.
pub fn is_ready(results: &[Outcome], needed: usize, stop: usize) -> bool {
    if results.len() == stop || stop == 0 {
        return true;
    }
    if results.len() < needed || results.is_empty() {
        return false;
    }
    if needed == 0 {
        return true;
    }

    // Sorted snapshot; the live list keeps arrival order.
    let mut sorted: Vec<&Outcome> = results.iter().collect();
    sorted.sort_by_key(|o| o.position());

    // The first `needed` slots must form a gapless prefix from position 0.
    // Positions are unique, so the last slot matching is enough.
    let window = &sorted[..needed];
    if window[needed - 1].position() != needed - 1 {
        return false;
    }
    let mut unsuitable = window.iter().filter(|o| o.is_failed()).count();
    if needed + unsuitable == window.len() {
        return true;
    }

    // Walk the tail: each failure extends the settled prefix and frees a
    // replacement slot; a position ahead of its slot is a candidate that
    // has not resolved yet and the scan skips past it.
    for (slot, outcome) in sorted.iter().enumerate().skip(needed) {
        if outcome.position() != slot {
            continue;
        }
        if outcome.is_failed() {
            unsuitable += 1;
            continue;
        }
        if needed + unsuitable == slot + 1 {
            return true;
        }
    }
    false
}
