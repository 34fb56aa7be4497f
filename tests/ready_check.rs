// tests/ready_check.rs
//
// Readiness semantics over constructed, possibly out-of-order result lists.
//
use reddit_scrape::data::{Outcome, PostRecord};
use reddit_scrape::scrape::is_ready;

fn record(position: usize) -> PostRecord {
    PostRecord {
        unique_id: format!("{position:032x}"),
        post_url: format!("https://www.reddit.com/r/pics/comments/{position}/"),
        post_date: String::from("21.12.2020"),
        username: String::from("someone"),
        user_karma: 10,
        user_cake_day: String::from("07.08.2020"),
        post_karma: 5,
        comment_karma: 5,
        comments_number: 1,
        votes_number: 1,
        post_category: String::from("pics"),
    }
}

fn ok(position: usize) -> Outcome {
    Outcome::Parsed(position, record(position))
}

fn failed(position: usize) -> Outcome {
    Outcome::Failed(position)
}

#[test]
fn ordered_prefix_scenarios_with_an_unreachable_cap() {
    let list: Vec<Outcome> = (0..6).map(ok).collect();

    assert!(is_ready(&list[..1], 1, 10));
    assert!(!is_ready(&list[..1], 2, 10));
    assert!(is_ready(&list[..4], 2, 10));
    // A gapless all-success prefix longer than needed is already settled
    assert!(is_ready(&list[..4], 3, 10));
    assert!(is_ready(&list, 3, 10));
}

#[test]
fn missing_middle_position_blocks_longer_prefixes() {
    // Position 2 never resolves
    let list = vec![ok(0), ok(1), ok(3), ok(4)];

    // Positions 0,1 form a valid gapless prefix of two
    assert!(is_ready(&list[..3], 2, 10));
    // But no gapless prefix of three can exist without position 2
    assert!(!is_ready(&list[..3], 3, 10));
    assert!(!is_ready(&list, 3, 10));
}

#[test]
fn reaching_the_cap_is_always_ready() {
    let list = vec![failed(0), ok(2), failed(1)];
    // Every candidate resolved: ready regardless of content or order
    assert!(is_ready(&list, 5, 3));
    assert!(is_ready(&list, 1, 3));
}

#[test]
fn a_zero_cap_is_always_ready() {
    assert!(is_ready(&[], 3, 0));
    let list = vec![ok(0), failed(1)];
    assert!(is_ready(&list, 100, 0));
}

#[test]
fn an_unresolved_position_zero_blocks_everything() {
    let list = vec![ok(1), ok(2), ok(3), ok(4)];
    for needed in 1..=4 {
        assert!(!is_ready(&list, needed, 10), "needed={needed}");
    }
    // And asking for more than has arrived is never ready either
    assert!(!is_ready(&list, 5, 10));
}

#[test]
fn failures_count_toward_the_settled_prefix() {
    // needed=2: failure at 1 means the prefix must stretch to position 2
    let list = vec![ok(0), failed(1)];
    assert!(!is_ready(&list, 2, 10));
    let list = vec![ok(0), failed(1), ok(2)];
    assert!(is_ready(&list, 2, 10));
}

struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

#[test]
fn readiness_never_retracts_as_outcomes_arrive() {
    for seed in 1..=25u64 {
        let mut rng = XorShift(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let total = 12usize;

        // Random arrival order over all positions
        let mut arrival: Vec<usize> = (0..total).collect();
        for i in (1..total).rev() {
            let j = (rng.next() % (i as u64 + 1)) as usize;
            arrival.swap(i, j);
        }
        // Roughly a quarter of the candidates fail extraction
        let outcomes: Vec<Outcome> = (0..total)
            .map(|p| if rng.next() % 4 == 0 { failed(p) } else { ok(p) })
            .collect();

        for needed in [1usize, 3, 5, 8] {
            let mut list: Vec<Outcome> = Vec::new();
            let mut was_ready = false;
            for &p in &arrival {
                list.push(outcomes[p].clone());
                let now = is_ready(&list, needed, total);
                assert!(
                    !was_ready || now,
                    "readiness retracted (seed {seed}, needed {needed}, len {})",
                    list.len()
                );
                was_ready = was_ready || now;
            }
            // The cap guarantees readiness once everything has resolved
            assert!(was_ready, "never became ready (seed {seed}, needed {needed})");
        }
    }
}
