// benches/ready.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

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

// Shuffled arrival order (7919 is coprime to the sizes used below) with a
// failure every seventh position, roughly a real run's shape.
fn build_result_set(total: usize) -> Vec<Outcome> {
    (0..total)
        .map(|i| (i * 7919) % total)
        .map(|p| {
            if p % 7 == 0 {
                Outcome::Failed(p)
            } else {
                Outcome::Parsed(p, record(p))
            }
        })
        .collect()
}

fn bench_ready(c: &mut Criterion) {
    let rs = build_result_set(150);

    c.bench_function("ready_full_set", |b| {
        b.iter(|| black_box(is_ready(black_box(&rs), 100, 200)))
    });

    let partial = &rs[..90];
    c.bench_function("ready_partial_set", |b| {
        b.iter(|| black_box(is_ready(black_box(partial), 100, 200)))
    });
}

criterion_group!(benches, bench_ready);
criterion_main!(benches);
