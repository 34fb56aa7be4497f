// src/config/consts.rs

// Net config
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.9; rv:45.0) Gecko/20100101 Firefox/45.0";
pub const REQUEST_TIMEOUT_SECS: u64 = 5;
pub const RETRY_PAUSE_SECS: u64 = 1;

// Site variants. Post and comment karma are only rendered on the old
// variant's profile page; total karma and cake day only on the new one.
pub const OLD_SITE: &str = "https://old.reddit.com";
pub const NEW_SITE: &str = "https://www.reddit.com";
pub const DEFAULT_LISTING_URL: &str = "https://www.reddit.com/top/?t=month";

// Scrape
pub const DEFAULT_POSTS_COUNT: usize = 100;
// The listing slice keeps at most needed * cap fragments; some of them
// will fail extraction (deleted users, private profiles).
pub const OVERSAMPLE_CAP: usize = 2;

// Pipeline polling
pub const GRACE_MS_PER_POST: u64 = 50;
pub const POLL_INTERVAL_MS: u64 = 250;

// Archive
pub const ARCHIVE_PREFIX: &str = "reddit-";
pub const ARCHIVE_EXT: &str = "txt";
pub const FIELD_SEP: char = ';';
pub const UNIQUE_ID_LEN: usize = 32;
