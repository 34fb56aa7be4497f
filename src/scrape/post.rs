// src/scrape/post.rs

// Turns one candidate fragment into one archived record. Extraction runs as a fixed
// sequence of steps; the first missing marker aborts the whole candidate,
// and a failed candidate keeps nothing but its position.

use crate::config::consts::{NEW_SITE, OLD_SITE};
use crate::core::dates::{date_from_time_lapse, date_from_words};
use crate::core::html::{attr_value, inner_text, tag_blocks_with_class};
use crate::core::ids::new_unique_id;
use crate::core::net::Fetch;
use crate::core::sanitize::{expand_count, parse_karma};
use crate::data::{Outcome, ParseError, ParseErrorKind, PostRecord};

// Generated class markers the site tags post data with. Brittle by nature:
// a site redesign regenerates all of them.
const POST_ANCHOR_CLASS: &str = "_3jOxDPIQ0KaOWpzvSQo-1s";
const USERNAME_CLASS: &str = "_2tbHP6ZydRpjI44J3syuqC";
const CATEGORY_CLASS: &str = "_3ryJoIoycVkA88fy40qNJc";
const COMMENTS_CLASS: &str = "D6SuXeSnAAagG8dKAb4O4";
const COMMENTS_FALLBACK_CLASS: &str = "FHCV02u6Cp2zYL0fhQPsO";
const VOTES_CLASS: &str = "_1rZYMD_4xY3gRcSS3p8ODO";
const PROFILE_KARMA_CLASS: &str = "karma";
const PROFILE_KARMA_CAKE_CLASS: &str = "_1hNyZSklmcC7R_IfCUcXmZ";

/// Run the full extraction for one candidate and fold the result into an
/// Outcome, logging the failure reason the way the run log expects.
pub fn parse_candidate(fetch: &dyn Fetch, position: usize, fragment: &str) -> Outcome {
    match parse(fetch, position, fragment) {
        Ok(record) => Outcome::Parsed(position, record),
        Err(err) => {
            loge!("{err}");
            Outcome::Failed(position)
        }
    }
}

/// The sequential extraction itself. Steps run strictly in order and any
/// failure short-circuits the rest.
pub fn parse(fetch: &dyn Fetch, position: usize, fragment: &str) -> Result<PostRecord, ParseError> {
    let (post_url, post_date) = extract_url_and_date(fragment, position)?;
    let author = extract_author(fragment, position, &post_url)?;
    let profile = fetch_profile(fetch, &author.profile_path, position, &post_url)?;
    let comments_number = extract_comments_number(fragment, position, &post_url)?;
    let votes_number = extract_votes_number(fragment, position, &post_url)?;
    let post_category = extract_category(fragment, position, &post_url)?;

    Ok(PostRecord {
        unique_id: new_unique_id(),
        post_url,
        post_date,
        username: author.username,
        user_karma: profile.user_karma,
        user_cake_day: profile.user_cake_day,
        post_karma: profile.post_karma,
        comment_karma: profile.comment_karma,
        comments_number,
        votes_number,
        post_category,
    })
}

/* ---------- steps ---------- */

fn extract_url_and_date(fragment: &str, position: usize) -> Result<(String, String), ParseError> {
    let anchors = tag_blocks_with_class(fragment, "a", POST_ANCHOR_CLASS);
    let anchor = anchors
        .first()
        .ok_or_else(|| ParseError::new(ParseErrorKind::MissingPostAnchor, position))?;
    let post_url = attr_value(anchor, "href")
        .ok_or_else(|| ParseError::new(ParseErrorKind::MissingPostAnchor, position))?;
    let lapse = inner_text(anchor);
    let post_date = date_from_time_lapse(&lapse).ok_or_else(|| {
        ParseError::with_url(ParseErrorKind::Malformed(lapse.clone()), position, &post_url)
    })?;
    Ok((post_url, post_date))
}

struct Author {
    username: String,
    profile_path: String,
}

fn extract_author(fragment: &str, position: usize, post_url: &str) -> Result<Author, ParseError> {
    let anchors = tag_blocks_with_class(fragment, "a", USERNAME_CLASS);
    let anchor = anchors
        .first()
        .ok_or_else(|| ParseError::with_url(ParseErrorKind::DeletedUser, position, post_url))?;
    // Rendered as "u/<name>"; drop the prefix.
    let text = inner_text(anchor);
    let username = s!(text.get(2..).unwrap_or(""));
    let profile_path = attr_value(anchor, "href")
        .ok_or_else(|| ParseError::with_url(ParseErrorKind::DeletedUser, position, post_url))?;
    Ok(Author { username, profile_path })
}

struct Profile {
    post_karma: i64,
    comment_karma: i64,
    user_karma: i64,
    user_cake_day: String,
}

fn fetch_profile(
    fetch: &dyn Fetch,
    profile_path: &str,
    position: usize,
    post_url: &str,
) -> Result<Profile, ParseError> {
    // Two page variants, fetched in sequence: the old one exposes post and
    // comment karma, the new one the user's total karma and cake day.
    let old_url = join!(OLD_SITE, profile_path);
    let new_url = join!(NEW_SITE, profile_path);
    let old_page = fetch.fetch(&old_url).map_err(|e| {
        ParseError::with_url(ParseErrorKind::FetchFailed(e.to_string()), position, post_url)
    })?;
    let new_page = fetch.fetch(&new_url).map_err(|e| {
        ParseError::with_url(ParseErrorKind::FetchFailed(e.to_string()), position, post_url)
    })?;

    let karma_tags = tag_blocks_with_class(&old_page, "span", PROFILE_KARMA_CLASS);
    if karma_tags.is_empty() {
        return Err(ParseError::with_url(ParseErrorKind::PrivateProfile, position, post_url));
    }
    let cake_tags = tag_blocks_with_class(&new_page, "span", PROFILE_KARMA_CAKE_CLASS);

    let slot = |tags: &[&str], i: usize, what: &'static str| -> Result<String, ParseError> {
        tags.get(i)
            .map(|b| inner_text(b))
            .ok_or_else(|| ParseError::with_url(ParseErrorKind::MissingMarker(what), position, post_url))
    };
    let malformed = |text: String| {
        ParseError::with_url(ParseErrorKind::Malformed(text), position, post_url)
    };

    let post_karma_raw = slot(&karma_tags, 0, "post karma")?;
    let comment_karma_raw = slot(&karma_tags, 1, "comment karma")?;
    let user_karma_raw = slot(&cake_tags, 0, "user karma")?;
    let cake_day_raw = slot(&cake_tags, 1, "cake day")?;

    let post_karma = parse_karma(&post_karma_raw).ok_or_else(|| malformed(post_karma_raw.clone()))?;
    let comment_karma =
        parse_karma(&comment_karma_raw).ok_or_else(|| malformed(comment_karma_raw.clone()))?;
    let user_karma = parse_karma(&user_karma_raw).ok_or_else(|| malformed(user_karma_raw.clone()))?;
    let user_cake_day =
        date_from_words(&cake_day_raw).ok_or_else(|| malformed(cake_day_raw.clone()))?;

    Ok(Profile { post_karma, comment_karma, user_karma, user_cake_day })
}

fn extract_comments_number(
    fragment: &str,
    position: usize,
    post_url: &str,
) -> Result<u64, ParseError> {
    let primary = tag_blocks_with_class(fragment, "span", COMMENTS_CLASS);
    let raw = if let Some(block) = primary.first() {
        inner_text(block)
    } else {
        let fallback = tag_blocks_with_class(fragment, "span", COMMENTS_FALLBACK_CLASS);
        let block = fallback.first().ok_or_else(|| {
            ParseError::with_url(ParseErrorKind::MissingMarker("comments"), position, post_url)
        })?;
        // "1.4k Comments" form: keep the token before the first space.
        let text = inner_text(block);
        match text.find(' ') {
            Some(i) => s!(&text[..i]),
            None => text,
        }
    };
    expand_count(&raw)
        .ok_or_else(|| ParseError::with_url(ParseErrorKind::Malformed(raw), position, post_url))
}

fn extract_votes_number(fragment: &str, position: usize, post_url: &str) -> Result<u64, ParseError> {
    // The first match is the collapsed-toolbar double; the visible count
    // sits at the second.
    let blocks = tag_blocks_with_class(fragment, "div", VOTES_CLASS);
    let block = blocks.get(1).ok_or_else(|| {
        ParseError::with_url(ParseErrorKind::MissingMarker("votes"), position, post_url)
    })?;
    let raw = inner_text(block);
    expand_count(&raw)
        .ok_or_else(|| ParseError::with_url(ParseErrorKind::Malformed(raw), position, post_url))
}

fn extract_category(fragment: &str, position: usize, post_url: &str) -> Result<String, ParseError> {
    let anchors = tag_blocks_with_class(fragment, "a", CATEGORY_CLASS);
    let block = anchors.get(1).ok_or_else(|| {
        ParseError::with_url(ParseErrorKind::MissingMarker("category"), position, post_url)
    })?;
    // Rendered as "r/<category>"; drop the prefix.
    let text = inner_text(block);
    Ok(s!(text.get(2..).unwrap_or("")))
}
