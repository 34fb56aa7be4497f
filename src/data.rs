// src/data.rs
//
// Data types for one scrape run.
//
// - Candidate: a sliced listing fragment plus its original position.
// - PostRecord: the eleven-field archived post.
// - Outcome: what one worker produced for one candidate. Failures carry
//   only the position; nothing partial survives a failed extraction.
// - ParseError: the structural reason a candidate was dropped.

use std::error::Error;
use std::fmt;

/// One unit of scraping work: an HTML fragment sliced out of the listing
/// page, tagged with its zero-based index in the oversampled slice.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub position: usize,
    pub html: String,
}

/// One archived post. Everything but `unique_id` is derived from page text;
/// dates are kept day-first ("21.12.2020") as strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostRecord {
    pub unique_id: String,
    pub post_url: String,
    pub post_date: String,
    pub username: String,
    pub user_karma: i64,
    pub user_cake_day: String,
    pub post_karma: i64,
    pub comment_karma: i64,
    pub comments_number: u64,
    pub votes_number: u64,
    pub post_category: String,
}

/// Per-candidate result, position tagged on both variants so the collected
/// list can be sorted and counted uniformly.
#[derive(Clone, Debug)]
pub enum Outcome {
    Parsed(usize, PostRecord),
    Failed(usize),
}

impl Outcome {
    pub fn position(&self) -> usize {
        match self {
            Outcome::Parsed(p, _) | Outcome::Failed(p) => *p,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    pub fn into_record(self) -> Option<PostRecord> {
        match self {
            Outcome::Parsed(_, record) => Some(record),
            Outcome::Failed(_) => None,
        }
    }
}

/// Why one candidate's extraction stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The url/date anchor is missing from the fragment.
    MissingPostAnchor,
    /// No username anchor: the author account is deleted.
    DeletedUser,
    /// The old-variant profile page carries no karma markers
    /// (age-restricted or otherwise private).
    PrivateProfile,
    /// A profile page could not be fetched for a non-network reason.
    FetchFailed(String),
    /// A later marker (comments/votes/category/karma slot) is absent.
    MissingMarker(&'static str),
    /// A count, karma or date string would not normalize.
    Malformed(String),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingPostAnchor => write!(f, "Parser index error"),
            ParseErrorKind::DeletedUser => write!(f, "User doesn't exist"),
            ParseErrorKind::PrivateProfile => write!(f, "Page inaccessible to minors"),
            ParseErrorKind::FetchFailed(what) => write!(f, "Profile fetch failed: {what}"),
            ParseErrorKind::MissingMarker(what) => write!(f, "No {what} marker found"),
            ParseErrorKind::Malformed(text) => write!(f, "Malformed value: {text}"),
        }
    }
}

/// Structural failure for one candidate. The post URL is attached once
/// known so the run log can point at the page that broke.
#[derive(Clone, Debug)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
    pub post_url: Option<String>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position, post_url: None }
    }

    pub fn with_url(kind: ParseErrorKind, position: usize, post_url: &str) -> Self {
        Self { kind, position, post_url: Some(s!(post_url)) }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, position {}", self.kind, self.position)?;
        if let Some(url) = &self.post_url {
            write!(f, ", post URL: {url}")?;
        }
        Ok(())
    }
}

impl Error for ParseError {}
