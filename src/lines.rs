// src/lines.rs

// The archive's line format: one record per line, fields joined by ';' in
// a fixed order. Order matters: the first field is the 32-char unique id
// the store keys on.

use crate::config::consts::FIELD_SEP;
use crate::core::ids::is_unique_id;
use crate::data::PostRecord;

pub const FIELD_COUNT: usize = 11;

pub fn to_line(r: &PostRecord) -> String {
    let sep = s!(FIELD_SEP);
    [
        r.unique_id.clone(),
        r.post_url.clone(),
        r.username.clone(),
        r.user_karma.to_string(),
        r.user_cake_day.clone(),
        r.post_karma.to_string(),
        r.comment_karma.to_string(),
        r.post_date.clone(),
        r.comments_number.to_string(),
        r.votes_number.to_string(),
        r.post_category.clone(),
    ]
    .join(&sep)
}

pub fn parse_line(line: &str) -> Option<PostRecord> {
    let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(FIELD_SEP).collect();
    if fields.len() != FIELD_COUNT || !is_unique_id(fields[0]) {
        return None;
    }
    Some(PostRecord {
        unique_id: s!(fields[0]),
        post_url: s!(fields[1]),
        username: s!(fields[2]),
        user_karma: fields[3].parse().ok()?,
        user_cake_day: s!(fields[4]),
        post_karma: fields[5].parse().ok()?,
        comment_karma: fields[6].parse().ok()?,
        post_date: s!(fields[7]),
        comments_number: fields[8].parse().ok()?,
        votes_number: fields[9].parse().ok()?,
        post_category: s!(fields[10]),
    })
}
