// src/store.rs

// Read side of the flat-file archive: find the current file, load it back
// into records, and answer the id lookups the maintenance paths need.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::consts::ARCHIVE_PREFIX;
use crate::data::PostRecord;
use crate::lines::parse_line;

/// First file in `dir` whose name carries the archive prefix.
pub fn locate_archive(dir: &Path) -> Option<PathBuf> {
    for entry in fs::read_dir(dir).ok()?.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = match path.file_name() {
            Some(n) => n.to_string_lossy().into_owned(),
            None => continue,
        };
        if name.contains(ARCHIVE_PREFIX) {
            return Some(path);
        }
    }
    None
}

/// Load every well-formed line; bad lines are skipped with a log note.
pub fn load_archive(path: &Path) -> Result<Vec<PostRecord>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let mut records = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(record) => records.push(record),
            None => logd!("Skipping malformed archive line: {line}"),
        }
    }
    Ok(records)
}

/// Index of the record carrying this id, if any.
pub fn find_by_id(records: &[PostRecord], unique_id: &str) -> Option<usize> {
    records.iter().position(|r| r.unique_id == unique_id)
}

/// True when no stored record carries this id yet.
pub fn is_new_id(records: &[PostRecord], unique_id: &str) -> bool {
    find_by_id(records, unique_id).is_none()
}
