// src/file.rs

// Archive output. One run produces one `reddit-<YYYYMMDDHHMM>.txt` in the
// target directory, and the previous run's file is removed first so the
// directory always holds a single current archive.

use std::error::Error;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::consts::{ARCHIVE_EXT, ARCHIVE_PREFIX};
use crate::data::PostRecord;
use crate::lines::to_line;

/// Where a finished scrape run hands its records.
pub trait Sink {
    fn persist(&self, records: &[PostRecord]) -> Result<(), Box<dyn Error>>;
}

pub struct FileSink {
    out_dir: PathBuf,
}

impl FileSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into() }
    }

    /// Timestamped file name for a run starting now.
    pub fn archive_filename() -> String {
        let stamp = Local::now().format("%Y%m%d%H%M").to_string();
        join!(ARCHIVE_PREFIX, &stamp, ".", ARCHIVE_EXT)
    }

    /// Write the records, replacing any previous archive in the directory.
    /// No trailing newline after the last record.
    pub fn write_archive(&self, records: &[PostRecord]) -> Result<PathBuf, Box<dyn Error>> {
        ensure_directory(&self.out_dir)?;
        if let Some(old) = crate::store::locate_archive(&self.out_dir) {
            fs::remove_file(old)?;
        }

        let path = self.out_dir.join(Self::archive_filename());
        let file = fs::File::create(&path)?;
        let mut out = BufWriter::new(file);
        for (i, record) in records.iter().enumerate() {
            if i + 1 == records.len() {
                write!(out, "{}", to_line(record))?;
            } else {
                writeln!(out, "{}", to_line(record))?;
            }
        }
        out.flush()?;

        logf!("Archive written: {}", path.display());
        Ok(path)
    }
}

impl Sink for FileSink {
    fn persist(&self, records: &[PostRecord]) -> Result<(), Box<dyn Error>> {
        self.write_archive(records).map(|_| ())
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
