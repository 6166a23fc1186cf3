use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::model::MovieRecord;

use super::{FAVORITES_FILE, HISTORY_FILE};

/// What was found on disk when a store was read.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreContents {
    /// The file does not exist yet.
    Missing,
    /// The file exists but is not a JSON array of objects.
    Malformed(String),
    Records(Vec<MovieRecord>),
}

impl StoreContents {
    /// Missing and malformed files both count as an empty store.
    pub fn into_records(self) -> Vec<MovieRecord> {
        match self {
            Self::Records(records) => records,
            Self::Missing | Self::Malformed(_) => Vec::new(),
        }
    }
}

/// Result of [`RecordStore::append`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Added,
    /// A record with the same imdbID is already stored.
    Duplicate,
    /// The record has no title and was not stored.
    Untitled,
}

/// A JSON array of [`MovieRecord`]s kept in a single file.
///
/// Records are unique by imdbID and kept in insertion order. The file is
/// pretty-printed with a four-space indent.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The search history inside `data_dir`.
    pub fn history(data_dir: &Path) -> Self {
        Self::at_path(data_dir.join(HISTORY_FILE))
    }

    /// The favorite movies inside `data_dir`.
    pub fn favorites(data_dir: &Path) -> Self {
        Self::at_path(data_dir.join(FAVORITES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file and report what it holds.
    ///
    /// A missing file and unparsable content are reported as values; only
    /// other I/O failures (permissions, a directory in the way, ...) are
    /// errors.
    pub fn inspect(&self) -> Result<StoreContents> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(StoreContents::Missing),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Ok(StoreContents::Malformed(e.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(match serde_json::from_str::<Vec<MovieRecord>>(&raw) {
            Ok(records) => StoreContents::Records(records),
            Err(e) => StoreContents::Malformed(e.to_string()),
        })
    }

    /// All stored records. Never fails: anything unreadable is an empty store.
    pub fn load(&self) -> Vec<MovieRecord> {
        match self.inspect() {
            Ok(StoreContents::Malformed(reason)) => {
                log::warn!(
                    "Ignoring malformed store {}: {}",
                    self.path.display(),
                    reason
                );
                Vec::new()
            }
            Ok(contents) => contents.into_records(),
            Err(e) => {
                log::warn!("Failed to read store {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.load().is_empty()
    }

    /// Append a record unless it is untitled or its imdbID is already stored.
    pub fn append(&self, record: MovieRecord) -> Result<AppendOutcome> {
        if !record.has_title() {
            return Ok(AppendOutcome::Untitled);
        }

        let mut records = self.inspect()?.into_records();
        if records.iter().any(|r| r.imdb_id == record.imdb_id) {
            return Ok(AppendOutcome::Duplicate);
        }

        records.push(record);
        self.write(&records)?;
        Ok(AppendOutcome::Added)
    }

    /// Remove every record whose trimmed, lowercased title equals `title`
    /// trimmed and lowercased. Returns whether anything was removed.
    pub fn remove_by_title(&self, title: &str) -> Result<bool> {
        let wanted = title.trim().to_lowercase();
        let records = self.inspect()?.into_records();
        let before = records.len();

        let kept: Vec<MovieRecord> = records
            .into_iter()
            .filter(|r| r.title_key() != wanted)
            .collect();

        if kept.len() == before {
            return Ok(false);
        }

        self.write(&kept)?;
        log::info!(
            "Removed {} record(s) titled '{}' from {}",
            before - kept.len(),
            wanted,
            self.path.display()
        );
        Ok(true)
    }

    /// Overwrite the store with an empty array.
    pub fn clear(&self) -> Result<()> {
        self.write(&[])
    }

    fn write(&self, records: &[MovieRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        records.serialize(&mut ser)?;
        fs::write(&self.path, buf)?;
        Ok(())
    }
}
