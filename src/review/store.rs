//! Durable storage of the review set.
//!
//! The set lives in one named record holding a JSON array of item ids. A
//! missing or unreadable record reads as an empty set; callers never see a
//! malformed record as an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::ReviewSet;

/// Default record name.
pub const DEFAULT_KEY: &str = "checked-questions";

/// Storage backend for the review set.
pub trait ReviewStore {
    /// Read the stored set. Absent or malformed state yields an empty set.
    fn load(&self) -> ReviewSet;

    /// Replace the stored set.
    fn save(&mut self, set: &ReviewSet) -> Result<()>;

    /// Remove the stored record entirely.
    fn clear(&mut self) -> Result<()>;
}

/// Decode a stored record, treating anything unparseable as empty.
pub fn decode_record(raw: Option<&str>) -> ReviewSet {
    let Some(raw) = raw else {
        return ReviewSet::new();
    };
    match serde_json::from_str(raw) {
        Ok(set) => set,
        Err(e) => {
            tracing::debug!(error = %e, "ignoring malformed review record");
            ReviewSet::new()
        }
    }
}

/// Review record kept as a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store the record at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store the record named `key` inside `dir` (`<dir>/<key>.json`).
    pub fn in_dir(dir: impl AsRef<Path>, key: &str) -> Self {
        Self::new(dir.as_ref().join(format!("{key}.json")))
    }

    /// Store the record named `key` in the platform data directory.
    pub fn default_location(key: &str) -> Self {
        Self::in_dir(default_dir(), key)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Platform data directory for review records (cross-platform).
pub fn default_dir() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("rekishi");
    path
}

impl ReviewStore for FileStore {
    fn load(&self) -> ReviewSet {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode_record(Some(&raw)),
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::debug!(path = %self.path.display(), error = %e, "review record unreadable");
                }
                ReviewSet::new()
            }
        }
    }

    fn save(&mut self, set: &ReviewSet) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Store(format!("{}: {}", parent.display(), e)))?;
        }
        let json = serde_json::to_string(set)?;
        fs::write(&self.path, json)
            .map_err(|e| Error::Store(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Store(format!("{}: {}", self.path.display(), e))),
        }
    }
}

/// Review record held in memory, as raw text so malformed state can be
/// represented.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing raw record.
    pub fn with_record(raw: impl Into<String>) -> Self {
        Self {
            record: Some(raw.into()),
        }
    }

    /// Start from a set of ids.
    pub fn with_ids<S: Into<String>>(ids: impl IntoIterator<Item = S>) -> Self {
        let set: ReviewSet = ids.into_iter().collect();
        Self {
            record: serde_json::to_string(&set).ok(),
        }
    }

    /// The raw record, if any.
    pub fn record(&self) -> Option<&str> {
        self.record.as_deref()
    }
}

impl ReviewStore for MemoryStore {
    fn load(&self) -> ReviewSet {
        decode_record(self.record.as_deref())
    }

    fn save(&mut self, set: &ReviewSet) -> Result<()> {
        self.record = Some(serde_json::to_string(set)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.record = None;
        Ok(())
    }
}

impl<T: ReviewStore + ?Sized> ReviewStore for &mut T {
    fn load(&self) -> ReviewSet {
        (**self).load()
    }

    fn save(&mut self, set: &ReviewSet) -> Result<()> {
        (**self).save(set)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}

impl<T: ReviewStore + ?Sized> ReviewStore for Box<T> {
    fn load(&self) -> ReviewSet {
        (**self).load()
    }

    fn save(&mut self, set: &ReviewSet) -> Result<()> {
        (**self).save(set)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}
