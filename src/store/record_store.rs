//! Generic JSON-file record store.
//!
//! Owns the ordered record sequence and its backing file. Records are held
//! entirely in memory; `persist` rewrites the whole file through a temp file
//! in the target directory followed by an atomic rename, so a crash mid-write
//! leaves either the old contents or the new, never a torn file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use tempfile::NamedTempFile;

use crate::error::{Result, StoreError};

/// An ordered sequence of records synchronized with one JSON file.
#[derive(Debug)]
pub struct RecordStore<R> {
    path: PathBuf,
    records: Vec<R>,
}

impl<R: Serialize + DeserializeOwned + Clone> RecordStore<R> {
    /// Open the store at `path`, loading existing records.
    ///
    /// An absent file initializes an empty sequence. A file that exists but
    /// does not parse as a JSON array of records fails with `CorruptData`;
    /// callers may recover with [`RecordStore::empty`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let records = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents).map_err(|e| StoreError::CorruptData {
                path: path.clone(),
                reason: e.to_string(),
            })?
        } else {
            Vec::new()
        };
        log::debug!("Opened store at {} ({} records)", path.display(), records.len());
        Ok(Self { path, records })
    }

    /// Start from an empty sequence at `path`, ignoring any existing file.
    /// The recovery path after `open` reports `CorruptData`. Nothing is
    /// written until the first mutation.
    pub fn empty(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            records: Vec::new(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    /// The full sequence, in insertion order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Bounds-check a positional selection.
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.records.len() {
            return Err(StoreError::IndexOutOfBounds {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }

    /// Append a record and persist.
    pub fn push(&mut self, record: R) -> Result<()> {
        self.records.push(record);
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Replace the record at `index` and persist. The prior record is
    /// restored if the write fails.
    pub fn replace(&mut self, index: usize, record: R) -> Result<()> {
        self.check_index(index)?;
        let prior = std::mem::replace(&mut self.records[index], record);
        if let Err(e) = self.persist() {
            self.records[index] = prior;
            return Err(e);
        }
        Ok(())
    }

    /// Remove the record at `index` and persist. Later records shift left.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        let removed = self.records.remove(index);
        if let Err(e) = self.persist() {
            self.records.insert(index, removed);
            return Err(e);
        }
        Ok(())
    }

    /// Rewrite the backing file from the in-memory sequence.
    ///
    /// Pretty-printed UTF-8 JSON, written to a temp file in the target
    /// directory and renamed over the destination. The temp file is cleaned
    /// up automatically if anything fails before the rename.
    pub fn persist(&self) -> Result<()> {
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = dir {
            fs::create_dir_all(dir)?;
        }
        let mut tmp = match dir {
            Some(dir) => NamedTempFile::new_in(dir)?,
            None => NamedTempFile::new_in(".")?,
        };
        serde_json::to_writer_pretty(&mut tmp, &self.records)?;
        tmp.write_all(b"\n")?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        log::debug!(
            "Persisted {} records to {}",
            self.records.len(),
            self.path.display()
        );
        Ok(())
    }
}
