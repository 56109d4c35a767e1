#![forbid(unsafe_code)]
//! File-backed `KeyValueStore` for MindKey.
//!
//! Each storage key maps to `<dir>/<key>.json` holding the raw value bytes.
//! Writes go through a temp file and an atomic rename so an interrupted save
//! never leaves a truncated value behind; a later load sees either the old
//! value or the new one.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use mindkey_core::error::Error;
use mindkey_core::{KeyValueStore, Result};

pub struct FsStore {
    dir: PathBuf,
}

impl FsStore {
    /// Open (and create if needed) the storage directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| Error::Storage(e.to_string()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FsStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::Storage(err.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|e| Error::Storage(e.to_string()))?;
        fs::rename(&tmp, &path).map_err(|e| Error::Storage(e.to_string()))?;
        debug!(key, bytes = value.len(), "persisted value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Error::Storage(err.to_string())),
        }
    }
}
