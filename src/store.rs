//! JSON-file persistence for the simulator.
//!
//! The store keeps the whole snapshot in memory and rewrites the file after
//! every write, mirroring the write-through behavior of a watch's key/value
//! storage. Keys are stored by their stable names:
//!
//! ```json
//! { "STEP_GOAL": 9000, "LOCATION_NAME": "Oslo" }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use heapless::String as BoundedString;
use modulus_common::keys::MessageKey;
use modulus_common::persist::Persistence;
use modulus_common::text::truncated;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for loading and writing the store file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredValue {
    Int(i32),
    Text(String),
}

/// Key/value store backed by a JSON file, or by nothing at all.
#[derive(Debug, Default)]
pub struct FileStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, StoredValue>,
}

impl FileStore {
    /// Store that never touches the disk.
    pub fn in_memory() -> Self { Self::default() }

    /// Load `path`, or start empty if it does not exist yet.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let entries = match fs::read(path) {
            Ok(bytes) => Self::parse(&bytes)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        let store = Self {
            path: Some(path.to_path_buf()),
            entries,
        };
        if store.is_empty() {
            log::info!("store {} is empty, starting from defaults", path.display());
        } else {
            log::info!("opened store {} ({} keys)", path.display(), store.len());
        }
        Ok(store)
    }

    /// Decode a snapshot. Keys outside the namespace are logged and dropped.
    fn parse(bytes: &[u8]) -> Result<BTreeMap<String, StoredValue>, StoreError> {
        let mut entries: BTreeMap<String, StoredValue> = serde_json::from_slice(bytes)?;
        entries.retain(|name, _| {
            let known = MessageKey::from_name(name).is_some();
            if !known {
                log::warn!("ignoring unknown store key {name}");
            }
            known
        });
        Ok(entries)
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> { self.path.as_deref() }

    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    fn put(
        &mut self,
        key: MessageKey,
        value: StoredValue,
    ) -> Result<(), StoreError> {
        self.entries.insert(key.name().to_owned(), value);
        self.flush()
    }

    /// Rewrite the backing file through a sibling temp file.
    fn flush(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&self.entries)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl Persistence for FileStore {
    type Error = StoreError;

    fn exists(
        &self,
        key: MessageKey,
    ) -> bool {
        self.entries.contains_key(key.name())
    }

    fn read_int(
        &self,
        key: MessageKey,
    ) -> Option<i32> {
        match self.entries.get(key.name())? {
            StoredValue::Int(v) => Some(*v),
            StoredValue::Text(_) => None,
        }
    }

    fn read_string<const N: usize>(
        &self,
        key: MessageKey,
    ) -> Option<BoundedString<N>> {
        match self.entries.get(key.name())? {
            StoredValue::Text(s) => Some(truncated(s)),
            StoredValue::Int(_) => None,
        }
    }

    fn write_int(
        &mut self,
        key: MessageKey,
        value: i32,
    ) -> Result<(), StoreError> {
        self.put(key, StoredValue::Int(value))
    }

    fn write_string(
        &mut self,
        key: MessageKey,
        value: &str,
    ) -> Result<(), StoreError> {
        self.put(key, StoredValue::Text(value.to_owned()))
    }
}

// =============================================================================
// Tests
// =============================================================================
