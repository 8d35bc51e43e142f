//! Scalar key/value persistence.
//!
//! The watchface persists write-through: every field the reducer changes is
//! written immediately, one key at a time. Writes report failure through
//! [`Persistence::Error`], but callers only log it; a failed write is never
//! retried and never rolls back the in-memory state.

use heapless::{String, Vec};

use crate::keys::MessageKey;
use crate::text::truncated;

/// Durable key/value store keyed by the message namespace.
pub trait Persistence {
    /// Failure reported by a write.
    type Error: core::fmt::Debug;

    fn exists(
        &self,
        key: MessageKey,
    ) -> bool;

    /// Integer stored under `key`, or `None` if absent or not an integer.
    fn read_int(
        &self,
        key: MessageKey,
    ) -> Option<i32>;

    /// String stored under `key`, truncated to `N` bytes.
    fn read_string<const N: usize>(
        &self,
        key: MessageKey,
    ) -> Option<String<N>>;

    fn write_int(
        &mut self,
        key: MessageKey,
        value: i32,
    ) -> Result<(), Self::Error>;

    fn write_string(
        &mut self,
        key: MessageKey,
        value: &str,
    ) -> Result<(), Self::Error>;
}

/// Write an integer and log, rather than propagate, a failure.
pub fn persist_int<P: Persistence>(
    store: &mut P,
    key: MessageKey,
    value: i32,
) {
    if let Err(e) = store.write_int(key, value) {
        log::error!("persist {} failed: {e:?}", key.name());
    }
}

/// Write a string and log, rather than propagate, a failure.
pub fn persist_str<P: Persistence>(
    store: &mut P,
    key: MessageKey,
    value: &str,
) {
    if let Err(e) = store.write_string(key, value) {
        log::error!("persist {} failed: {e:?}", key.name());
    }
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// Number of distinct keys the in-memory store can hold.
pub const MEMORY_STORE_CAPACITY: usize = 16;

/// Maximum stored string length in bytes.
pub const MEMORY_STORE_TEXT: usize = 64;

const _: () = assert!(MEMORY_STORE_CAPACITY >= MessageKey::PERSISTED.len());

#[derive(Clone, Debug, PartialEq, Eq)]
enum Stored {
    Int(i32),
    Text(String<MEMORY_STORE_TEXT>),
}

/// The store has no slot left for a new key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreFull;

/// Fixed-capacity store kept in RAM.
///
/// Used on hosts without durable storage and as the reference store in
/// tests. Lookups are linear; the key space is tiny.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Vec<(MessageKey, Stored), MEMORY_STORE_CAPACITY>,
}

impl MemoryStore {
    pub const fn new() -> Self { Self { entries: Vec::new() } }

    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    fn get(
        &self,
        key: MessageKey,
    ) -> Option<&Stored> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    fn put(
        &mut self,
        key: MessageKey,
        value: Stored,
    ) -> Result<(), StoreFull> {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
            return Ok(());
        }
        self.entries.push((key, value)).map_err(|_| StoreFull)
    }
}

impl Persistence for MemoryStore {
    type Error = StoreFull;

    fn exists(
        &self,
        key: MessageKey,
    ) -> bool {
        self.get(key).is_some()
    }

    fn read_int(
        &self,
        key: MessageKey,
    ) -> Option<i32> {
        match self.get(key)? {
            Stored::Int(v) => Some(*v),
            Stored::Text(_) => None,
        }
    }

    fn read_string<const N: usize>(
        &self,
        key: MessageKey,
    ) -> Option<String<N>> {
        match self.get(key)? {
            Stored::Text(s) => Some(truncated(s)),
            Stored::Int(_) => None,
        }
    }

    fn write_int(
        &mut self,
        key: MessageKey,
        value: i32,
    ) -> Result<(), StoreFull> {
        self.put(key, Stored::Int(value))
    }

    fn write_string(
        &mut self,
        key: MessageKey,
        value: &str,
    ) -> Result<(), StoreFull> {
        self.put(key, Stored::Text(truncated(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(!store.exists(MessageKey::StepGoal));
        assert_eq!(store.read_int(MessageKey::StepGoal), None);
    }

    #[test]
    fn test_write_then_read_int() {
        let mut store = MemoryStore::new();
        store.write_int(MessageKey::StepGoal, 8000).unwrap();
        assert!(store.exists(MessageKey::StepGoal));
        assert_eq!(store.read_int(MessageKey::StepGoal), Some(8000));
    }

    #[test]
    fn test_overwrite_keeps_single_entry() {
        let mut store = MemoryStore::new();
        store.write_int(MessageKey::MoveGoal, 30).unwrap();
        store.write_int(MessageKey::MoveGoal, 45).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.read_int(MessageKey::MoveGoal), Some(45));
    }

    #[test]
    fn test_read_string_truncates_to_caller_capacity() {
        let mut store = MemoryStore::new();
        store.write_string(MessageKey::LocationName, "San Francisco").unwrap();

        let full: Option<String<32>> = store.read_string(MessageKey::LocationName);
        assert_eq!(full.as_deref(), Some("San Francisco"));

        let short: Option<String<3>> = store.read_string(MessageKey::LocationName);
        assert_eq!(short.as_deref(), Some("San"));
    }

    #[test]
    fn test_type_mismatch_reads_as_absent() {
        let mut store = MemoryStore::new();
        store.write_string(MessageKey::StepGoal, "8000").unwrap();
        assert!(store.exists(MessageKey::StepGoal));
        assert_eq!(store.read_int(MessageKey::StepGoal), None);
    }

    #[test]
    fn test_every_persisted_key_fits() {
        let mut store = MemoryStore::new();
        for (i, key) in MessageKey::PERSISTED.into_iter().enumerate() {
            assert!(store.write_int(key, i as i32).is_ok(), "{key:?} should fit");
        }
        assert_eq!(store.len(), MessageKey::PERSISTED.len());
    }
}
