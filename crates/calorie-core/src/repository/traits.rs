//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for durable storage.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::domain::TrackerResult;

/// Durable text storage addressed by key
pub trait KeyValueStore {
    /// Read the value under `key`, `None` when absent
    fn get(&self, key: &str) -> TrackerResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        (**self).set(key, value)
    }
}
