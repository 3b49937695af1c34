//! Progress persistence over a client-local key-value slot.
//!
//! Persistence is best-effort: a corrupt or unreadable record loads as
//! "absent" and write failures are logged and dropped.

use crate::error::PersistenceError;
use crate::types::QuizProgress;
use std::collections::HashMap;

/// Key under which quiz progress is stored.
pub const PROGRESS_KEY: &str = "germanFlashcardsProgress";

/// Durable string slots, in the shape of browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}

/// In-memory slots for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, if any.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Saves, restores and clears [`QuizProgress`] in a single slot.
#[derive(Debug)]
pub struct ProgressStore<S> {
    slot: S,
    key: String,
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, PROGRESS_KEY)
    }

    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    /// Persist `progress`. Failures are logged and swallowed.
    pub fn save(&mut self, progress: &QuizProgress) {
        if let Err(error) = self.try_save(progress) {
            tracing::debug!(key = %self.key, %error, "progress not saved");
        }
    }

    fn try_save(&mut self, progress: &QuizProgress) -> Result<(), PersistenceError> {
        let value = serde_json::to_string(progress)?;
        self.slot.set(&self.key, &value)
    }

    /// Previously saved progress, or `None` when absent or unreadable.
    pub fn load(&self) -> Option<QuizProgress> {
        match self.try_load() {
            Ok(progress) => progress,
            Err(error) => {
                tracing::warn!(key = %self.key, %error, "failed to restore progress");
                None
            }
        }
    }

    fn try_load(&self) -> Result<Option<QuizProgress>, PersistenceError> {
        match self.slot.get(&self.key)? {
            Some(value) => Ok(Some(serde_json::from_str(&value)?)),
            None => Ok(None),
        }
    }

    /// Remove the saved record. Failures are logged and swallowed.
    pub fn clear(&mut self) {
        if let Err(error) = self.slot.remove(&self.key) {
            tracing::debug!(key = %self.key, %error, "progress not cleared");
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn into_inner(self) -> S {
        self.slot
    }
}
