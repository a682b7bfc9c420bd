//! Best score persistence.
//!
//! The record is a single key holding an unsigned base-10 integer. Losing it is
//! harmless, so [`BestScoreStore`] never lets a storage failure escape: reads
//! degrade to "no record" and writes are best-effort.

use std::collections::HashMap;

use log::{info, warn};
use thiserror::Error;

use crate::rules::BEST_SCORE_KEY;

/// Failures of the backing medium. Only ever logged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write '{key}': {message}")]
    WriteFailed { key: String, message: String },
}

/// A string key/value medium (browser `localStorage`, an in-memory map, ...).
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// The contract a game session relies on when a game is won.
pub trait BestScore {
    /// Fewest attempts ever used to win, if any game has been won.
    fn load(&self) -> Option<u32>;

    /// Store `score` if it beats the record (strictly lower). Returns whether it did.
    fn record_if_best(&mut self, score: u32) -> bool;
}

/// Best score record cached in memory on top of a [`KeyValueStorage`].
#[derive(Debug)]
pub struct BestScoreStore<S> {
    storage: S,
    key: String,
    best: Option<u32>,
}

impl<S: KeyValueStorage> BestScoreStore<S> {
    /// Open the record under the default key.
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, BEST_SCORE_KEY)
    }

    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let best = read_record(&storage, &key);
        match best {
            Some(score) => info!("Loaded best score: {score}"),
            None => info!("No best score recorded"),
        }
        Self { storage, key, best }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn read_record<S: KeyValueStorage>(storage: &S, key: &str) -> Option<u32> {
    let raw = match storage.get_item(key) {
        Ok(raw) => raw?,
        Err(err) => {
            warn!("Could not read best score: {err}");
            return None;
        }
    };
    match raw.trim().parse::<u32>() {
        // A zero-attempt win is impossible, treat it as garbage too.
        Ok(0) | Err(_) => {
            warn!("Ignoring malformed best score {raw:?}");
            None
        }
        Ok(score) => Some(score),
    }
}

impl<S: KeyValueStorage> BestScore for BestScoreStore<S> {
    fn load(&self) -> Option<u32> {
        self.best
    }

    fn record_if_best(&mut self, score: u32) -> bool {
        if self.best.is_some_and(|best| score >= best) {
            return false;
        }
        self.best = Some(score);
        match self.storage.set_item(&self.key, &score.to_string()) {
            Ok(()) => info!("Saved best score: {score}"),
            Err(err) => warn!("Could not save best score: {err}"),
        }
        true
    }
}

/// In-memory medium. [`MemoryStorage::unavailable`] and [`MemoryStorage::read_only`]
/// simulate a browser with storage disabled or full.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    unavailable: bool,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Medium pre-filled with one entry.
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.items.insert(key.to_string(), value.to_string());
        storage
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Raw stored value, bypassing the availability switches.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable("memory storage disabled".into()));
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable("memory storage disabled".into()));
        }
        if self.read_only {
            return Err(StoreError::WriteFailed {
                key: key.to_string(),
                message: "quota exceeded".into(),
            });
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &mut T {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

/// `window.localStorage`, looked up on every access so a page that revokes
/// storage mid-session degrades to "no record" instead of failing.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn handle() -> Result<web_sys::Storage, StoreError> {
        let win = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
        win.local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::handle()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::handle()?
            .set_item(key, value)
            .map_err(|e| StoreError::WriteFailed {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sequence() {
        let mut store = BestScoreStore::open(MemoryStorage::new());
        assert_eq!(store.load(), None);
        assert!(store.record_if_best(7));
        assert_eq!(store.load(), Some(7));
        assert!(!store.record_if_best(9));
        assert_eq!(store.load(), Some(7));
        assert!(store.record_if_best(5));
        assert_eq!(store.load(), Some(5));
        // Ties are not a new record.
        assert!(!store.record_if_best(5));
        assert_eq!(store.storage().peek(BEST_SCORE_KEY), Some("5"));
    }

    #[test]
    fn test_record_survives_reopen() {
        let mut store = BestScoreStore::open(MemoryStorage::new());
        store.record_if_best(4);
        let reopened = BestScoreStore::open(store.into_storage());
        assert_eq!(reopened.load(), Some(4));
    }

    #[test]
    fn test_loads_existing_value() {
        let store = BestScoreStore::open(MemoryStorage::with_item(BEST_SCORE_KEY, "3"));
        assert_eq!(store.load(), Some(3));
    }

    #[test]
    fn test_malformed_values_read_as_absent() {
        for raw in ["", "abc", "-2", "0", "4.5"] {
            let store = BestScoreStore::open(MemoryStorage::with_item(BEST_SCORE_KEY, raw));
            assert_eq!(store.load(), None, "value {raw:?} should be ignored");
        }
    }

    #[test]
    fn test_unavailable_storage_degrades_to_absent() {
        let mut store = BestScoreStore::open(MemoryStorage::unavailable());
        assert_eq!(store.load(), None);
        assert!(store.record_if_best(6));
        assert_eq!(store.load(), Some(6));
    }

    #[test]
    fn test_write_failure_still_reports_new_record() {
        let mut store = BestScoreStore::open(MemoryStorage::read_only());
        assert!(store.record_if_best(8));
        assert_eq!(store.load(), Some(8));
        assert_eq!(store.storage().peek(BEST_SCORE_KEY), None);
        assert!(!store.record_if_best(9));
    }

    #[test]
    fn test_custom_key() {
        let mut storage = MemoryStorage::new();
        {
            let mut store = BestScoreStore::open_with_key(&mut storage, "alt");
            assert_eq!(store.key(), "alt");
            store.record_if_best(2);
        }
        assert_eq!(storage.peek("alt"), Some("2"));
        assert_eq!(storage.peek(BEST_SCORE_KEY), None);
    }
}
