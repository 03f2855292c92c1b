//! Persisted day entries
//!
//! The whole store is one JSON document under a single namespaced key:
//!
//! ```text
//! { "version": 1, "entries": { "2025-01-17": "P", "2025-01-18": "N" } }
//! ```
//!
//! Every operation reads the full document and every mutation rewrites it.
//! A missing, unparsable or foreign-versioned document reads as empty.

use crate::domain::date::{from_iso, to_iso};
use crate::domain::DayState;
use crate::error::{DaymarkError, Result};
use crate::infrastructure::kv::KeyValueBackend;
use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Document version this crate reads and writes
pub const STORE_VERSION: u32 = 1;

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "daymark:v1";

/// Wire shape; values are checked entry by entry in `StoreDocument::parse`
#[derive(Debug, Serialize, Deserialize)]
struct RawDocument {
    version: Value,
    entries: BTreeMap<String, Value>,
}

/// Decoded store document; `entries` never holds `DayState::Empty`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreDocument {
    pub version: u32,
    pub entries: BTreeMap<NaiveDate, DayState>,
}

impl Default for StoreDocument {
    fn default() -> Self {
        StoreDocument {
            version: STORE_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

impl StoreDocument {
    /// Decode a persisted document, falling back to an empty one.
    ///
    /// Individual entries with a malformed date key or a value other than
    /// `P`/`N` are dropped.
    pub fn parse(raw: &str) -> Self {
        let doc: RawDocument = match serde_json::from_str(raw) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("unreadable store document, starting empty: {}", e);
                return StoreDocument::default();
            }
        };

        // Any numeric 1 (including `1.0`) is version 1
        if doc.version.as_f64() != Some(f64::from(STORE_VERSION)) {
            warn!(
                "unsupported store version {}, starting empty",
                doc.version
            );
            return StoreDocument::default();
        }

        let mut entries = BTreeMap::new();
        for (key, value) in doc.entries {
            let state = value.as_str().and_then(DayState::from_persisted);
            match (from_iso(&key), state) {
                (Ok(date), Some(state)) => {
                    entries.insert(date, state);
                }
                _ => warn!("dropping invalid store entry {:?} = {:?}", key, value),
            }
        }

        StoreDocument {
            version: STORE_VERSION,
            entries,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let raw = RawDocument {
            version: Value::from(self.version),
            entries: self
                .entries
                .iter()
                .filter(|(_, state)| !state.is_empty())
                .map(|(date, state)| {
                    (to_iso(*date), Value::from(state.code().to_string()))
                })
                .collect(),
        };

        serde_json::to_string(&raw).map_err(|e| DaymarkError::Serialize(e.to_string()))
    }

    fn apply(&mut self, date: NaiveDate, state: DayState) {
        if state.is_empty() {
            self.entries.remove(&date);
        } else {
            self.entries.insert(date, state);
        }
    }
}

/// Sparse date-to-state map persisted through a key-value backend
#[derive(Debug)]
pub struct EntryStore<B: KeyValueBackend> {
    backend: B,
    key: String,
}

impl<B: KeyValueBackend> EntryStore<B> {
    /// Store under the default storage key
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        EntryStore {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Load the current document; never fails
    pub fn load(&self) -> StoreDocument {
        match self.backend.get(&self.key) {
            Ok(Some(raw)) => StoreDocument::parse(&raw),
            Ok(None) => {
                debug!("no document under {:?}, starting empty", self.key);
                StoreDocument::default()
            }
            Err(e) => {
                warn!("failed to read {:?}, starting empty: {}", self.key, e);
                StoreDocument::default()
            }
        }
    }

    fn save(&mut self, doc: &StoreDocument) -> Result<()> {
        let json = doc.to_json()?;
        self.backend.set(&self.key, &json)?;
        debug!(
            "saved {} entries under {:?}",
            doc.entries.len(),
            self.key
        );
        Ok(())
    }

    /// State of `date`, `Empty` when nothing is recorded
    pub fn state(&self, date: NaiveDate) -> DayState {
        self.load()
            .entries
            .get(&date)
            .copied()
            .unwrap_or_default()
    }

    /// Record `state` for `date`; `Empty` removes the entry
    pub fn set_state(&mut self, date: NaiveDate, state: DayState) -> Result<()> {
        let mut doc = self.load();
        doc.apply(date, state);
        self.save(&doc)
    }

    /// Advance `date` one step through the cycle and return the new state
    pub fn toggle_state(&mut self, date: NaiveDate) -> Result<DayState> {
        let mut doc = self.load();
        let next = doc.entries.get(&date).copied().unwrap_or_default().next();
        doc.apply(date, next);
        self.save(&doc)?;
        Ok(next)
    }

    /// Copy of every recorded entry, ordered by date
    pub fn all_entries(&self) -> BTreeMap<NaiveDate, DayState> {
        self.load().entries
    }

    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.load().entries.keys().next().copied()
    }

    /// Earliest recorded date as `YYYY-MM-DD`
    pub fn earliest_date_iso(&self) -> Option<String> {
        self.earliest_date().map(to_iso)
    }
}
