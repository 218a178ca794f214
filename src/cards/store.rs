//! Card store for record lookup.
//!
//! `CardSource` is the read-only lookup interface the search and
//! validation code depends on. `CardStore` is the in-memory implementation:
//! records keep their insertion order, which is the order search results
//! come back in.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use super::record::{CardRecord, Cid, Pid};

/// Read-only card lookup.
///
/// Absence is an expected outcome, never an error.
pub trait CardSource {
    /// Get a record by printing ID.
    fn get_by_pid(&self, pid: Pid) -> Option<&CardRecord>;

    /// Get the canonical record for a card ID.
    fn get_by_cid(&self, cid: Cid) -> Option<&CardRecord> {
        self.get_by_pid(cid.as_pid())
    }

    /// Iterate over every record in store order.
    fn records(&self) -> Box<dyn Iterator<Item = &CardRecord> + '_>;

    /// Resolve a printing to its canonical record.
    fn canonical(&self, pid: Pid) -> Option<&CardRecord> {
        self.get_by_pid(pid).and_then(|r| self.get_by_cid(r.cid))
    }

    /// Canonical record of a record, or the record itself when the
    /// canonical printing is missing.
    fn canonical_or_self<'s>(&'s self, record: &'s CardRecord) -> &'s CardRecord {
        self.get_by_cid(record.cid).unwrap_or(record)
    }
}

impl std::fmt::Debug for dyn CardSource + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CardSource")
    }
}

/// Errors raised while building a store.
#[derive(Debug, Error)]
pub enum CardStoreError {
    #[error("card database is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("printing {0} is defined twice")]
    DuplicatePid(Pid),
}

/// In-memory card store.
///
/// ## Example
///
/// ```
/// use wx_deck::cards::{CardRecord, CardSource, CardStore, CardType, Pid};
///
/// let mut store = CardStore::new();
/// store.insert(CardRecord::new(Pid::new(1), "Tama", CardType::Lrig)).unwrap();
///
/// let found = store.get_by_pid(Pid::new(1)).unwrap();
/// assert_eq!(found.name, "Tama");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardStore {
    records: Vec<CardRecord>,
    by_pid: FxHashMap<Pid, usize>,
}

impl CardStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records, rejecting duplicate printings.
    pub fn from_records(
        records: impl IntoIterator<Item = CardRecord>,
    ) -> Result<Self, CardStoreError> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// Load a card database from JSON.
    ///
    /// Accepts either an array of records, kept in array order, or an
    /// object keyed by pid. Object entries with integer keys come first in
    /// ascending numeric order, then any other keys.
    ///
    /// ## Example
    ///
    /// ```
    /// use wx_deck::cards::CardStore;
    ///
    /// let store = CardStore::from_json(r#"{
    ///     "10": {"pid": 10, "cid": 10, "cardType": "SIGNI"},
    ///     "2": {"pid": 2, "cid": 2, "cardType": "LRIG"}
    /// }"#)
    /// .unwrap();
    ///
    /// let pids: Vec<u32> = store.iter().map(|r| r.pid.raw()).collect();
    /// assert_eq!(pids, vec![2, 10]);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CardStoreError> {
        let records = match serde_json::from_str::<CardDatabase>(json)? {
            CardDatabase::List(records) => records,
            CardDatabase::ByPid(entries) => {
                let mut entries: Vec<(String, CardRecord)> = entries.into_iter().collect();
                entries.sort_by_key(|(key, _)| key.parse::<u32>().map_or(u64::MAX, u64::from));
                entries.into_iter().map(|(_, record)| record).collect()
            }
        };
        let store = Self::from_records(records)?;
        log::debug!("loaded {} card records", store.len());
        Ok(store)
    }

    /// Insert a record.
    pub fn insert(&mut self, record: CardRecord) -> Result<(), CardStoreError> {
        if self.by_pid.contains_key(&record.pid) {
            return Err(CardStoreError::DuplicatePid(record.pid));
        }
        self.by_pid.insert(record.pid, self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Check if a printing is present.
    #[must_use]
    pub fn contains(&self, pid: Pid) -> bool {
        self.by_pid.contains_key(&pid)
    }

    /// Get the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CardRecord> {
        self.records.iter()
    }
}

/// The two layouts a card database dump comes in.
#[derive(Deserialize)]
#[serde(untagged)]
enum CardDatabase {
    List(Vec<CardRecord>),
    ByPid(BTreeMap<String, CardRecord>),
}

impl CardSource for CardStore {
    fn get_by_pid(&self, pid: Pid) -> Option<&CardRecord> {
        self.by_pid.get(&pid).map(|&idx| &self.records[idx])
    }

    fn records(&self) -> Box<dyn Iterator<Item = &CardRecord> + '_> {
        Box::new(self.records.iter())
    }
}
