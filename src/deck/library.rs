//! Named deck storage over a string key-value store.
//!
//! Key layout:
//! - `deck_filenames`: JSON array of deck names, sorted
//! - `deck_file_<name>`: the deck as `{"mainDeck":[..],"lrigDeck":[..]}`

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::cards::Pid;

use super::Deck;

const NAMES_KEY: &str = "deck_filenames";
const DECK_KEY_PREFIX: &str = "deck_file_";

/// Name of the deck an empty library is seeded with.
pub const STARTER_DECK_NAME: &str = "WHITE_HOPE";

/// The white starter deck: ten SIGNI four times over and an eight-card
/// LRIG deck.
#[must_use]
pub fn starter_deck() -> Deck {
    Deck::new(
        (0..4).flat_map(|_| 112..=121).map(Pid::new).collect(),
        (104..=111).map(Pid::new).collect(),
    )
}

/// String key-value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String);

    fn remove(&mut self, key: &str);
}

/// In-memory key-value store.
#[derive(Clone, Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: FxHashMap<String, String>,
}

impl MemoryKeyValueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Errors from deck library operations.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("no deck named {0:?}")]
    NotFound(String),
    #[error("a deck named {0:?} already exists")]
    NameTaken(String),
    #[error("stored data under {key:?} is unreadable: {source}")]
    Malformed {
        key: String,
        source: serde_json::Error,
    },
}

/// Named decks.
///
/// ## Example
///
/// ```
/// use wx_deck::cards::Pid;
/// use wx_deck::deck::{Deck, DeckLibrary, MemoryKeyValueStore};
///
/// let mut library = DeckLibrary::open(MemoryKeyValueStore::new()).unwrap();
/// let deck = Deck::new(vec![Pid::new(112)], vec![Pid::new(104)]);
///
/// library.create("white hope", &deck).unwrap();
/// assert_eq!(library.names(), ["white hope"]);
/// assert_eq!(library.load("white hope").unwrap(), Some(deck));
/// ```
#[derive(Debug)]
pub struct DeckLibrary<K: KeyValueStore> {
    store: K,
    names: Vec<String>,
}

impl<K: KeyValueStore> DeckLibrary<K> {
    /// Open a library, reading the name list from the store.
    pub fn open(store: K) -> Result<Self, LibraryError> {
        let names = match store.get(NAMES_KEY) {
            Some(json) => {
                let mut names: Vec<String> =
                    serde_json::from_str(&json).map_err(|source| LibraryError::Malformed {
                        key: NAMES_KEY.to_string(),
                        source,
                    })?;
                names.sort();
                names
            }
            None => Vec::new(),
        };
        log::debug!("opened deck library with {} decks", names.len());
        Ok(Self { store, names })
    }

    /// Open a library, seeding the starter deck when it holds no decks.
    pub fn open_or_seed(store: K) -> Result<Self, LibraryError> {
        let mut library = Self::open(store)?;
        library.seed_if_empty()?;
        Ok(library)
    }

    /// Create the starter deck if the library is empty. Returns whether it did.
    pub fn seed_if_empty(&mut self) -> Result<bool, LibraryError> {
        if !self.names.is_empty() {
            return Ok(false);
        }
        log::debug!("seeding empty deck library with {STARTER_DECK_NAME}");
        self.create(STARTER_DECK_NAME, &starter_deck())?;
        Ok(true)
    }

    /// Deck names, sorted.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }

    /// Add a new deck.
    pub fn create(&mut self, name: &str, deck: &Deck) -> Result<(), LibraryError> {
        if self.contains(name) {
            return Err(LibraryError::NameTaken(name.to_string()));
        }
        self.names.push(name.to_string());
        self.write_names();
        self.write_deck(name, deck);
        Ok(())
    }

    /// Overwrite an existing deck.
    pub fn save(&mut self, name: &str, deck: &Deck) -> Result<(), LibraryError> {
        if !self.contains(name) {
            return Err(LibraryError::NotFound(name.to_string()));
        }
        self.write_deck(name, deck);
        Ok(())
    }

    /// Read a deck. `Ok(None)` when the name is listed but holds no data.
    pub fn load(&self, name: &str) -> Result<Option<Deck>, LibraryError> {
        if !self.contains(name) {
            return Err(LibraryError::NotFound(name.to_string()));
        }
        let key = deck_key(name);
        let Some(json) = self.store.get(&key) else {
            return Ok(None);
        };
        serde_json::from_str(&json).map(Some).map_err(|source| {
            log::warn!("deck {name:?} is unreadable: {source}");
            LibraryError::Malformed { key, source }
        })
    }

    /// Move a deck to a new name.
    pub fn rename(&mut self, name: &str, new_name: &str) -> Result<(), LibraryError> {
        if self.contains(new_name) {
            return Err(LibraryError::NameTaken(new_name.to_string()));
        }
        let deck = self
            .load(name)?
            .ok_or_else(|| LibraryError::NotFound(name.to_string()))?;
        self.delete(name)?;
        self.create(new_name, &deck)
    }

    /// Remove a deck and its data.
    pub fn delete(&mut self, name: &str) -> Result<(), LibraryError> {
        let index = self
            .names
            .binary_search_by(|n| n.as_str().cmp(name))
            .map_err(|_| LibraryError::NotFound(name.to_string()))?;
        self.names.remove(index);
        self.write_names();
        self.store.remove(&deck_key(name));
        Ok(())
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &K {
        &self.store
    }

    #[must_use]
    pub fn into_inner(self) -> K {
        self.store
    }

    fn write_names(&mut self) {
        self.names.sort();
        // A list of strings always serializes.
        let json = serde_json::to_string(&self.names).unwrap_or_else(|_| "[]".to_string());
        self.store.set(NAMES_KEY, json);
    }

    fn write_deck(&mut self, name: &str, deck: &Deck) {
        let json = serde_json::to_string(deck).unwrap_or_else(|_| "{}".to_string());
        self.store.set(&deck_key(name), json);
    }
}

fn deck_key(name: &str) -> String {
    format!("{DECK_KEY_PREFIX}{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(id: u32) -> Deck {
        Deck::new(vec![Pid::new(id)], vec![])
    }

    #[test]
    fn test_key_layout() {
        let mut library = DeckLibrary::open(MemoryKeyValueStore::new()).unwrap();
        library.create("b", &deck(1)).unwrap();
        library.create("a", &deck(2)).unwrap();

        let store = library.store();
        assert_eq!(store.get("deck_filenames").as_deref(), Some(r#"["a","b"]"#));
        assert_eq!(
            store.get("deck_file_b").as_deref(),
            Some(r#"{"mainDeck":[1],"lrigDeck":[]}"#)
        );
    }

    #[test]
    fn test_reopen_reads_names() {
        let mut library = DeckLibrary::open(MemoryKeyValueStore::new()).unwrap();
        library.create("x", &deck(1)).unwrap();

        let reopened = DeckLibrary::open(library.into_inner()).unwrap();
        assert_eq!(reopened.names(), ["x"]);
        assert_eq!(reopened.load("x").unwrap(), Some(deck(1)));
    }

    #[test]
    fn test_malformed_names() {
        let mut store = MemoryKeyValueStore::new();
        store.set("deck_filenames", "oops".to_string());
        assert!(matches!(
            DeckLibrary::open(store),
            Err(LibraryError::Malformed { .. })
        ));
    }

    #[test]
    fn test_listed_without_data() {
        let mut store = MemoryKeyValueStore::new();
        store.set("deck_filenames", r#"["ghost"]"#.to_string());
        let library = DeckLibrary::open(store).unwrap();
        assert_eq!(library.load("ghost").unwrap(), None);
    }

    #[test]
    fn test_open_or_seed_empty_store() {
        let library = DeckLibrary::open_or_seed(MemoryKeyValueStore::new()).unwrap();
        assert_eq!(library.names(), [STARTER_DECK_NAME]);

        let deck = library.load(STARTER_DECK_NAME).unwrap().unwrap();
        assert_eq!(deck.main_deck.len(), 40);
        assert_eq!(deck.main_deck[..2], [Pid::new(112), Pid::new(113)]);
        assert_eq!(deck.main_deck[10], Pid::new(112));
        assert_eq!(deck.lrig_deck, (104..=111).map(Pid::new).collect::<Vec<_>>());
    }

    #[test]
    fn test_open_or_seed_keeps_existing_decks() {
        let mut library = DeckLibrary::open(MemoryKeyValueStore::new()).unwrap();
        library.create("mine", &deck(1)).unwrap();

        let reopened = DeckLibrary::open_or_seed(library.into_inner()).unwrap();
        assert_eq!(reopened.names(), ["mine"]);
    }

    #[test]
    fn test_reseed_after_last_delete() {
        let mut library = DeckLibrary::open_or_seed(MemoryKeyValueStore::new()).unwrap();
        assert!(!library.seed_if_empty().unwrap());

        library.delete(STARTER_DECK_NAME).unwrap();
        assert!(library.names().is_empty());
        assert!(library.seed_if_empty().unwrap());
        assert_eq!(library.names(), [STARTER_DECK_NAME]);
    }
}
