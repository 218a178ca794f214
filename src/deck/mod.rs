//! Decks: legality checks, file format, named storage, and editing.
//!
//! ## Key Types
//!
//! - `Deck`: Main deck and LRIG deck as printing ID lists
//! - `DeckValidator`: Pure legality checks against a card store
//! - `FormatRestriction`: Banned combinations and per-card quotas
//! - `DeckLibrary`: Named decks over a `KeyValueStore`
//! - `DeckEditor`: Editing session with soft caps and default ordering

pub mod editor;
pub mod file;
pub mod library;
pub mod limits;
pub mod restriction;
pub mod text;
pub mod validator;

use serde::{Deserialize, Serialize};

use crate::cards::{CardType, Pid};

pub use editor::DeckEditor;
pub use file::{export_deck, import_deck, DeckFileError, DECK_FORMAT};
pub use library::{
    starter_deck, DeckLibrary, KeyValueStore, LibraryError, MemoryKeyValueStore, STARTER_DECK_NAME,
};
pub use restriction::{FormatRestriction, Quota, RestrictionError};
pub use text::deck_to_text;
pub use validator::{DeckReport, DeckValidator};

/// A deck as printing IDs, in deck order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub main_deck: Vec<Pid>,
    pub lrig_deck: Vec<Pid>,
}

impl Deck {
    #[must_use]
    pub fn new(main_deck: Vec<Pid>, lrig_deck: Vec<Pid>) -> Self {
        Self {
            main_deck,
            lrig_deck,
        }
    }

    /// Pids of one section.
    #[must_use]
    pub fn section(&self, section: DeckSection) -> &[Pid] {
        match section {
            DeckSection::Main => &self.main_deck,
            DeckSection::Lrig => &self.lrig_deck,
        }
    }

    /// Main deck followed by LRIG deck.
    pub fn all(&self) -> impl Iterator<Item = Pid> + '_ {
        self.main_deck.iter().chain(&self.lrig_deck).copied()
    }

    /// Total cards in both sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.main_deck.len() + self.lrig_deck.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main_deck.is_empty() && self.lrig_deck.is_empty()
    }
}

/// The two parts of a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeckSection {
    Main,
    Lrig,
}

impl DeckSection {
    /// Section a card type belongs to.
    #[must_use]
    pub const fn for_type(card_type: CardType) -> Self {
        if card_type.is_lrig_deck_type() {
            Self::Lrig
        } else {
            Self::Main
        }
    }

    /// Most cards an editing session holds in this section.
    #[must_use]
    pub const fn soft_cap(self) -> usize {
        match self {
            Self::Main => limits::MAIN_DECK_SOFT_CAP,
            Self::Lrig => limits::LRIG_DECK_SOFT_CAP,
        }
    }
}
