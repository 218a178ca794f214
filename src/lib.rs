//! # wx-deck
//!
//! Card search and deck legality for WIXOSS deck building.
//!
//! ## Design Principles
//!
//! 1. **Injected Data**: The card store, localizer and format restriction
//!    are passed in. Nothing reads global card data behind the caller's back
//!    except the process-wide restriction, which is installed once.
//!
//! 2. **Rules as a Pipeline**: A query is split into tokens; each search rule
//!    claims the tokens it understands and yields a predicate. Leftover tokens
//!    are card-name fragments.
//!
//! 3. **Absence Is Not an Error**: Unknown pids fail legality checks or are
//!    skipped by counters. Unknown tokens fall through to the name rule.
//!
//! ## Modules
//!
//! - `cards`: Card records, ids, and the `CardSource` lookup interface
//! - `localize`: Keyword, name and class-label localization
//! - `search`: Tokenizer, search rules, and the query engine
//! - `deck`: Deck legality checks, format restriction, deck files, library,
//!   and the editing session

pub mod cards;
pub mod localize;
pub mod search;
pub mod deck;

// Re-export commonly used types
pub use crate::cards::{
    CardRecord, CardSource, CardStore, CardStoreError, CardType, Cid, EffectGroup, Pid, Timming,
};

pub use crate::localize::{Locale, Localizer, TableLocalizer};

pub use crate::search::{CompiledQuery, NumericRange, QueryEngine, Rule, RuleClaim, RuleKind};

pub use crate::deck::{
    deck_to_text, export_deck, import_deck, Deck, DeckEditor, DeckFileError, DeckLibrary,
    DeckReport, DeckSection, DeckValidator, FormatRestriction, KeyValueStore, LibraryError,
    MemoryKeyValueStore, RestrictionError,
};
