//! Deck file import/export.
//!
//! ```json
//! {"format":"WEBXOSS Deck","version":"1","content":{"mainDeck":[..],"lrigDeck":[..]}}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::limits::{LRIG_DECK_SOFT_CAP, MAIN_DECK_SOFT_CAP};
use super::Deck;

/// Format tag written to and required in deck files.
pub const DECK_FORMAT: &str = "WEBXOSS Deck";

const DECK_VERSION: &str = "1";

/// Reasons a deck file is rejected.
#[derive(Debug, Error)]
pub enum DeckFileError {
    #[error("deck file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown deck format {0:?}")]
    UnknownFormat(String),
    #[error("unsupported deck version {0}")]
    UnsupportedVersion(Value),
    #[error("main deck has {0} cards, max 50")]
    MainDeckTooLarge(usize),
    #[error("LRIG deck has {0} cards, max 20")]
    LrigDeckTooLarge(usize),
}

#[derive(Serialize)]
struct DeckFileOut<'a> {
    format: &'static str,
    version: &'static str,
    content: &'a Deck,
}

#[derive(Deserialize)]
struct DeckFileIn {
    format: String,
    version: Value,
    content: Deck,
}

/// Serialize a deck to the deck file format.
///
/// ## Example
///
/// ```
/// use wx_deck::cards::Pid;
/// use wx_deck::deck::{export_deck, import_deck, Deck};
///
/// let deck = Deck::new(vec![Pid::new(112)], vec![Pid::new(104)]);
/// let json = export_deck(&deck).unwrap();
/// assert_eq!(import_deck(&json).unwrap(), deck);
/// ```
pub fn export_deck(deck: &Deck) -> Result<String, DeckFileError> {
    let file = DeckFileOut {
        format: DECK_FORMAT,
        version: DECK_VERSION,
        content: deck,
    };
    Ok(serde_json::to_string(&file)?)
}

/// Parse a deck file.
///
/// The version may be the string `"1"` or the number `1`. Sections larger
/// than the editing soft caps are rejected.
pub fn import_deck(json: &str) -> Result<Deck, DeckFileError> {
    let file: DeckFileIn = serde_json::from_str(json)?;
    if file.format != DECK_FORMAT {
        return Err(DeckFileError::UnknownFormat(file.format));
    }
    if !is_supported_version(&file.version) {
        return Err(DeckFileError::UnsupportedVersion(file.version));
    }

    let deck = file.content;
    if deck.main_deck.len() > MAIN_DECK_SOFT_CAP {
        return Err(DeckFileError::MainDeckTooLarge(deck.main_deck.len()));
    }
    if deck.lrig_deck.len() > LRIG_DECK_SOFT_CAP {
        return Err(DeckFileError::LrigDeckTooLarge(deck.lrig_deck.len()));
    }
    Ok(deck)
}

fn is_supported_version(version: &Value) -> bool {
    match version {
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => s.trim().parse::<f64>() == Ok(1.0),
        _ => false,
    }
}
