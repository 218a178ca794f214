//! Localization adapter.
//!
//! Search keywords are written in several languages. A `Localizer` lets the
//! host application fold keyword spellings (e.g. simplified to traditional
//! Chinese), supply the localized card name used for name matching, and
//! map canonical class names to their localized labels.
//!
//! Every consumer takes an `Option<&dyn Localizer>`; `Locale` wraps that
//! option and falls back to the raw strings when no adapter is present.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardRecord;

/// Localization capability supplied by the host.
pub trait Localizer {
    /// Canonicalize a keyword spelling for comparison against query tokens.
    fn normalize_keyword(&self, raw: &str) -> String;

    /// Localized card name, used for name matching only.
    fn display_name(&self, record: &CardRecord) -> String;

    /// Localized label for a canonical class name.
    fn class_label(&self, class: &str) -> String;
}

/// An optional localizer with raw-string fallbacks.
#[derive(Clone, Copy, Default)]
pub struct Locale<'a>(Option<&'a dyn Localizer>);

impl<'a> Locale<'a> {
    #[must_use]
    pub fn new(localizer: Option<&'a dyn Localizer>) -> Self {
        Self(localizer)
    }

    /// No adapter: every lookup returns its input.
    #[must_use]
    pub fn raw() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn is_raw(&self) -> bool {
        self.0.is_none()
    }

    #[must_use]
    pub fn keyword(&self, raw: &str) -> String {
        match self.0 {
            Some(l) => l.normalize_keyword(raw),
            None => raw.to_string(),
        }
    }

    #[must_use]
    pub fn card_name(&self, record: &CardRecord) -> String {
        match self.0 {
            Some(l) => l.display_name(record),
            None => record.name.clone(),
        }
    }

    /// Class label, lower-cased for token comparison.
    #[must_use]
    pub fn class_label(&self, class: &str) -> String {
        match self.0 {
            Some(l) => l.class_label(class).to_lowercase(),
            None => class.to_lowercase(),
        }
    }

    /// Whether `token` equals any of the keyword spellings.
    #[must_use]
    pub fn matches_any(&self, token: &str, spellings: &[&str]) -> bool {
        spellings.iter().any(|s| self.keyword(s) == token)
    }
}

impl std::fmt::Debug for Locale<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Locale")
            .field(&if self.is_raw() { "raw" } else { "localized" })
            .finish()
    }
}

/// Table-driven localizer.
///
/// Each table maps a source string to its replacement; strings missing
/// from a table pass through unchanged.
///
/// ## Example
///
/// ```
/// use wx_deck::localize::{Localizer, TableLocalizer};
///
/// let en = TableLocalizer::new().with_class("タマ", "Tama");
/// assert_eq!(en.class_label("タマ"), "Tama");
/// assert_eq!(en.class_label("花代"), "花代");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TableLocalizer {
    /// Character-level keyword folding, applied to every char.
    #[serde(default)]
    pub chars: FxHashMap<char, char>,
    /// Localized card names by canonical card id.
    #[serde(default)]
    pub names: FxHashMap<u32, String>,
    /// Localized class labels.
    #[serde(default)]
    pub classes: FxHashMap<String, String>,
}

impl TableLocalizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load tables from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Fold `from` to `to` in keywords (builder pattern).
    #[must_use]
    pub fn with_char(mut self, from: char, to: char) -> Self {
        self.chars.insert(from, to);
        self
    }

    /// Localized name for a canonical card id (builder pattern).
    #[must_use]
    pub fn with_name(mut self, cid: u32, name: impl Into<String>) -> Self {
        self.names.insert(cid, name.into());
        self
    }

    /// Localized label for a class (builder pattern).
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>, label: impl Into<String>) -> Self {
        self.classes.insert(class.into(), label.into());
        self
    }
}

impl Localizer for TableLocalizer {
    fn normalize_keyword(&self, raw: &str) -> String {
        raw.chars()
            .map(|c| self.chars.get(&c).copied().unwrap_or(c))
            .collect()
    }

    fn display_name(&self, record: &CardRecord) -> String {
        self.names
            .get(&record.cid.raw())
            .cloned()
            .unwrap_or_else(|| record.name.clone())
    }

    fn class_label(&self, class: &str) -> String {
        self.classes
            .get(class)
            .cloned()
            .unwrap_or_else(|| class.to_string())
    }
}
