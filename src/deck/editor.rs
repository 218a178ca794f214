//! Deck editing session.
//!
//! Both sections are kept in the default display order after every change:
//! - LRIG deck: LRIG by level, then RESONA by level, then ARTS
//! - Main deck: SIGNI by level descending and power ascending, then spells
//!
//! Ties fall back to card ID, then to the order the cards were added.

use crate::cards::{CardRecord, CardSource, CardType, Pid};
use crate::localize::Localizer;

use super::restriction::FormatRestriction;
use super::text::deck_to_text;
use super::validator::{DeckReport, DeckValidator};
use super::{Deck, DeckSection};

/// Sort key for the default order. Only the fields relevant to the card's
/// type are filled in; the rest stay zero.
fn sort_key(record: &CardRecord) -> (u8, i64, i64, u32) {
    match record.card_type {
        CardType::Lrig => (0, record.level, 0, record.cid.raw()),
        CardType::Resona => (1, record.level, 0, record.cid.raw()),
        CardType::Signi => (2, -record.level, record.power, record.cid.raw()),
        CardType::Spell => (3, 0, 0, record.cid.raw()),
        CardType::Arts => (4, 0, 0, record.cid.raw()),
    }
}

/// Mutable deck being edited.
///
/// ## Example
///
/// ```
/// use wx_deck::cards::{CardRecord, CardStore, CardType, Pid};
/// use wx_deck::deck::DeckEditor;
///
/// let store = CardStore::from_records([
///     CardRecord::new(Pid::new(1), "Tama", CardType::Lrig),
///     CardRecord::new(Pid::new(2), "Servant", CardType::Signi),
/// ])
/// .unwrap();
///
/// let mut editor = DeckEditor::new(&store);
/// assert!(editor.add_card(Pid::new(2)));
/// assert!(editor.add_card(Pid::new(1)));
/// assert_eq!(editor.deck().lrig_deck, vec![Pid::new(1)]);
/// ```
#[derive(Clone, Debug)]
pub struct DeckEditor<'a> {
    store: &'a dyn CardSource,
    main_deck: Vec<&'a CardRecord>,
    lrig_deck: Vec<&'a CardRecord>,
}

impl<'a> DeckEditor<'a> {
    /// Empty session.
    #[must_use]
    pub fn new(store: &'a dyn CardSource) -> Self {
        Self {
            store,
            main_deck: Vec::new(),
            lrig_deck: Vec::new(),
        }
    }

    /// Session over an existing deck. Pids the store does not know are
    /// dropped; sections are not re-routed by type.
    #[must_use]
    pub fn from_deck(store: &'a dyn CardSource, deck: &Deck) -> Self {
        let resolve = |pids: &[Pid]| -> Vec<&'a CardRecord> {
            let records: Vec<_> = pids.iter().filter_map(|&pid| store.get_by_pid(pid)).collect();
            if records.len() < pids.len() {
                log::debug!("dropped {} unknown pids", pids.len() - records.len());
            }
            records
        };
        let mut editor = Self {
            store,
            main_deck: resolve(&deck.main_deck),
            lrig_deck: resolve(&deck.lrig_deck),
        };
        editor.sort(DeckSection::Main);
        editor.sort(DeckSection::Lrig);
        editor
    }

    fn section_mut(&mut self, section: DeckSection) -> &mut Vec<&'a CardRecord> {
        match section {
            DeckSection::Main => &mut self.main_deck,
            DeckSection::Lrig => &mut self.lrig_deck,
        }
    }

    /// Records of one section, in display order.
    #[must_use]
    pub fn section(&self, section: DeckSection) -> &[&'a CardRecord] {
        match section {
            DeckSection::Main => &self.main_deck,
            DeckSection::Lrig => &self.lrig_deck,
        }
    }

    fn sort(&mut self, section: DeckSection) {
        // Stable, so equal keys keep insertion order.
        self.section_mut(section).sort_by_key(|r| sort_key(r));
    }

    /// Add a printing to the section its type belongs to.
    ///
    /// Returns `false` for unknown pids and when the section is at its
    /// soft cap.
    pub fn add_card(&mut self, pid: Pid) -> bool {
        let store = self.store;
        let Some(record) = store.get_by_pid(pid) else {
            log::debug!("cannot add unknown {pid}");
            return false;
        };
        let section = DeckSection::for_type(record.card_type);
        let cards = self.section_mut(section);
        if cards.len() >= section.soft_cap() {
            log::debug!("{section:?} deck is full");
            return false;
        }
        cards.push(record);
        self.sort(section);
        true
    }

    /// Remove the card at a display position, returning its pid.
    pub fn remove_card(&mut self, section: DeckSection, index: usize) -> Option<Pid> {
        let cards = self.section_mut(section);
        if index >= cards.len() {
            return None;
        }
        Some(cards.remove(index).pid)
    }

    /// Current deck in display order.
    #[must_use]
    pub fn deck(&self) -> Deck {
        Deck {
            main_deck: self.main_deck.iter().map(|r| r.pid).collect(),
            lrig_deck: self.lrig_deck.iter().map(|r| r.pid).collect(),
        }
    }

    /// Check the current deck against the process-wide restriction.
    #[must_use]
    pub fn report(&self) -> DeckReport {
        DeckValidator::new(self.store).report(&self.deck())
    }

    /// Check the current deck against an explicit restriction.
    #[must_use]
    pub fn report_with(&self, restriction: &FormatRestriction) -> DeckReport {
        DeckValidator::with_restriction(self.store, restriction).report(&self.deck())
    }

    /// Plain-text card list of the current deck.
    #[must_use]
    pub fn to_text(&self, localizer: Option<&dyn Localizer>) -> String {
        deck_to_text(&self.deck(), self.store, localizer)
    }
}
