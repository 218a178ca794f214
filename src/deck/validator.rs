//! Deck legality checks.
//!
//! Every check is a pure function of the pid list, the card store and the
//! format restriction. Printings resolve to their canonical record before
//! type and burst checks. A pid that does not resolve fails a legality
//! check and is skipped by the counting helpers.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::cards::{CardRecord, CardSource, CardType, Pid};

use super::limits::{BURST_COUNT, LRIG_DECK_MAX, MAIN_DECK_SIZE, MAX_COPIES};
use super::restriction::FormatRestriction;
use super::Deck;

/// Result of every check on one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckReport {
    pub main_deck: bool,
    pub lrig_deck: bool,
    pub format_restriction: bool,
    pub burst_count: usize,
}

impl DeckReport {
    /// Main deck, LRIG deck and format restriction all pass.
    #[must_use]
    pub fn is_legal(&self) -> bool {
        self.main_deck && self.lrig_deck && self.format_restriction
    }
}

/// Deck legality checker.
///
/// ## Example
///
/// ```
/// use wx_deck::cards::{CardRecord, CardStore, CardType, Pid};
/// use wx_deck::deck::{DeckValidator, FormatRestriction};
///
/// let store = CardStore::from_records([
///     CardRecord::new(Pid::new(1), "Tama", CardType::Lrig).with_level(0),
/// ])
/// .unwrap();
/// let restriction = FormatRestriction::empty();
/// let validator = DeckValidator::with_restriction(&store, &restriction);
///
/// assert!(validator.check_lrig_deck(&[Pid::new(1)]));
/// assert!(!validator.check_lrig_deck(&[Pid::new(2)]));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DeckValidator<'a> {
    store: &'a dyn CardSource,
    restriction: &'a FormatRestriction,
}

impl<'a> DeckValidator<'a> {
    /// Validator using the process-wide format restriction.
    #[must_use]
    pub fn new(store: &'a dyn CardSource) -> Self {
        Self::with_restriction(store, FormatRestriction::global())
    }

    /// Validator using an explicit format restriction.
    #[must_use]
    pub fn with_restriction(store: &'a dyn CardSource, restriction: &'a FormatRestriction) -> Self {
        Self { store, restriction }
    }

    /// Resolve every pid to its canonical record, or `None` if any fails.
    fn resolve_all(&self, pids: &[Pid]) -> Option<Vec<&'a CardRecord>> {
        let store = self.store;
        pids.iter()
            .map(|&pid| {
                let found = store.canonical(pid);
                if found.is_none() {
                    log::debug!("{pid} does not resolve to a canonical record");
                }
                found
            })
            .collect()
    }

    /// 40 cards, no LRIG-deck types, 20 life bursts, at most 4 copies.
    #[must_use]
    pub fn check_main_deck(&self, pids: &[Pid]) -> bool {
        if pids.len() != MAIN_DECK_SIZE {
            log::debug!("main deck has {} cards, expected {MAIN_DECK_SIZE}", pids.len());
            return false;
        }
        let Some(records) = self.resolve_all(pids) else {
            return false;
        };
        if let Some(card) = records.iter().find(|r| r.card_type.is_lrig_deck_type()) {
            log::debug!("main deck holds {} ({:?})", card.pid, card.card_type);
            return false;
        }
        let bursts = self.burst_count(pids);
        if bursts != BURST_COUNT {
            log::debug!("main deck has {bursts} life bursts, expected {BURST_COUNT}");
            return false;
        }
        self.check_duplicate(pids)
    }

    /// At most 10 cards, no SIGNI or spells, a level 0 LRIG, at most 4 copies.
    #[must_use]
    pub fn check_lrig_deck(&self, pids: &[Pid]) -> bool {
        if pids.len() > LRIG_DECK_MAX {
            log::debug!("LRIG deck has {} cards, max {LRIG_DECK_MAX}", pids.len());
            return false;
        }
        let Some(records) = self.resolve_all(pids) else {
            return false;
        };
        if let Some(card) = records
            .iter()
            .find(|r| matches!(r.card_type, CardType::Signi | CardType::Spell))
        {
            log::debug!("LRIG deck holds {} ({:?})", card.pid, card.card_type);
            return false;
        }
        if !records
            .iter()
            .any(|r| r.card_type == CardType::Lrig && r.level == 0)
        {
            log::debug!("LRIG deck has no level 0 LRIG");
            return false;
        }
        self.check_duplicate(pids)
    }

    /// At most 4 copies per card, counting the front face of double-sided
    /// printings. Unresolved pids are ignored.
    #[must_use]
    pub fn check_duplicate(&self, pids: &[Pid]) -> bool {
        let mut buckets: FxHashMap<_, usize> = FxHashMap::default();
        for &pid in pids {
            let Some(mut record) = self.store.get_by_pid(pid) else {
                continue;
            };
            if let Some(front) = record.side_a {
                match self.store.get_by_pid(front) {
                    Some(found) => record = found,
                    None => continue,
                }
            }
            *buckets.entry(record.cid).or_default() += 1;
        }

        match buckets.iter().find(|&(_, &count)| count > MAX_COPIES) {
            Some((cid, count)) => {
                log::debug!("{count} copies of {cid}, max {MAX_COPIES}");
                false
            }
            None => true,
        }
    }

    /// Banned combinations and per-card quotas over canonical records.
    #[must_use]
    pub fn check_format_restriction(&self, pids: &[Pid]) -> bool {
        match self.resolve_all(pids) {
            Some(records) => self.restriction.permits(records),
            None => false,
        }
    }

    /// Main and LRIG deck checks, then optionally the format restriction
    /// over both sections together.
    #[must_use]
    pub fn check_deck(&self, deck: &Deck, apply_format_restriction: bool) -> bool {
        if !(self.check_main_deck(&deck.main_deck) && self.check_lrig_deck(&deck.lrig_deck)) {
            return false;
        }
        if !apply_format_restriction {
            return true;
        }
        let all: Vec<Pid> = deck.all().collect();
        self.check_format_restriction(&all)
    }

    /// Canonical records with a life burst. Unresolved pids are skipped.
    #[must_use]
    pub fn burst_count(&self, pids: &[Pid]) -> usize {
        pids.iter()
            .filter_map(|&pid| self.store.canonical(pid))
            .filter(|r| r.has_burst())
            .count()
    }

    /// Run every check, without short-circuiting.
    #[must_use]
    pub fn report(&self, deck: &Deck) -> DeckReport {
        let all: Vec<Pid> = deck.all().collect();
        DeckReport {
            main_deck: self.check_main_deck(&deck.main_deck),
            lrig_deck: self.check_lrig_deck(&deck.lrig_deck),
            format_restriction: self.check_format_restriction(&all),
            burst_count: self.burst_count(&deck.main_deck),
        }
    }
}
