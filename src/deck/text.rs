//! Plain-text deck listing.

use crate::cards::{CardRecord, CardSource, Pid};
use crate::localize::{Locale, Localizer};

use super::Deck;

const SECTION_SEPARATOR: &str = "——————————";

/// List a deck as `<count> <name>` lines.
///
/// Three sections separated by a rule line: the LRIG deck, main deck cards
/// without a life burst, and main deck cards with one. Consecutive cards
/// with the same display name collapse into one line. Unknown pids are
/// left out.
///
/// ## Example
///
/// ```
/// use wx_deck::cards::{CardRecord, CardStore, CardType, EffectGroup, Pid};
/// use wx_deck::deck::{deck_to_text, Deck};
///
/// let store = CardStore::from_records([
///     CardRecord::new(Pid::new(1), "Tama", CardType::Lrig),
///     CardRecord::new(Pid::new(2), "Servant", CardType::Signi)
///         .with_effect(EffectGroup::Burst, "Draw a card."),
/// ])
/// .unwrap();
/// let deck = Deck::new(vec![Pid::new(2), Pid::new(2)], vec![Pid::new(1)]);
///
/// assert_eq!(
///     deck_to_text(&deck, &store, None),
///     "1 Tama\n——————————\n——————————\n2 Servant\n"
/// );
/// ```
#[must_use]
pub fn deck_to_text(deck: &Deck, store: &dyn CardSource, localizer: Option<&dyn Localizer>) -> String {
    let locale = Locale::new(localizer);
    let resolve = |pids: &[Pid]| {
        pids.iter()
            .filter_map(|&pid| store.get_by_pid(pid))
            .collect::<Vec<_>>()
    };
    let main = resolve(&deck.main_deck);
    let (burst, plain): (Vec<&CardRecord>, Vec<&CardRecord>) =
        main.into_iter().partition(|r| r.has_burst());
    let sections = [resolve(&deck.lrig_deck), plain, burst];

    let mut text = String::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            text.push_str(SECTION_SEPARATOR);
            text.push('\n');
        }
        let names: Vec<String> = section.iter().map(|r| locale.card_name(r)).collect();
        for run in names.chunk_by(|a, b| a == b) {
            text.push_str(&format!("{} {}\n", run.len(), run[0]));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardStore, CardType, EffectGroup};
    use crate::localize::TableLocalizer;

    fn store() -> CardStore {
        CardStore::from_records([
            CardRecord::new(Pid::new(1), "A", CardType::Signi),
            CardRecord::new(Pid::new(2), "B", CardType::Signi)
                .with_effect(EffectGroup::Burst, "Burst."),
            CardRecord::new(Pid::new(3), "A", CardType::Signi),
        ])
        .unwrap()
    }

    #[test]
    fn test_runs_of_equal_names() {
        let store = store();
        let deck = Deck::new(
            vec![Pid::new(1), Pid::new(3), Pid::new(2), Pid::new(1), Pid::new(99)],
            vec![],
        );

        // 1 and 3 share a name; moving the burst card out joins the run.
        assert_eq!(
            deck_to_text(&deck, &store, None),
            "——————————\n3 A\n——————————\n1 B\n"
        );
    }

    #[test]
    fn test_empty_deck() {
        let store = store();
        assert_eq!(
            deck_to_text(&Deck::default(), &store, None),
            "——————————\n——————————\n"
        );
    }

    #[test]
    fn test_localized_names() {
        let store = store();
        let en = TableLocalizer::new().with_name(2, "Bee");
        let deck = Deck::new(vec![Pid::new(2)], vec![]);
        assert_eq!(
            deck_to_text(&deck, &store, Some(&en)),
            "——————————\n——————————\n1 Bee\n"
        );
    }
}
