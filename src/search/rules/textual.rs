//! Generic keyword-to-value rule over a textual field.
//!
//! Color, type, rarity and the rise/trap/acce flags all work the same way:
//! a synonym table maps spellings to a canonical value, and the record
//! matches when the field equals (or, for color, contains) any claimed value.

use smallvec::SmallVec;

use crate::cards::{CardRecord, CardType};
use crate::search::keywords;
use crate::search::rule::{accept_all, Predicate, Rule, RuleKind, SearchContext, TextField};
use crate::search::tokenizer::TokenBuffer;

/// How a claimed value is compared with the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextMatch {
    Exact,
    Contains,
}

/// Synonym-table rule reading one `TextField`.
#[derive(Clone, Debug)]
pub struct TextualRule {
    kind: RuleKind,
    field: TextField,
    table: Vec<(&'static str, &'static [&'static str])>,
    mode: TextMatch,
}

impl TextualRule {
    #[must_use]
    pub fn new(
        kind: RuleKind,
        field: TextField,
        table: Vec<(&'static str, &'static [&'static str])>,
        mode: TextMatch,
    ) -> Self {
        Self { kind, field, table, mode }
    }

    /// Color names; substring match so multicolor fields qualify.
    #[must_use]
    pub fn color() -> Self {
        Self::new(
            RuleKind::Color,
            TextField::Color,
            keywords::COLORS.to_vec(),
            TextMatch::Contains,
        )
    }

    #[must_use]
    pub fn card_type() -> Self {
        let table = keywords::CARD_TYPES
            .iter()
            .map(|&(card_type, spellings): &(CardType, &'static [&'static str])| {
                (card_type.keyword(), spellings)
            })
            .collect();
        Self::new(RuleKind::Type, TextField::CardType, table, TextMatch::Exact)
    }

    #[must_use]
    pub fn rarity() -> Self {
        Self::new(
            RuleKind::Rarity,
            TextField::Rarity,
            keywords::RARITIES.to_vec(),
            TextMatch::Exact,
        )
    }

    #[must_use]
    pub fn rise() -> Self {
        Self::flag(RuleKind::Rise, TextField::Rise, keywords::RISE)
    }

    #[must_use]
    pub fn trap() -> Self {
        Self::flag(RuleKind::Trap, TextField::Trap, keywords::TRAP)
    }

    #[must_use]
    pub fn acce() -> Self {
        Self::flag(RuleKind::Acce, TextField::Acce, keywords::ACCE)
    }

    fn flag(kind: RuleKind, field: TextField, spellings: &'static [&'static str]) -> Self {
        Self::new(kind, field, vec![("true", spellings)], TextMatch::Exact)
    }
}

impl Rule for TextualRule {
    fn kind(&self) -> RuleKind {
        self.kind
    }

    fn parse<'a>(&self, tokens: &mut TokenBuffer, ctx: &SearchContext<'a>) -> Predicate<'a> {
        let locale = ctx.locale;
        let values: SmallVec<[&'static str; 4]> = tokens
            .claim(|token| {
                self.table
                    .iter()
                    .find(|(_, spellings)| locale.matches_any(token, spellings))
                    .map(|&(value, _)| value)
            })
            .into_iter()
            .collect();
        if values.is_empty() {
            return accept_all();
        }

        let field = self.field;
        let mode = self.mode;
        Box::new(move |record: &CardRecord| {
            let actual = field.read(record);
            values.iter().any(|value| match mode {
                TextMatch::Exact => actual == *value,
                TextMatch::Contains => actual.contains(value),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardRecord, CardStore, Pid};

    fn run(rule: &TextualRule, query: &str, card: &CardRecord) -> (bool, usize) {
        let store = CardStore::new();
        let ctx = SearchContext::new(&store, None);
        let mut tokens = TokenBuffer::tokenize(query);
        let predicate = rule.parse(&mut tokens, &ctx);
        (predicate(card), tokens.len())
    }

    #[test]
    fn test_color_substring_match() {
        let card = CardRecord::new(Pid::new(1), "A", CardType::Signi).with_color("white/red");

        assert_eq!(run(&TextualRule::color(), "red", &card), (true, 0));
        assert_eq!(run(&TextualRule::color(), "赤", &card), (true, 0));
        assert_eq!(run(&TextualRule::color(), "blue", &card), (false, 0));
        assert_eq!(run(&TextualRule::color(), "blue white", &card), (true, 0));
    }

    #[test]
    fn test_type_exact_match() {
        let lrig = CardRecord::new(Pid::new(1), "A", CardType::Lrig);

        assert_eq!(run(&TextualRule::card_type(), "l", &lrig), (true, 0));
        assert_eq!(run(&TextualRule::card_type(), "ルリグ", &lrig), (true, 0));
        assert_eq!(run(&TextualRule::card_type(), "signi", &lrig), (false, 0));
        assert_eq!(run(&TextualRule::card_type(), "lrigs", &lrig), (true, 1));
    }

    #[test]
    fn test_flags() {
        let rise = CardRecord::new(Pid::new(1), "A", CardType::Signi).with_rise();
        let plain = CardRecord::new(Pid::new(2), "B", CardType::Signi);

        assert!(run(&TextualRule::rise(), "rise", &rise).0);
        assert!(!run(&TextualRule::rise(), "rise", &plain).0);
        assert!(!run(&TextualRule::trap(), "trap", &rise).0);
        assert!(run(&TextualRule::acce(), "", &plain).0);
    }

    #[test]
    fn test_unrecognized_tokens_untouched() {
        let card = CardRecord::new(Pid::new(1), "A", CardType::Signi).with_rarity("LR");
        let store = CardStore::new();
        let ctx = SearchContext::new(&store, None);
        let mut tokens = TokenBuffer::tokenize("foo lr bar");

        let predicate = TextualRule::rarity().parse(&mut tokens, &ctx);
        assert!(predicate(&card));
        assert_eq!(tokens.as_slice(), ["foo", "bar"]);
    }
}
