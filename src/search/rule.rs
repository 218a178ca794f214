//! Rule protocol.
//!
//! A `Rule` claims the tokens it recognizes from the shared `TokenBuffer`
//! and returns a `Predicate` over card records. A rule that claims nothing
//! returns a predicate that accepts every record.

use std::borrow::Cow;

use crate::cards::{CardRecord, CardSource};
use crate::localize::{Locale, Localizer};

use super::tokenizer::TokenBuffer;

/// Boolean filter over card records.
pub type Predicate<'a> = Box<dyn Fn(&CardRecord) -> bool + 'a>;

/// Predicate that accepts every record.
#[must_use]
pub fn accept_all<'a>() -> Predicate<'a> {
    Box::new(|_| true)
}

/// Collaborators a rule may consult while parsing and filtering.
#[derive(Clone, Copy, Debug)]
pub struct SearchContext<'a> {
    pub store: &'a dyn CardSource,
    pub locale: Locale<'a>,
}

impl<'a> SearchContext<'a> {
    #[must_use]
    pub fn new(store: &'a dyn CardSource, localizer: Option<&'a dyn Localizer>) -> Self {
        Self {
            store,
            locale: Locale::new(localizer),
        }
    }
}

/// Identifies a rule in the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Color,
    Type,
    Rarity,
    Rise,
    Trap,
    Acce,
    Skill,
    NoBurst,
    Cross,
    Timming,
    Limiting,
    Class,
    Power,
    Level,
    Limit,
    Number,
    Illust,
    Wxid,
    Name,
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Token-consuming matcher.
pub trait Rule: Send + Sync {
    /// Which rule this is.
    fn kind(&self) -> RuleKind;

    /// Claim recognized tokens and build the filter for them.
    fn parse<'a>(&self, tokens: &mut TokenBuffer, ctx: &SearchContext<'a>) -> Predicate<'a>;
}

/// Textual card field read by the generic textual rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Color,
    CardType,
    Rarity,
    Rise,
    Trap,
    Acce,
}

impl TextField {
    /// Lower-cased field value as the textual rule compares it.
    #[must_use]
    pub fn read<'r>(&self, record: &'r CardRecord) -> Cow<'r, str> {
        let flag = |set: bool| Cow::Borrowed(if set { "true" } else { "false" });
        match self {
            TextField::Color => Cow::Owned(record.color.to_lowercase()),
            TextField::CardType => Cow::Borrowed(record.card_type.keyword()),
            TextField::Rarity => Cow::Owned(record.rarity.to_lowercase()),
            TextField::Rise => flag(record.rise),
            TextField::Trap => flag(record.trap),
            TextField::Acce => flag(record.acce),
        }
    }
}

/// Numeric card field read by the numeric rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericField {
    Power,
    Level,
    Limit,
}

impl NumericField {
    #[must_use]
    pub fn read(&self, record: &CardRecord) -> i64 {
        match self {
            NumericField::Power => record.power,
            NumericField::Level => record.level,
            NumericField::Limit => record.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardType, Pid};

    #[test]
    fn test_text_field_read() {
        let card = CardRecord::new(Pid::new(1), "A", CardType::Signi)
            .with_color("White/Red")
            .with_rarity("SR")
            .with_trap();

        assert_eq!(TextField::Color.read(&card), "white/red");
        assert_eq!(TextField::CardType.read(&card), "signi");
        assert_eq!(TextField::Rarity.read(&card), "sr");
        assert_eq!(TextField::Trap.read(&card), "true");
        assert_eq!(TextField::Rise.read(&card), "false");
    }

    #[test]
    fn test_numeric_field_read() {
        let card = CardRecord::new(Pid::new(1), "A", CardType::Signi)
            .with_level(3)
            .with_power(12000)
            .with_limit(7);

        assert_eq!(NumericField::Level.read(&card), 3);
        assert_eq!(NumericField::Power.read(&card), 12000);
        assert_eq!(NumericField::Limit.read(&card), 7);
    }

    #[test]
    fn test_accept_all() {
        let card = CardRecord::new(Pid::new(1), "A", CardType::Spell);
        assert!(accept_all()(&card));
    }
}
