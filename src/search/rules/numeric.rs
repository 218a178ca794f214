//! Numeric rules: power, level, limit, and bare numbers.
//!
//! Spells and arts have no stats, so any numeric constraint excludes them.
//! Multiple constraints in one query must all hold.

use smallvec::SmallVec;

use crate::cards::CardRecord;
use crate::localize::Locale;
use crate::search::keywords;
use crate::search::range::NumericRange;
use crate::search::rule::{accept_all, NumericField, Predicate, Rule, RuleKind, SearchContext};
use crate::search::tokenizer::TokenBuffer;

/// Keyword-prefixed range over one numeric field (`power:10000+`, `lv3`).
#[derive(Clone, Debug)]
pub struct NumericRule {
    kind: RuleKind,
    field: NumericField,
    keywords: &'static [&'static str],
}

impl NumericRule {
    #[must_use]
    pub fn new(kind: RuleKind, field: NumericField, keywords: &'static [&'static str]) -> Self {
        Self { kind, field, keywords }
    }

    #[must_use]
    pub fn power() -> Self {
        Self::new(RuleKind::Power, NumericField::Power, keywords::POWER)
    }

    #[must_use]
    pub fn level() -> Self {
        Self::new(RuleKind::Level, NumericField::Level, keywords::LEVEL)
    }

    #[must_use]
    pub fn limit() -> Self {
        Self::new(RuleKind::Limit, NumericField::Limit, keywords::LIMIT)
    }

    /// The first keyword prefixing the token decides; its remainder must
    /// parse as a range.
    fn parse_token(&self, token: &str, locale: Locale<'_>) -> Option<NumericRange> {
        let keyword = self
            .keywords
            .iter()
            .map(|k| locale.keyword(k))
            .find(|k| token.starts_with(k.as_str()))?;
        parse_expression(&token[keyword.len()..])
    }
}

impl Rule for NumericRule {
    fn kind(&self) -> RuleKind {
        self.kind
    }

    fn parse<'a>(&self, tokens: &mut TokenBuffer, ctx: &SearchContext<'a>) -> Predicate<'a> {
        let locale = ctx.locale;
        let ranges: SmallVec<[NumericRange; 2]> = tokens
            .claim(|token| self.parse_token(token, locale))
            .into_iter()
            .collect();
        if ranges.is_empty() {
            return accept_all();
        }

        let field = self.field;
        Box::new(move |record: &CardRecord| {
            record.card_type.has_stats()
                && ranges.iter().all(|range| range.contains(field.read(record)))
        })
    }
}

/// Bare range with no keyword: small numbers are levels, large ones power.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumberRule;

impl Rule for NumberRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Number
    }

    fn parse<'a>(&self, tokens: &mut TokenBuffer, _ctx: &SearchContext<'a>) -> Predicate<'a> {
        let ranges: SmallVec<[NumericRange; 2]> = tokens
            .claim(parse_expression)
            .into_iter()
            .collect();
        if ranges.is_empty() {
            return accept_all();
        }

        Box::new(move |record: &CardRecord| {
            record.card_type.has_stats()
                && ranges.iter().all(|range| {
                    let field = if range.is_level_scale() {
                        NumericField::Level
                    } else {
                        NumericField::Power
                    };
                    range.contains(field.read(record))
                })
        })
    }
}

/// Range expression with an optional leading `:`.
fn parse_expression(expr: &str) -> Option<NumericRange> {
    NumericRange::parse(expr.strip_prefix(':').unwrap_or(expr))
}
