//! Rules over card abilities: effect groups, life burst, cross and timing.
//!
//! Skill, no-burst and cross look at the canonical record, since reprints
//! may omit ability data. Timing reads the printed record.

use smallvec::SmallVec;

use crate::cards::{CardRecord, CardType, EffectGroup, Timming};
use crate::search::keywords;
use crate::search::rule::{accept_all, Predicate, Rule, RuleKind, SearchContext};
use crate::search::tokenizer::TokenBuffer;

/// Matches cards having any of the named effect groups.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkillRule;

impl Rule for SkillRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Skill
    }

    fn parse<'a>(&self, tokens: &mut TokenBuffer, ctx: &SearchContext<'a>) -> Predicate<'a> {
        let locale = ctx.locale;
        let groups: SmallVec<[EffectGroup; 4]> = tokens
            .claim(|token| {
                keywords::SKILLS
                    .iter()
                    .find(|(_, spellings)| locale.matches_any(token, spellings))
                    .map(|&(group, _)| group)
            })
            .into_iter()
            .collect();
        if groups.is_empty() {
            return accept_all();
        }

        let store = ctx.store;
        Box::new(move |record: &CardRecord| {
            let canonical = store.canonical_or_self(record);
            groups.iter().any(|&group| !canonical.effects(group).is_empty())
        })
    }
}

/// Matches SIGNI and spells without a life burst.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBurstRule;

impl Rule for NoBurstRule {
    fn kind(&self) -> RuleKind {
        RuleKind::NoBurst
    }

    fn parse<'a>(&self, tokens: &mut TokenBuffer, ctx: &SearchContext<'a>) -> Predicate<'a> {
        let locale = ctx.locale;
        let claimed = tokens.claim(|token| locale.matches_any(token, keywords::NO_BURST).then_some(()));
        if claimed.is_empty() {
            return accept_all();
        }

        let store = ctx.store;
        Box::new(move |record: &CardRecord| {
            let canonical = store.canonical_or_self(record);
            matches!(canonical.card_type, CardType::Signi | CardType::Spell) && !canonical.has_burst()
        })
    }
}

/// Matches SIGNI with a cross link.
#[derive(Clone, Copy, Debug, Default)]
pub struct CrossRule;

impl Rule for CrossRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Cross
    }

    fn parse<'a>(&self, tokens: &mut TokenBuffer, ctx: &SearchContext<'a>) -> Predicate<'a> {
        let locale = ctx.locale;
        let claimed = tokens.claim(|token| locale.matches_any(token, keywords::CROSS).then_some(()));
        if claimed.is_empty() {
            return accept_all();
        }

        let store = ctx.store;
        Box::new(move |record: &CardRecord| {
            let canonical = store.canonical_or_self(record);
            canonical.card_type == CardType::Signi && canonical.has_cross()
        })
    }
}

/// Matches cards usable in any of the named phases.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimmingRule;

impl Rule for TimmingRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Timming
    }

    fn parse<'a>(&self, tokens: &mut TokenBuffer, ctx: &SearchContext<'a>) -> Predicate<'a> {
        let locale = ctx.locale;
        let timmings: SmallVec<[Timming; 3]> = tokens
            .claim(|token| {
                keywords::TIMMINGS
                    .iter()
                    .find(|(_, spellings)| locale.matches_any(token, spellings))
                    .map(|&(timming, _)| timming)
            })
            .into_iter()
            .collect();
        if timmings.is_empty() {
            return accept_all();
        }

        Box::new(move |record: &CardRecord| timmings.iter().any(|t| record.timmings.contains(t)))
    }
}
