//! LRIG restriction and SIGNI class rules.
//!
//! Class names are stored canonically (Japanese) on card records; query
//! tokens are compared against the lower-cased localized label.

use smallvec::SmallVec;

use crate::cards::{CardRecord, CardType};
use crate::search::keywords;
use crate::search::rule::{accept_all, Predicate, Rule, RuleKind, SearchContext};
use crate::search::tokenizer::TokenBuffer;

/// Matches by LRIG class: the LRIG's own classes, or a card's `limiting`.
///
/// A trailing `+` on the class token (`tama+`) also admits cards with no
/// restriction at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct LimitingRule;

impl Rule for LimitingRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Limiting
    }

    fn parse<'a>(&self, tokens: &mut TokenBuffer, ctx: &SearchContext<'a>) -> Predicate<'a> {
        let locale = ctx.locale;
        let claimed: SmallVec<[(&'static str, bool); 2]> = tokens
            .claim(|token| {
                keywords::LRIG_CLASSES.iter().find_map(|&class| {
                    let label = locale.class_label(class);
                    if token == label {
                        Some((class, false))
                    } else if token.strip_suffix('+') == Some(label.as_str()) {
                        Some((class, true))
                    } else {
                        None
                    }
                })
            })
            .into_iter()
            .collect();
        if claimed.is_empty() {
            return accept_all();
        }

        let include_open = claimed.iter().any(|&(_, open)| open);
        let classes: SmallVec<[&'static str; 2]> =
            claimed.into_iter().map(|(class, _)| class).collect();
        Box::new(move |record: &CardRecord| {
            if record.card_type == CardType::Lrig {
                return classes.iter().any(|class| record.classes.iter().any(|c| c == class));
            }
            if record.limiting.is_none() {
                return include_open;
            }
            record.limitings().any(|l| classes.contains(&l))
        })
    }
}

/// Matches SIGNI classes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassRule;

impl Rule for ClassRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Class
    }

    fn parse<'a>(&self, tokens: &mut TokenBuffer, ctx: &SearchContext<'a>) -> Predicate<'a> {
        let locale = ctx.locale;
        // Labels like "Water Beast" are typed without the space.
        let labels: Vec<(&'static str, String)> = keywords::SIGNI_CLASSES
            .iter()
            .map(|&class| (class, locale.class_label(class).replace(' ', "")))
            .collect();
        let classes: SmallVec<[&'static str; 2]> = tokens
            .claim(|token| {
                labels
                    .iter()
                    .find(|(_, label)| label == token)
                    .map(|&(class, _)| class)
            })
            .into_iter()
            .collect();
        if classes.is_empty() {
            return accept_all();
        }

        Box::new(move |record: &CardRecord| {
            classes.iter().any(|class| record.classes.iter().any(|c| c == class))
        })
    }
}
