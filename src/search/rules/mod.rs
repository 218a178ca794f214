//! The built-in rules, in the order the engine applies them.
//!
//! Earlier rules claim ambiguous tokens first. The bare-number and name
//! rules come last so every specific keyword gets a chance before them.

mod ability;
mod class;
mod numeric;
mod text;
mod textual;

pub use ability::{CrossRule, NoBurstRule, SkillRule, TimmingRule};
pub use class::{ClassRule, LimitingRule};
pub use numeric::{NumberRule, NumericRule};
pub use text::{IllustRule, NameRule, WxidRule};
pub use textual::{TextMatch, TextualRule};

use super::rule::Rule;

/// The default 19-rule pipeline.
#[must_use]
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(TextualRule::color()),
        Box::new(TextualRule::card_type()),
        Box::new(TextualRule::rarity()),
        Box::new(TextualRule::rise()),
        Box::new(TextualRule::trap()),
        Box::new(TextualRule::acce()),
        Box::new(SkillRule),
        Box::new(NoBurstRule),
        Box::new(CrossRule),
        Box::new(TimmingRule),
        Box::new(LimitingRule),
        Box::new(ClassRule),
        Box::new(NumericRule::power()),
        Box::new(NumericRule::level()),
        Box::new(NumericRule::limit()),
        Box::new(NumberRule),
        Box::new(IllustRule),
        Box::new(WxidRule),
        Box::new(NameRule),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::RuleKind;

    #[test]
    fn test_default_order() {
        let kinds: Vec<_> = default_rules().iter().map(|r| r.kind()).collect();
        assert_eq!(kinds.len(), 19);
        assert_eq!(kinds[0], RuleKind::Color);
        assert_eq!(kinds[15], RuleKind::Number);
        assert_eq!(kinds[18], RuleKind::Name);
    }
}
