//! Query engine: tokenizes a query, runs the rule pipeline, filters cards.

use crate::cards::{CardRecord, CardSource};
use crate::localize::Localizer;

use super::rule::{Predicate, Rule, RuleKind, SearchContext};
use super::rules::default_rules;
use super::tokenizer::TokenBuffer;

/// Tokens one rule claimed from a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleClaim {
    pub rule: RuleKind,
    pub tokens: Vec<String>,
}

/// A query after every rule has parsed it.
///
/// Holds one predicate per rule; a record matches when all of them accept.
pub struct CompiledQuery<'a> {
    filters: Vec<(RuleKind, Predicate<'a>)>,
    claims: Vec<RuleClaim>,
    unclaimed: Vec<String>,
}

impl<'a> CompiledQuery<'a> {
    /// Whether a record passes every rule.
    #[must_use]
    pub fn matches(&self, record: &CardRecord) -> bool {
        self.filters.iter().all(|(_, filter)| filter(record))
    }

    /// Filter records through each rule in turn, keeping input order.
    pub fn filter<'r>(&self, records: impl IntoIterator<Item = &'r CardRecord>) -> Vec<&'r CardRecord> {
        let mut results: Vec<&CardRecord> = records.into_iter().collect();
        for (_, filter) in &self.filters {
            if results.is_empty() {
                break;
            }
            results.retain(|&record| filter(record));
        }
        results
    }

    /// Tokens claimed by each rule, in pipeline order. Rules that claimed
    /// nothing are omitted.
    #[must_use]
    pub fn claims(&self) -> &[RuleClaim] {
        &self.claims
    }

    /// Tokens no rule claimed.
    #[must_use]
    pub fn unclaimed(&self) -> &[String] {
        &self.unclaimed
    }

    /// Whether no rule claimed any token.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.claims.is_empty()
    }
}

impl std::fmt::Debug for CompiledQuery<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledQuery")
            .field("rules", &self.filters.len())
            .field("claims", &self.claims)
            .field("unclaimed", &self.unclaimed)
            .finish()
    }
}

/// Free-text card search over a store.
///
/// ## Example
///
/// ```
/// use wx_deck::cards::{CardRecord, CardStore, CardType, Pid};
/// use wx_deck::search::QueryEngine;
///
/// let store = CardStore::from_records([
///     CardRecord::new(Pid::new(1), "Tama", CardType::Lrig).with_color("white").with_level(0),
///     CardRecord::new(Pid::new(2), "Servant O", CardType::Signi).with_color("colorless"),
/// ])
/// .unwrap();
///
/// let engine = QueryEngine::new(&store, None);
/// let found = engine.search("white lrig");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name, "Tama");
/// ```
pub struct QueryEngine<'a> {
    ctx: SearchContext<'a>,
    rules: Vec<Box<dyn Rule>>,
}

impl<'a> QueryEngine<'a> {
    /// Engine with the default rule pipeline.
    #[must_use]
    pub fn new(store: &'a dyn CardSource, localizer: Option<&'a dyn Localizer>) -> Self {
        Self::with_rules(store, localizer, default_rules())
    }

    /// Engine with a custom rule pipeline, applied in the given order.
    #[must_use]
    pub fn with_rules(
        store: &'a dyn CardSource,
        localizer: Option<&'a dyn Localizer>,
        rules: Vec<Box<dyn Rule>>,
    ) -> Self {
        Self {
            ctx: SearchContext::new(store, localizer),
            rules,
        }
    }

    /// Rule kinds in pipeline order.
    pub fn rule_kinds(&self) -> impl Iterator<Item = RuleKind> + '_ {
        self.rules.iter().map(|rule| rule.kind())
    }

    /// Parse a query into predicates without running it.
    #[must_use]
    pub fn compile(&self, query: &str) -> CompiledQuery<'a> {
        let mut tokens = TokenBuffer::tokenize(query);
        let mut filters = Vec::with_capacity(self.rules.len());
        let mut claims = Vec::new();

        for rule in &self.rules {
            let filter = rule.parse(&mut tokens, &self.ctx);
            let claimed = tokens.take_claimed();
            if !claimed.is_empty() {
                claims.push(RuleClaim {
                    rule: rule.kind(),
                    tokens: claimed,
                });
            }
            filters.push((rule.kind(), filter));
        }

        log::debug!("compiled query {query:?}: {claims:?}");
        CompiledQuery {
            filters,
            claims,
            unclaimed: tokens.as_slice().to_vec(),
        }
    }

    /// Run a query against the whole store.
    ///
    /// Results keep store order. An empty query returns every record.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&'a CardRecord> {
        let results = self.compile(query).filter(self.ctx.store.records());
        log::debug!("query {query:?} matched {} records", results.len());
        results
    }
}

impl std::fmt::Debug for QueryEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryEngine")
            .field("rules", &self.rule_kinds().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardStore, CardType, Pid};
    use crate::search::rules::{NameRule, TextualRule};

    fn store() -> CardStore {
        CardStore::from_records([
            CardRecord::new(Pid::new(1), "Tama", CardType::Lrig).with_color("white"),
            CardRecord::new(Pid::new(2), "Servant", CardType::Signi).with_color("colorless"),
            CardRecord::new(Pid::new(3), "Red Signi", CardType::Signi).with_color("red"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_query_returns_store_order() {
        let store = store();
        let engine = QueryEngine::new(&store, None);

        let pids: Vec<_> = engine.search("").iter().map(|r| r.pid.raw()).collect();
        assert_eq!(pids, vec![1, 2, 3]);
        assert!(engine.compile("   ").is_unconstrained());
    }

    #[test]
    fn test_claims_recorded_per_rule() {
        let store = store();
        let engine = QueryEngine::new(&store, None);
        let query = engine.compile("red s tama");

        assert_eq!(
            query.claims(),
            &[
                RuleClaim { rule: RuleKind::Color, tokens: vec!["red".into()] },
                RuleClaim { rule: RuleKind::Type, tokens: vec!["s".into()] },
                RuleClaim { rule: RuleKind::Name, tokens: vec!["tama".into()] },
            ]
        );
        assert!(query.unclaimed().is_empty());
    }

    #[test]
    fn test_custom_pipeline() {
        let store = store();
        let engine = QueryEngine::with_rules(
            &store,
            None,
            vec![Box::new(TextualRule::color()), Box::new(NameRule)],
        );

        assert_eq!(engine.rule_kinds().count(), 2);
        // Without the type rule "signi" is just a name fragment.
        let found = engine.search("signi");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].pid, Pid::new(3));
    }

    #[test]
    fn test_no_match_is_empty() {
        let store = store();
        let engine = QueryEngine::new(&store, None);
        assert!(engine.search("green").is_empty());
        assert!(engine.search("nonexistent").is_empty());
    }

    #[test]
    fn test_matches_single_record() {
        let store = store();
        let engine = QueryEngine::new(&store, None);
        let query = engine.compile("white");
        let tama = store.iter().next().unwrap();
        assert!(query.matches(tama));
    }
}
