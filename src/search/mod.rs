//! Free-text card search.
//!
//! A query is lower-cased and split on whitespace. Each rule of the
//! pipeline claims the tokens it recognizes and produces a predicate;
//! whatever is left over is matched against card names. Results are the
//! records every predicate accepts, in store order.
//!
//! ## Key Types
//!
//! - `QueryEngine`: Runs queries against a `CardSource`
//! - `CompiledQuery`: Parsed predicates plus the per-rule claim report
//! - `Rule`: One stage of the pipeline
//! - `TokenBuffer`: Tokens not yet claimed by any rule
//! - `NumericRange`: `>=N`, `<N`, `A-B`, `N+` style ranges

pub mod engine;
pub mod keywords;
pub mod normalize;
pub mod range;
pub mod rule;
pub mod rules;
pub mod tokenizer;

pub use engine::{CompiledQuery, QueryEngine, RuleClaim};
pub use normalize::normalize_name;
pub use range::NumericRange;
pub use rule::{accept_all, NumericField, Predicate, Rule, RuleKind, SearchContext, TextField};
pub use rules::default_rules;
pub use tokenizer::TokenBuffer;
