//! Free-text rules: illustrator, printing code, and card name.

use smallvec::SmallVec;

use crate::cards::CardRecord;
use crate::search::keywords;
use crate::search::normalize::normalize_name;
use crate::search::rule::{accept_all, Predicate, Rule, RuleKind, SearchContext};
use crate::search::tokenizer::TokenBuffer;

/// `illust:<name>` - substring match on the illustrator.
#[derive(Clone, Copy, Debug, Default)]
pub struct IllustRule;

impl IllustRule {
    fn parse_token(token: &str) -> Option<String> {
        let rest = keywords::ILLUST
            .iter()
            .find_map(|prefix| token.strip_prefix(prefix))?;
        match rest.strip_prefix(':') {
            Some(value) if !value.is_empty() => Some(value.to_string()),
            _ if !rest.is_empty() => Some(rest.to_string()),
            _ => None,
        }
    }
}

impl Rule for IllustRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Illust
    }

    fn parse<'a>(&self, tokens: &mut TokenBuffer, _ctx: &SearchContext<'a>) -> Predicate<'a> {
        let illusts = tokens.claim(Self::parse_token);
        if illusts.is_empty() {
            return accept_all();
        }

        Box::new(move |record: &CardRecord| {
            let illust = record.illust.to_lowercase();
            illusts.iter().any(|name| illust.contains(name.as_str()))
        })
    }
}

/// Printing code prefix such as `wx01-001`, `wd03`, `pr-120`, `sp05-01a`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WxidRule;

impl WxidRule {
    /// Normalize a printing-code token to `set-variant`.
    ///
    /// Sets: `wxNN`, `wdNN`, `spNN`, `pr`. Variants: `re`/`cb` with up to
    /// two digits, or up to three digits with an optional `a`/`b`. The
    /// dash between them is optional in the token.
    #[must_use]
    pub fn parse_token(token: &str) -> Option<String> {
        let (set, rest) = split_set(token)?;
        let variant = rest.strip_prefix('-').unwrap_or(rest);
        is_variant(variant).then(|| format!("{set}-{variant}"))
    }
}

fn split_set(token: &str) -> Option<(&str, &str)> {
    for prefix in ["wx", "wd", "sp"] {
        if let Some(rest) = token.strip_prefix(prefix) {
            let digits = rest.get(..2)?;
            if digits.bytes().all(|b| b.is_ascii_digit()) {
                return Some((&token[..4], &rest[2..]));
            }
            return None;
        }
    }
    token.strip_prefix("pr").map(|rest| ("pr", rest))
}

fn is_variant(v: &str) -> bool {
    let short_digits = |s: &str, max: usize| s.len() <= max && s.bytes().all(|b| b.is_ascii_digit());
    if let Some(n) = v.strip_prefix("re").or_else(|| v.strip_prefix("cb")) {
        return short_digits(n, 2);
    }
    let digits = v.strip_suffix(['a', 'b']).unwrap_or(v);
    short_digits(digits, 3)
}

impl Rule for WxidRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Wxid
    }

    fn parse<'a>(&self, tokens: &mut TokenBuffer, _ctx: &SearchContext<'a>) -> Predicate<'a> {
        let prefixes = tokens.claim(Self::parse_token);
        if prefixes.is_empty() {
            return accept_all();
        }

        Box::new(move |record: &CardRecord| {
            let wxid = record.wxid.to_lowercase();
            prefixes.iter().any(|prefix| wxid.starts_with(prefix.as_str()))
        })
    }
}

/// Catch-all: every remaining token is a name fragment.
///
/// `a|b` is an OR-group within one token; separate tokens must all match.
/// Runs of `|` count as one separator. A leading or trailing `|` adds an
/// empty alternative, which matches every name.
#[derive(Clone, Copy, Debug, Default)]
pub struct NameRule;

impl Rule for NameRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Name
    }

    fn parse<'a>(&self, tokens: &mut TokenBuffer, ctx: &SearchContext<'a>) -> Predicate<'a> {
        let groups: Vec<SmallVec<[String; 2]>> = tokens
            .claim_rest()
            .iter()
            .filter(|word| !word.starts_with('|') && !word.ends_with('|'))
            .map(|word| {
                word.split('|')
                    .filter(|alt| !alt.is_empty())
                    .map(normalize_name)
                    .collect::<SmallVec<[String; 2]>>()
            })
            .filter(|alts| alts.iter().all(|alt| !alt.is_empty()))
            .collect();
        if groups.is_empty() {
            return accept_all();
        }

        let locale = ctx.locale;
        Box::new(move |record: &CardRecord| {
            let name = normalize_name(&locale.card_name(record));
            groups
                .iter()
                .all(|group| group.iter().any(|alt| name.contains(alt.as_str())))
        })
    }
}
