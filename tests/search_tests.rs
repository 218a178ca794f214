//! Query engine tests.
//!
//! These tests run full queries through the default rule pipeline:
//! - Keyword rules over printed and canonical records
//! - Numeric ranges and bare numbers
//! - Name fragments, localization, and the claim report

use proptest::prelude::*;

use wx_deck::cards::{CardRecord, CardStore, CardType, Cid, EffectGroup, Pid, Timming};
use wx_deck::localize::TableLocalizer;
use wx_deck::search::keywords::COLORS;
use wx_deck::search::{QueryEngine, RuleClaim, RuleKind, TokenBuffer};

fn store() -> CardStore {
    CardStore::from_records([
        CardRecord::new(Pid::new(1), "タマ", CardType::Lrig)
            .with_color("white")
            .with_class("タマ")
            .with_rarity("ST")
            .with_wxid("WD01-001"),
        CardRecord::new(Pid::new(2), "満月の巫女 タマヨリヒメ", CardType::Lrig)
            .with_color("white")
            .with_level(3)
            .with_limit(7)
            .with_class("タマ")
            .with_rarity("LR")
            .with_wxid("WX01-001")
            .with_illust("Hitoyo"),
        CardRecord::new(Pid::new(3), "サーバント Ｏ", CardType::Signi)
            .with_color("colorless")
            .with_level(1)
            .with_power(1000)
            .with_class("精元")
            .with_rarity("ST")
            .with_wxid("WD01-016")
            .with_effect(EffectGroup::Burst, "Draw a card."),
        CardRecord::new(Pid::new(4), "アーク・オーラ", CardType::Arts)
            .with_color("white")
            .with_limiting("タマ")
            .with_rarity("LC")
            .with_timming(Timming::MainPhase)
            .with_timming(Timming::AttackPhase),
        CardRecord::new(Pid::new(5), "羅植 ハナレ", CardType::Signi)
            .with_color("red")
            .with_level(4)
            .with_power(12000)
            .with_class("龍獣")
            .with_rarity("SR")
            .with_cross_left("羅植 ミツバ")
            .with_effect(EffectGroup::Const, "This SIGNI gets +2000 power."),
        CardRecord::new(Pid::new(6), "サーバント Ｏ", CardType::Signi)
            .with_color("colorless")
            .with_level(1)
            .with_power(1000)
            .with_class("精元")
            .with_rarity("PR")
            .with_wxid("PR-120")
            .reprint_of(Cid::new(3)),
        CardRecord::new(Pid::new(7), "サルベージ", CardType::Spell)
            .with_color("green")
            .with_rarity("C")
            .with_timming(Timming::SpellCutIn)
            .with_effect(EffectGroup::Burst, "Add a card."),
        CardRecord::new(Pid::new(8), "コードアンチ ドロンジョ", CardType::Signi)
            .with_color("blue")
            .with_level(2)
            .with_power(5000)
            .with_limiting("花代/タマ")
            .with_trap(),
    ])
    .unwrap()
}

fn search(store: &CardStore, query: &str) -> Vec<u32> {
    QueryEngine::new(store, None)
        .search(query)
        .iter()
        .map(|r| r.pid.raw())
        .collect()
}

/// Test that an empty query returns the whole store in order.
#[test]
fn test_empty_query() {
    let store = store();
    assert_eq!(search(&store, ""), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(search(&store, " \t "), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

/// Test color and type keywords in several languages.
#[test]
fn test_color_and_type() {
    let store = store();
    assert_eq!(search(&store, "white"), vec![1, 2, 4]);
    assert_eq!(search(&store, "白 lrig"), vec![1, 2]);
    assert_eq!(search(&store, "WHITE L"), vec![1, 2]);
    assert_eq!(search(&store, "s"), vec![3, 5, 6, 8]);
    assert_eq!(search(&store, "red blue"), vec![5, 8]);
}

/// Test rarity and flag keywords.
#[test]
fn test_rarity_and_flags() {
    let store = store();
    assert_eq!(search(&store, "st"), vec![1, 3]);
    assert_eq!(search(&store, "lr sr"), vec![2, 5]);
    assert_eq!(search(&store, "trap"), vec![8]);
    assert!(search(&store, "rise").is_empty());
}

/// Test that intrinsic rules read the canonical record of a reprint.
#[test]
fn test_canonical_resolution() {
    let store = store();
    assert_eq!(search(&store, "burst"), vec![3, 6, 7]);
    assert_eq!(search(&store, "noburst"), vec![5, 8]);
    assert_eq!(search(&store, "const"), vec![5]);
    assert_eq!(search(&store, "cross"), vec![5]);
}

/// Test timing tags, which read the printed record.
#[test]
fn test_timming() {
    let store = store();
    assert_eq!(search(&store, "main"), vec![4]);
    assert_eq!(search(&store, "attack cutin"), vec![4, 7]);
}

/// Test LRIG restriction and SIGNI class keywords.
#[test]
fn test_limiting_and_class() {
    let store = store();
    assert_eq!(search(&store, "タマ"), vec![1, 2, 4, 8]);
    assert_eq!(search(&store, "タマ+"), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(search(&store, "花代"), vec![8]);
    assert_eq!(search(&store, "龍獣"), vec![5]);
}

/// Test keyword ranges and bare numbers.
#[test]
fn test_numeric() {
    let store = store();
    assert_eq!(search(&store, "power>=5000"), vec![5, 8]);
    assert_eq!(search(&store, "power:1000-5000"), vec![3, 6, 8]);
    assert_eq!(search(&store, "lv0"), vec![1]);
    assert_eq!(search(&store, "limit7"), vec![2]);
    assert_eq!(search(&store, "3"), vec![2]);
    assert_eq!(search(&store, "10000+"), vec![5]);
    assert_eq!(search(&store, "1-2"), vec![3, 6, 8]);
}

/// Test that spells and arts never satisfy a numeric constraint.
#[test]
fn test_numeric_excludes_spells_and_arts() {
    let store = store();
    let found = search(&store, "0+");
    assert!(!found.contains(&4));
    assert!(!found.contains(&7));
}

/// Test illustrator and printing code prefixes.
#[test]
fn test_illust_and_wxid() {
    let store = store();
    assert_eq!(search(&store, "illust:hito"), vec![2]);
    assert_eq!(search(&store, "wx01"), vec![2]);
    assert_eq!(search(&store, "wd01"), vec![1, 3]);
    assert_eq!(search(&store, "pr-120"), vec![6]);
}

/// Test name fragments, OR-groups and width folding.
#[test]
fn test_names() {
    let store = store();
    assert_eq!(search(&store, "サーバント"), vec![3, 6]);
    assert_eq!(search(&store, "サーバント o"), vec![3, 6]);
    assert_eq!(search(&store, "ハナレ|ドロンジョ"), vec![5, 8]);
    assert_eq!(search(&store, "アークオーラ"), vec![4]);
    assert!(search(&store, "zzz").is_empty());
}

/// Test keywords combined with a name fragment.
#[test]
fn test_combined_query() {
    let store = store();
    assert_eq!(search(&store, "colorless st サーバント"), vec![3]);
    assert!(search(&store, "red サーバント").is_empty());
}

/// Test that each matching keyword finds every record with that color.
#[test]
fn test_every_color_keyword_finds_its_cards() {
    let store = store();
    for &(color, spellings) in COLORS {
        let expected: Vec<u32> = store
            .iter()
            .filter(|r| r.color.contains(color))
            .map(|r| r.pid.raw())
            .collect();
        for spelling in spellings {
            assert_eq!(search(&store, spelling), expected, "{spelling}");
        }
    }
}

/// Test the per-rule claim report.
#[test]
fn test_claim_report() {
    let store = store();
    let engine = QueryEngine::new(&store, None);
    let query = engine.compile("white 3 lrig tama burst");

    assert_eq!(
        query.claims(),
        &[
            RuleClaim { rule: RuleKind::Color, tokens: vec!["white".into()] },
            RuleClaim { rule: RuleKind::Type, tokens: vec!["lrig".into()] },
            RuleClaim { rule: RuleKind::Skill, tokens: vec!["burst".into()] },
            RuleClaim { rule: RuleKind::Number, tokens: vec!["3".into()] },
            RuleClaim { rule: RuleKind::Name, tokens: vec!["tama".into()] },
        ]
    );
}

/// Test localized class labels and names.
#[test]
fn test_localized_queries() {
    let store = store();
    let en = TableLocalizer::new()
        .with_class("タマ", "Tama")
        .with_class("龍獣", "Dragon Beast")
        .with_name(5, "Hanare, Natural Plant");
    let engine = QueryEngine::new(&store, Some(&en));

    let pids = |query: &str| -> Vec<u32> {
        engine.search(query).iter().map(|r| r.pid.raw()).collect()
    };
    assert_eq!(pids("tama"), vec![1, 2, 4, 8]);
    assert_eq!(pids("dragonbeast"), vec![5]);
    assert_eq!(pids("hanare"), vec![5]);
}

/// Test a database dump keyed by pid, with empty text fields on open cards.
#[test]
fn test_database_dump_with_empty_fields() {
    let store = CardStore::from_json(
        r#"{
            "12": {"pid": 12, "cid": 12, "name": "クロス", "cardType": "SIGNI",
                   "limiting": "", "crossLeft": "左", "crossRight": ""},
            "2": {"pid": 2, "cid": 2, "name": "汎用", "cardType": "SIGNI",
                  "limiting": "", "crossLeft": "", "crossRight": ""},
            "1": {"pid": 1, "cid": 1, "name": "タマ", "cardType": "LRIG",
                  "classes": ["タマ"], "limiting": ""},
            "3": {"pid": 3, "cid": 3, "name": "専用", "cardType": "ARTS",
                  "limiting": "タマ"}
        }"#,
    )
    .unwrap();

    assert_eq!(search(&store, ""), vec![1, 2, 3, 12]);
    assert_eq!(search(&store, "タマ"), vec![1, 3]);
    assert_eq!(search(&store, "タマ+"), vec![1, 2, 3, 12]);
    assert_eq!(search(&store, "cross"), vec![12]);
}

fn query_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    let vocabulary = prop::sample::select(vec![
        "white", "l", "s", "lr", "burst", "noburst", "cross", "main", "タマ", "タマ+",
        "龍獣", "power5000+", "lv3", "limit7", "3", "5-10", "illust:hito", "wx01",
        "pr-120", "サーバント", "a|b", "|", "zzz", "trap", "rise", "acce",
    ]);
    prop::collection::vec(vocabulary, 0..8)
}

proptest! {
    /// Every token is claimed by exactly one rule.
    #[test]
    fn prop_tokens_conserved(words in query_strategy()) {
        let store = store();
        let engine = QueryEngine::new(&store, None);
        let query = words.join(" ");
        let compiled = engine.compile(&query);

        let mut claimed: Vec<String> = compiled
            .claims()
            .iter()
            .flat_map(|claim| claim.tokens.iter().cloned())
            .chain(compiled.unclaimed().iter().cloned())
            .collect();
        let mut original = TokenBuffer::tokenize(&query).as_slice().to_vec();
        claimed.sort();
        original.sort();
        prop_assert_eq!(claimed, original);
        prop_assert!(compiled.unclaimed().is_empty());
    }

    /// Results always come back in store order.
    #[test]
    fn prop_results_in_store_order(words in query_strategy()) {
        let store = store();
        let engine = QueryEngine::new(&store, None);
        let pids: Vec<u32> = engine.search(&words.join(" ")).iter().map(|r| r.pid.raw()).collect();
        prop_assert!(pids.windows(2).all(|w| w[0] < w[1]));
    }
}
